//! Product catalog module.
//!
//! Contains the product and stock records served by the storefront API.

mod inventory;
mod product;

pub use inventory::StockRecord;
pub use product::ProductDetails;
