//! Shopping cart module.
//!
//! Contains the cart state and its line items.

mod cart;

pub use cart::{CartState, LineItem};
