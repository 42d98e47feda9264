//! Cart domain types for TurboCommerce storefront clients.
//!
//! This crate holds the plain data a client-side cart works with:
//!
//! - **Cart**: [`CartState`] and its [`LineItem`]s
//! - **Catalog**: [`ProductDetails`] served by the catalog API and the
//!   [`StockRecord`] served by the stock API
//!
//! The JSON shape of every type matches the storefront API and the
//! client-side storage format, so values round-trip through both unchanged.
//!
//! # Example
//!
//! ```rust
//! use turbo_commerce::prelude::*;
//!
//! let details = ProductDetails {
//!     id: ProductId::new(1),
//!     title: "Running shoe".to_string(),
//!     price: 179.9,
//!     image: "https://cdn.example.com/shoe.jpg".to_string(),
//! };
//!
//! let mut cart = CartState::new();
//! cart.push(LineItem::from_product(details)).unwrap();
//! cart.increment(ProductId::new(1)).unwrap();
//!
//! assert_eq!(cart.quantity_of(ProductId::new(1)), Some(2));
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;

pub use cart::{CartState, LineItem};
pub use catalog::{ProductDetails, StockRecord};
pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Cart
    pub use crate::cart::{CartState, LineItem};

    // Catalog
    pub use crate::catalog::{ProductDetails, StockRecord};
}

#[cfg(test)]
mod tests {
    use crate::{CartState, LineItem, ProductDetails, ProductId, StockRecord};

    #[test]
    fn test_root_exports() {
        let details = ProductDetails {
            id: ProductId::new(4),
            title: "Slip-on".to_string(),
            price: 99.0,
            image: String::new(),
        };
        let mut cart = CartState::new();
        cart.push(LineItem::from_product(details)).unwrap();

        let stock = StockRecord::new(ProductId::new(4), 1);
        assert!(stock.can_fulfill(cart.total_quantity()));
    }
}
