//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors raised when a cart would break one of its invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Line item quantities must be at least one.
    #[error("Invalid quantity for {product_id}: {quantity}")]
    InvalidQuantity { product_id: ProductId, quantity: i64 },

    /// A product may appear at most once in a cart.
    #[error("Duplicate line item: {0}")]
    DuplicateItem(ProductId),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Arithmetic overflow.
    #[error("Quantity overflow for {0}")]
    Overflow(ProductId),
}
