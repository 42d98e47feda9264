//! Cart error types.

use std::fmt;

use thiserror::Error;
use turbo_cache::CacheError;
use turbo_commerce::{CommerceError, ProductId};
use turbo_data::FetchError;

/// The cart operation an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl CartOperation {
    /// The message shown to the shopper when this operation fails for any
    /// reason other than stock.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CartOperation::Add => "Failed to add product",
            CartOperation::Remove => "Failed to remove product",
            CartOperation::UpdateAmount => "Failed to update product amount",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartOperation::Add => "add",
            CartOperation::Remove => "remove",
            CartOperation::UpdateAmount => "update_amount",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad failure category, for callers that branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartErrorKind {
    /// Requested quantity exceeds available stock.
    OutOfStock,
    /// Target line item or product absent.
    NotFound,
    /// Non-positive requested quantity or non-positive available stock.
    InvalidAmount,
    /// The stock or catalog service failed.
    Service,
    /// The durable store rejected the write.
    Storage,
}

/// Failure of a cart operation.
///
/// `Display` renders the shopper-facing message; the fields carry detail
/// for logs.
#[derive(Error, Debug)]
pub enum CartError {
    /// Requested quantity exceeds available stock.
    #[error("Requested quantity is out of stock")]
    OutOfStock {
        operation: CartOperation,
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// No line item for the product.
    #[error("{}", .operation.failure_message())]
    NotFound {
        operation: CartOperation,
        product_id: ProductId,
    },

    /// The amount or the stock level is not positive.
    #[error("{}", .operation.failure_message())]
    InvalidAmount {
        operation: CartOperation,
        product_id: ProductId,
        amount: i64,
    },

    /// Stock or catalog lookup failed.
    #[error("{}", .operation.failure_message())]
    Service {
        operation: CartOperation,
        product_id: ProductId,
        #[source]
        source: ServiceError,
    },

    /// The new cart could not be persisted.
    #[error("{}", .operation.failure_message())]
    Storage {
        operation: CartOperation,
        #[source]
        source: CacheError,
    },

    /// The change would break a cart invariant.
    #[error("{}", .operation.failure_message())]
    Rejected {
        operation: CartOperation,
        #[source]
        source: CommerceError,
    },
}

impl CartError {
    /// The failure category.
    pub fn kind(&self) -> CartErrorKind {
        match self {
            CartError::OutOfStock { .. } => CartErrorKind::OutOfStock,
            CartError::NotFound { .. } => CartErrorKind::NotFound,
            CartError::InvalidAmount { .. } => CartErrorKind::InvalidAmount,
            CartError::Service {
                source: ServiceError::NotFound(_),
                ..
            } => CartErrorKind::NotFound,
            CartError::Service { .. } => CartErrorKind::Service,
            CartError::Storage { .. } => CartErrorKind::Storage,
            CartError::Rejected { source, .. } => match source {
                CommerceError::ItemNotInCart(_) => CartErrorKind::NotFound,
                CommerceError::Overflow(_) => CartErrorKind::OutOfStock,
                CommerceError::InvalidQuantity { .. } | CommerceError::DuplicateItem(_) => {
                    CartErrorKind::InvalidAmount
                }
            },
        }
    }

    /// The operation that failed.
    pub fn operation(&self) -> CartOperation {
        match self {
            CartError::OutOfStock { operation, .. }
            | CartError::NotFound { operation, .. }
            | CartError::InvalidAmount { operation, .. }
            | CartError::Service { operation, .. }
            | CartError::Storage { operation, .. }
            | CartError::Rejected { operation, .. } => *operation,
        }
    }

    /// The shopper-facing message.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Failure of the stock or catalog service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service has no record for the product.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The request failed or returned an unusable response.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The response was well-formed but inconsistent with the request.
    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

impl ServiceError {
    /// Map a fetch failure for `product_id`, turning 404s into `NotFound`.
    pub fn from_fetch(product_id: ProductId, error: FetchError) -> Self {
        match error {
            FetchError::HttpError { status: 404, .. } => ServiceError::NotFound(product_id),
            other => ServiceError::Fetch(other),
        }
    }
}
