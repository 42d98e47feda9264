//! Remote collaborators of the cart store.

use std::sync::Arc;

use async_trait::async_trait;
use turbo_commerce::{ProductDetails, ProductId, StockRecord};

use crate::ServiceError;

/// Source of live stock levels.
///
/// Called once per validation; results are never cached.
#[async_trait]
pub trait StockService: Send + Sync {
    /// Fetch the current stock record for a product.
    async fn stock(&self, product_id: ProductId) -> Result<StockRecord, ServiceError>;
}

/// Source of product details, consulted when a product first enters the cart.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch display details for a product.
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError>;
}

#[async_trait]
impl<T: StockService + ?Sized> StockService for Arc<T> {
    async fn stock(&self, product_id: ProductId) -> Result<StockRecord, ServiceError> {
        (**self).stock(product_id).await
    }
}

#[async_trait]
impl<T: CatalogService + ?Sized> CatalogService for Arc<T> {
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
        (**self).product(product_id).await
    }
}
