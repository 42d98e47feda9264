//! Storefront API implementation of the stock and catalog services.

use async_trait::async_trait;
use turbo_commerce::{ProductDetails, ProductId, StockRecord};
use turbo_data::FetchClient;

use crate::{CatalogService, ServiceError, StockService};

/// Stock and catalog lookups against the storefront REST API.
///
/// - `GET {base}/stock/{id}` returns `{ "id", "amount" }`
/// - `GET {base}/products/{id}` returns `{ "id", "title", "price", "image" }`
#[derive(Debug, Clone)]
pub struct HttpInventory {
    client: FetchClient,
}

impl HttpInventory {
    /// Create an inventory client rooted at the API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(FetchClient::new().with_base_url(base_url))
    }

    /// Use a preconfigured client; its base URL must point at the API root.
    pub fn with_client(client: FetchClient) -> Self {
        Self { client }
    }

    fn check_id(requested: ProductId, returned: ProductId) -> Result<(), ServiceError> {
        if requested == returned {
            Ok(())
        } else {
            Err(ServiceError::Unexpected(format!(
                "asked for product {}, got {}",
                requested, returned
            )))
        }
    }
}

#[async_trait]
impl StockService for HttpInventory {
    async fn stock(&self, product_id: ProductId) -> Result<StockRecord, ServiceError> {
        let record: StockRecord = self
            .client
            .get_json(format!("/stock/{}", product_id))
            .await
            .map_err(|e| ServiceError::from_fetch(product_id, e))?;
        Self::check_id(product_id, record.id)?;
        Ok(record)
    }
}

#[async_trait]
impl CatalogService for HttpInventory {
    async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
        let product: ProductDetails = self
            .client
            .get_json(format!("/products/{}", product_id))
            .await
            .map_err(|e| ServiceError::from_fetch(product_id, e))?;
        Self::check_id(product_id, product.id)?;
        Ok(product)
    }
}
