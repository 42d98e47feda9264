//! Stock-checked client cart store for TurboCommerce storefronts.
//!
//! [`CartStore`] owns the cart a shopper is building. Every mutation is
//! validated against live stock, written whole to durable storage, and only
//! then made visible to readers and subscribers.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turbo_cache::Cache;
//! use turbo_cart::{AmountUpdate, CartStore, HttpInventory};
//! use turbo_commerce::ProductId;
//!
//! let inventory = Arc::new(HttpInventory::new("http://localhost:3333"));
//! let store = CartStore::new(inventory.clone(), inventory, Cache::open_file("cart.json")?);
//!
//! store.subscribe(|cart| println!("{} items", cart.total_quantity()));
//!
//! store.add_product(ProductId::new(1)).await?;
//! store.update_product_amount(AmountUpdate::new(ProductId::new(1), 3)).await?;
//! store.remove_product(ProductId::new(1))?;
//! ```

mod error;
mod http;
mod observer;
mod services;
mod store;

pub use error::{CartError, CartErrorKind, CartOperation, ServiceError};
pub use http::HttpInventory;
pub use observer::SubscriptionId;
pub use services::{CatalogService, StockService};
pub use store::{AmountUpdate, CartStore, CartStoreBuilder, DEFAULT_STORAGE_KEY};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AmountUpdate, CartError, CartErrorKind, CartStore, CatalogService, HttpInventory,
        StockService,
    };
    pub use turbo_commerce::prelude::*;
}
