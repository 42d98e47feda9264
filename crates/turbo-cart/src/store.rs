//! The cart store.

use std::sync::{Arc, PoisonError, RwLock};

use turbo_cache::Cache;
use turbo_commerce::{CartState, LineItem, ProductId};

use crate::observer::Listeners;
use crate::{
    CartError, CartOperation, CatalogService, ServiceError, StockService, SubscriptionId,
};

/// Storage key the storefront has always kept the cart under.
pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Request to set a line item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountUpdate {
    /// Product whose line item changes.
    pub product_id: ProductId,
    /// Requested quantity.
    pub amount: i64,
}

impl AmountUpdate {
    /// Request `amount` units of `product_id`.
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// Owns the shopper's cart.
///
/// Each operation fetches what it needs, validates against a snapshot of the
/// current cart, and then commits: the whole new cart is written to the
/// durable store, swapped in as the current state, and handed to every
/// subscriber. A failed operation changes nothing.
///
/// Operations on the same store are not serialized against each other. Two
/// overlapping calls validate against the same snapshot and the later commit
/// wins.
pub struct CartStore {
    stock: Arc<dyn StockService>,
    catalog: Arc<dyn CatalogService>,
    cache: Cache,
    storage_key: String,
    state: RwLock<CartState>,
    listeners: Listeners,
}

impl CartStore {
    /// Create a store with the default storage key, loading any saved cart.
    pub fn new(
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn CatalogService>,
        cache: Cache,
    ) -> Self {
        Self::builder(stock, catalog, cache).build()
    }

    /// Start building a store.
    pub fn builder(
        stock: Arc<dyn StockService>,
        catalog: Arc<dyn CatalogService>,
        cache: Cache,
    ) -> CartStoreBuilder {
        CartStoreBuilder {
            stock,
            catalog,
            cache,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> CartState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Register a listener called with the new cart after every commit.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Add one unit of a product.
    ///
    /// A product already in the cart gets its quantity bumped if stock
    /// allows; a new product is looked up in the catalog and appended with
    /// quantity one.
    pub async fn add_product(&self, product_id: ProductId) -> Result<CartState, CartError> {
        let operation = CartOperation::Add;
        let stock = self
            .stock
            .stock(product_id)
            .await
            .map_err(|source| service_failure(operation, product_id, source))?;

        let mut next = self.cart();
        let requested = next
            .quantity_of(product_id)
            .map_or(1, |quantity| quantity.saturating_add(1));

        if stock.is_out_of_stock() || !stock.can_fulfill(requested) {
            tracing::debug!(
                %product_id,
                requested,
                available = stock.available,
                "add rejected: out of stock"
            );
            return Err(CartError::OutOfStock {
                operation,
                product_id,
                requested,
                available: stock.available,
            });
        }

        if next.contains(product_id) {
            next.increment(product_id)
                .map_err(|source| CartError::Rejected { operation, source })?;
        } else {
            let details = self
                .catalog
                .product(product_id)
                .await
                .map_err(|source| service_failure(operation, product_id, source))?;
            next.push(LineItem::from_product(details))
                .map_err(|source| CartError::Rejected { operation, source })?;
        }

        let cart = self.commit(operation, next)?;
        tracing::info!(%product_id, quantity = requested, "product added to cart");
        Ok(cart)
    }

    /// Remove a product's line item entirely.
    pub fn remove_product(&self, product_id: ProductId) -> Result<CartState, CartError> {
        let operation = CartOperation::Remove;
        let mut next = self.cart();

        if next.remove(product_id).is_none() {
            tracing::debug!(%product_id, "remove rejected: not in cart");
            return Err(CartError::NotFound {
                operation,
                product_id,
            });
        }

        let cart = self.commit(operation, next)?;
        tracing::info!(%product_id, "product removed from cart");
        Ok(cart)
    }

    /// Set a line item's quantity, checked against live stock.
    pub async fn update_product_amount(
        &self,
        update: AmountUpdate,
    ) -> Result<CartState, CartError> {
        let operation = CartOperation::UpdateAmount;
        let AmountUpdate { product_id, amount } = update;

        let stock = self
            .stock
            .stock(product_id)
            .await
            .map_err(|source| service_failure(operation, product_id, source))?;

        if stock.is_out_of_stock() || amount <= 0 {
            tracing::debug!(
                %product_id,
                amount,
                available = stock.available,
                "update rejected: non-positive amount or stock"
            );
            return Err(CartError::InvalidAmount {
                operation,
                product_id,
                amount,
            });
        }

        if !stock.can_fulfill(amount) {
            tracing::debug!(
                %product_id,
                amount,
                available = stock.available,
                "update rejected: out of stock"
            );
            return Err(CartError::OutOfStock {
                operation,
                product_id,
                requested: amount,
                available: stock.available,
            });
        }

        let mut next = self.cart();
        if !next.contains(product_id) {
            tracing::debug!(%product_id, "update rejected: not in cart");
            return Err(CartError::NotFound {
                operation,
                product_id,
            });
        }
        next.set_quantity(product_id, amount)
            .map_err(|source| CartError::Rejected { operation, source })?;

        let cart = self.commit(operation, next)?;
        tracing::info!(%product_id, amount, "cart amount updated");
        Ok(cart)
    }

    /// Persist, publish, and notify.
    ///
    /// The state lock is held across the durable write and the swap, so the
    /// in-memory cart always equals the last persisted copy. Listeners run
    /// after the lock is released.
    fn commit(&self, operation: CartOperation, next: CartState) -> Result<CartState, CartError> {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            if let Err(source) = self.cache.set(&self.storage_key, &next) {
                tracing::warn!(
                    operation = operation.as_str(),
                    key = %self.storage_key,
                    error = %source,
                    "failed to persist cart"
                );
                return Err(CartError::Storage { operation, source });
            }
            *state = next.clone();
        }

        self.listeners.notify(&next);
        Ok(next)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("storage_key", &self.storage_key)
            .field("cart", &self.cart())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

/// Builder for [`CartStore`].
pub struct CartStoreBuilder {
    stock: Arc<dyn StockService>,
    catalog: Arc<dyn CatalogService>,
    cache: Cache,
    storage_key: String,
}

impl CartStoreBuilder {
    /// Persist under a different key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Load the saved cart and create the store.
    ///
    /// A missing entry starts an empty cart. So does an unreadable one: it
    /// is logged and left in place until the first commit overwrites it.
    pub fn build(self) -> CartStore {
        let state = load_cart(&self.cache, &self.storage_key);
        CartStore {
            stock: self.stock,
            catalog: self.catalog,
            cache: self.cache,
            storage_key: self.storage_key,
            state: RwLock::new(state),
            listeners: Listeners::default(),
        }
    }
}

fn load_cart(cache: &Cache, key: &str) -> CartState {
    match cache.get::<CartState>(key) {
        Ok(Some(cart)) => {
            tracing::debug!(key, items = cart.len(), "restored saved cart");
            cart
        }
        Ok(None) => CartState::new(),
        Err(error) => {
            tracing::warn!(key, %error, "ignoring unreadable saved cart");
            CartState::new()
        }
    }
}

fn service_failure(
    operation: CartOperation,
    product_id: ProductId,
    source: ServiceError,
) -> CartError {
    tracing::warn!(
        operation = operation.as_str(),
        %product_id,
        error = %source,
        "inventory service failed"
    );
    CartError::Service {
        operation,
        product_id,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use turbo_cache::{KvBackend, MemoryBackend};
    use turbo_commerce::{ProductDetails, StockRecord};

    struct FixedStock(i64);

    #[async_trait]
    impl StockService for FixedStock {
        async fn stock(&self, product_id: ProductId) -> Result<StockRecord, ServiceError> {
            Ok(StockRecord::new(product_id, self.0))
        }
    }

    #[async_trait]
    impl CatalogService for FixedStock {
        async fn product(&self, product_id: ProductId) -> Result<ProductDetails, ServiceError> {
            Ok(ProductDetails {
                id: product_id,
                title: format!("Product {}", product_id),
                price: 10.0,
                image: String::new(),
            })
        }
    }

    fn store_with(cache: Cache, available: i64) -> CartStore {
        let inventory = Arc::new(FixedStock(available));
        CartStore::new(inventory.clone(), inventory, cache)
    }

    #[test]
    fn test_starts_empty_without_saved_cart() {
        let store = store_with(Cache::in_memory(), 5);
        assert!(store.cart().is_empty());
        assert_eq!(store.storage_key(), DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_restores_saved_cart() {
        let backend = MemoryBackend::new();
        backend
            .set(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":1,"title":"A","price":1.5,"image":"a.jpg","amount":2}]"#,
            )
            .unwrap();

        let store = store_with(Cache::new(backend), 5);
        assert_eq!(store.cart().quantity_of(ProductId::new(1)), Some(2));
    }

    #[test]
    fn test_ignores_corrupt_saved_cart() {
        let backend = MemoryBackend::new();
        backend.set(DEFAULT_STORAGE_KEY, "{{{").unwrap();

        let store = store_with(Cache::new(backend), 5);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_custom_storage_key() {
        let inventory = Arc::new(FixedStock(5));
        let store = CartStore::builder(inventory.clone(), inventory, Cache::in_memory())
            .storage_key("cart:guest")
            .build();
        assert_eq!(store.storage_key(), "cart:guest");
    }

    #[tokio::test]
    async fn test_commit_notifies_subscribers_once() {
        let store = store_with(Cache::in_memory(), 5);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        store.subscribe(move |cart| {
            assert_eq!(cart.len(), 1);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        store.add_product(ProductId::new(1)).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Failures never notify.
        assert!(store.remove_product(ProductId::new(2)).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsubscribed_listener_is_not_called() {
        let store = store_with(Cache::in_memory(), 5);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(store.unsubscribe(id));
        store.add_product(ProductId::new(1)).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_persisted_copy_matches_memory() {
        let cache = Cache::in_memory();
        let store = store_with(cache.clone(), 5);

        store.add_product(ProductId::new(1)).await.unwrap();
        store.add_product(ProductId::new(2)).await.unwrap();
        store.add_product(ProductId::new(1)).await.unwrap();

        let saved: CartState = cache.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(saved, store.cart());

        // A fresh store over the same cache restores the same cart.
        let reloaded = store_with(cache, 5);
        assert_eq!(reloaded.cart(), store.cart());
    }
}
