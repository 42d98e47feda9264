//! Cart state and line item types.

use crate::catalog::ProductDetails;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The full contents of a cart.
///
/// Line items keep insertion order and each product appears at most once
/// with a quantity of at least one. Deserialization enforces the same rules,
/// so a stored cart that violates them is rejected rather than loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing items, checking every invariant.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CommerceError> {
        let mut cart = Self::new();
        for item in items {
            cart.push(item)?;
        }
        Ok(cart)
    }

    /// Append a new line item to the end of the cart.
    ///
    /// Returns an error if:
    /// - The quantity is not positive
    /// - A line item for the same product already exists
    pub fn push(&mut self, item: LineItem) -> Result<(), CommerceError> {
        if item.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity {
                product_id: item.id,
                quantity: item.quantity,
            });
        }
        if self.contains(item.id) {
            return Err(CommerceError::DuplicateItem(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Increase the quantity of an existing line item by one.
    ///
    /// Returns the new quantity.
    pub fn increment(&mut self, product_id: ProductId) -> Result<i64, CommerceError> {
        let item = self
            .get_mut(product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        item.quantity = item
            .quantity
            .checked_add(1)
            .ok_or(CommerceError::Overflow(product_id))?;
        Ok(item.quantity)
    }

    /// Set the quantity of an existing line item.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity {
                product_id,
                quantity,
            });
        }
        let item = self
            .get_mut(product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove the line item for a product.
    pub fn remove(&mut self, product_id: ProductId) -> Option<LineItem> {
        let index = self.items.iter().position(|i| i.id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Get a line item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    fn get_mut(&mut self, product_id: ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.id == product_id)
    }

    /// Check whether the cart holds a product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of a product, if it is in the cart.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.get(product_id).map(|i| i.quantity)
    }

    /// Get total item count (sum of quantities).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over line items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }
}

impl TryFrom<Vec<LineItem>> for CartState {
    type Error = CommerceError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<CartState> for Vec<LineItem> {
    fn from(cart: CartState) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A product entry in the cart with its requested quantity.
///
/// Field names on the wire follow the storefront format: `price`, `image`
/// and `amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product ID, unique within a cart.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price as served by the catalog.
    #[serde(rename = "price")]
    pub unit_price: f64,
    /// Product image URL.
    #[serde(rename = "image")]
    pub image_ref: String,
    /// Quantity.
    #[serde(rename = "amount")]
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item with quantity one from catalog details.
    pub fn from_product(details: ProductDetails) -> Self {
        Self {
            id: details.id,
            title: details.title,
            unit_price: details.price,
            image_ref: details.image,
            quantity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, quantity: i64) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            title: format!("Product {}", id),
            unit_price: 99.9,
            image_ref: format!("https://cdn.example.com/{}.jpg", id),
            quantity,
        }
    }

    #[test]
    fn test_cart_creation() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut cart = CartState::new();
        cart.push(item(3, 1)).unwrap();
        cart.push(item(1, 2)).unwrap();
        cart.push(item(2, 1)).unwrap();

        let ids: Vec<u64> = cart.iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let mut cart = CartState::new();
        cart.push(item(1, 1)).unwrap();

        let result = cart.push(item(1, 4));
        assert_eq!(result, Err(CommerceError::DuplicateItem(ProductId::new(1))));
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));
    }

    #[test]
    fn test_push_rejects_zero_quantity() {
        let mut cart = CartState::new();
        assert!(cart.push(item(1, 0)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment() {
        let mut cart = CartState::new();
        cart.push(item(1, 1)).unwrap();

        assert_eq!(cart.increment(ProductId::new(1)), Ok(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(
            cart.increment(ProductId::new(9)),
            Err(CommerceError::ItemNotInCart(ProductId::new(9)))
        );
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = CartState::new();
        cart.push(item(1, 1)).unwrap();

        cart.set_quantity(ProductId::new(1), 5).unwrap();
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(5));

        assert!(cart.set_quantity(ProductId::new(1), 0).is_err());
        assert!(cart.set_quantity(ProductId::new(2), 3).is_err());
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(5));
    }

    #[test]
    fn test_remove() {
        let mut cart = CartState::new();
        cart.push(item(1, 1)).unwrap();
        cart.push(item(2, 1)).unwrap();

        let removed = cart.remove(ProductId::new(1)).unwrap();
        assert_eq!(removed.id, ProductId::new(1));
        assert!(cart.remove(ProductId::new(1)).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_storage_format() {
        let mut cart = CartState::new();
        cart.push(item(1, 2)).unwrap();

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "id": 1,
                "title": "Product 1",
                "price": 99.9,
                "image": "https://cdn.example.com/1.jpg",
                "amount": 2
            }])
        );

        let restored: CartState = serde_json::from_value(value).unwrap();
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_deserialize_rejects_broken_invariants() {
        let duplicate = r#"[
            {"id": 1, "title": "A", "price": 1.0, "image": "a", "amount": 1},
            {"id": 1, "title": "A", "price": 1.0, "image": "a", "amount": 2}
        ]"#;
        assert!(serde_json::from_str::<CartState>(duplicate).is_err());

        let empty_line = r#"[{"id": 1, "title": "A", "price": 1.0, "image": "a", "amount": 0}]"#;
        assert!(serde_json::from_str::<CartState>(empty_line).is_err());
    }

    #[test]
    fn test_from_product() {
        let details = ProductDetails {
            id: ProductId::new(4),
            title: "Sneaker".to_string(),
            price: 139.9,
            image: "sneaker.jpg".to_string(),
        };
        let line = LineItem::from_product(details);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price, 139.9);
        assert_eq!(line.image_ref, "sneaker.jpg");
    }
}
