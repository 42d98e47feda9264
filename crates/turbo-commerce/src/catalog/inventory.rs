//! Stock availability types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Availability snapshot for a product, as served by the stock API.
///
/// Snapshots are fetched for every validation and never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockRecord {
    /// Product ID.
    pub id: ProductId,
    /// Quantity currently available.
    #[serde(rename = "amount")]
    pub available: i64,
}

impl StockRecord {
    /// Create a new stock record.
    pub fn new(id: ProductId, available: i64) -> Self {
        Self { id, available }
    }

    /// Check if out of stock.
    pub fn is_out_of_stock(&self) -> bool {
        self.available <= 0
    }

    /// Check if a specific quantity can be fulfilled.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_stock() {
        assert!(StockRecord::new(ProductId::new(1), 0).is_out_of_stock());
        assert!(StockRecord::new(ProductId::new(1), -2).is_out_of_stock());
        assert!(!StockRecord::new(ProductId::new(1), 1).is_out_of_stock());
    }

    #[test]
    fn test_can_fulfill() {
        let stock = StockRecord::new(ProductId::new(1), 3);
        assert!(stock.can_fulfill(3));
        assert!(!stock.can_fulfill(4));
    }

    #[test]
    fn test_wire_format() {
        let stock: StockRecord = serde_json::from_str(r#"{"id": 5, "amount": 12}"#).unwrap();
        assert_eq!(stock, StockRecord::new(ProductId::new(5), 12));
    }
}
