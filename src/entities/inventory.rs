use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use super::product::Product;
use super::warehouse::Warehouse;

/// Stock level classification, derived and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum StockStatus {
    Low,
    Medium,
    Good,
}

/// Stock of one product at one warehouse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: Uuid,
    pub warehouse_id: Uuid,
    pub product_id: Uuid,

    pub quantity: i64,
    pub low_stock_threshold: i64,

    pub last_updated: DateTime<Utc>,

    /// Product join (with category), embedded by the provider.
    #[serde(default)]
    pub product: Option<Product>,

    /// Warehouse join, embedded by the provider.
    #[serde(default)]
    pub warehouse: Option<Warehouse>,
}

impl InventoryRecord {
    /// Below the restock threshold.
    pub fn is_low(&self) -> bool {
        self.quantity < self.low_stock_threshold
    }

    /// `quantity < threshold` is Low, below twice the threshold is Medium,
    /// everything above is Good.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity < self.low_stock_threshold {
            StockStatus::Low
        } else if self.quantity < self.low_stock_threshold * 2 {
            StockStatus::Medium
        } else {
            StockStatus::Good
        }
    }
}
