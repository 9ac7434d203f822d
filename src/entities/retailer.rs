use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::warehouse::Warehouse;

/// A retail shop buying on credit from its assigned warehouse.
///
/// `credit_used <= credit_limit` is expected but not enforced at this layer;
/// the only real guard in the system is the checkout check comparing a
/// prospective cart total against available credit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Retailer {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub shop_name: String,

    pub address: String,

    pub latitude: f64,
    pub longitude: f64,

    #[serde(default)]
    pub assigned_warehouse_id: Option<Uuid>,

    /// Assigned warehouse join, embedded by the provider when requested.
    #[serde(default)]
    pub warehouse: Option<Warehouse>,

    pub credit_limit: Decimal,
    pub credit_used: Decimal,

    /// Payment-history score, 0 to 100.
    #[validate(range(min = 0, max = 100))]
    pub credit_score: i32,

    pub created_at: DateTime<Utc>,
}

impl Retailer {
    /// Credit still available for new orders.
    pub fn credit_available(&self) -> Decimal {
        self.credit_limit - self.credit_used
    }
}
