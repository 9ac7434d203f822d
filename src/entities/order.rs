use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use uuid::Uuid;

use super::product::Product;
use super::retailer::Retailer;
use super::warehouse::Warehouse;

/// Order fulfilment states.
///
/// The fulfilment flow is strictly linear, with `Cancelled` as an absorbing
/// side-state reachable from any non-terminal status. The transition guard
/// lives in `services::order_status`; this enum only knows the order of the
/// sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Picked,
    Packed,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The immediate next status along the fulfilment sequence, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Picked),
            OrderStatus::Picked => Some(OrderStatus::Packed),
            OrderStatus::Packed => Some(OrderStatus::OutForDelivery),
            OrderStatus::OutForDelivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    /// Delivered and cancelled orders never move again.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Anything that is neither delivered nor cancelled counts as open.
    pub fn is_open(self) -> bool {
        !self.is_terminal()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    Credit,
    Upi,
    BankTransfer,
    Cod,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Overdue,
}

/// A retailer's order against a warehouse, with line items embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,

    pub retailer_id: Uuid,
    pub warehouse_id: Uuid,

    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,

    pub total_amount: Decimal,

    pub order_date: DateTime<Utc>,
    #[serde(default)]
    pub expected_delivery: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,

    /// Retailer join, embedded by the provider.
    #[serde(default)]
    pub retailer: Option<Retailer>,

    /// Warehouse join, embedded by the provider.
    #[serde(default)]
    pub warehouse: Option<Warehouse>,

    /// Ordered line items with product joins.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// The day this order completed, falling back to the order date when the
    /// delivery timestamp is missing.
    pub fn completion_date(&self) -> DateTime<Utc> {
        self.delivered_at.unwrap_or(self.order_date)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,

    pub quantity: i64,
    pub unit_price: Decimal,
    pub subtotal: Decimal,

    /// Product join (with category), embedded by the provider.
    #[serde(default)]
    pub product: Option<Product>,
}
