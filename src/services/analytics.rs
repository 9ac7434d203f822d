//! Metric aggregator: pure, idempotent reductions over fetched collections.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::entities::{InventoryRecord, Order, OrderStatus, PaymentStatus, Warehouse};

/// Floor for the restock heuristic.
const MIN_PRODUCTION_RUN: i64 = 500;

/// Total units on hand across all inventory rows.
pub fn total_stock(inventory: &[InventoryRecord]) -> i64 {
    inventory.iter().map(|r| r.quantity).sum()
}

/// Units on hand per warehouse, keyed by location label, in the order the
/// warehouse list was fetched. Warehouses without inventory appear with zero.
pub fn stock_by_warehouse(
    warehouses: &[Warehouse],
    inventory: &[InventoryRecord],
) -> Vec<(String, i64)> {
    warehouses
        .iter()
        .map(|w| {
            let units = inventory
                .iter()
                .filter(|r| r.warehouse_id == w.id)
                .map(|r| r.quantity)
                .sum();
            (w.location.clone(), units)
        })
        .collect()
}

/// Units on hand per product category. Rows without a product or category
/// land in the "Unknown" bucket. Sorted by label for deterministic output.
pub fn stock_by_category(inventory: &[InventoryRecord]) -> Vec<(String, i64)> {
    let mut buckets: HashMap<&str, i64> = HashMap::new();
    for record in inventory {
        let label = record
            .product
            .as_ref()
            .map(|p| p.category_name())
            .unwrap_or("Unknown");
        *buckets.entry(label).or_insert(0) += record.quantity;
    }

    let mut out: Vec<(String, i64)> = buckets
        .into_iter()
        .map(|(label, units)| (label.to_string(), units))
        .collect();
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

/// Exactly the rows with `quantity < low_stock_threshold`, ascending
/// quantity.
pub fn low_stock(inventory: &[InventoryRecord]) -> Vec<&InventoryRecord> {
    let mut rows: Vec<&InventoryRecord> = inventory.iter().filter(|r| r.is_low()).collect();
    rows.sort_by_key(|r| r.quantity);
    rows
}

/// Sum of `total_amount` over an order collection.
pub fn revenue_total(orders: &[Order]) -> Decimal {
    orders.iter().map(|o| o.total_amount).sum()
}

/// Revenue restricted to one fulfilment status.
pub fn revenue_by_status(orders: &[Order], status: OrderStatus) -> Decimal {
    orders
        .iter()
        .filter(|o| o.status == status)
        .map(|o| o.total_amount)
        .sum()
}

/// Revenue restricted to one payment status.
pub fn revenue_by_payment_status(orders: &[Order], status: PaymentStatus) -> Decimal {
    orders
        .iter()
        .filter(|o| o.payment_status == status)
        .map(|o| o.total_amount)
        .sum()
}

/// Percentage of a retailer's credit limit currently consumed.
///
/// Zero-safe: a non-positive limit yields 0.0 instead of the NaN the raw
/// division would produce.
pub fn credit_utilization(credit_used: Decimal, credit_limit: Decimal) -> f64 {
    if credit_limit <= Decimal::ZERO {
        return 0.0;
    }
    (credit_used / credit_limit * Decimal::from(100))
        .to_f64()
        .unwrap_or(0.0)
}

/// Utilization bands used for display emphasis. Boundaries are exclusive:
/// exactly 80% is still Medium, exactly 60% is still Low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CreditBand {
    Low,
    Medium,
    High,
}

impl CreditBand {
    pub fn classify(utilization_pct: f64) -> Self {
        if utilization_pct > 80.0 {
            CreditBand::High
        } else if utilization_pct > 60.0 {
            CreditBand::Medium
        } else {
            CreditBand::Low
        }
    }
}

/// Display remark for a 0-100 credit score.
pub fn credit_score_remark(score: i32) -> &'static str {
    if score >= 90 {
        "Excellent payment history"
    } else if score >= 75 {
        "Good payment history"
    } else {
        "Maintain timely payments to improve score"
    }
}

/// Fixed restock heuristic: three thresholds' worth, at least one minimum
/// production run. Not a forecast.
pub fn production_suggestion(low_stock_threshold: i64) -> i64 {
    (low_stock_threshold * 3).max(MIN_PRODUCTION_RUN)
}

/// Value of stock on hand: sum of quantity times product price. Rows
/// without a product join contribute nothing.
pub fn inventory_value(inventory: &[InventoryRecord]) -> Decimal {
    inventory
        .iter()
        .filter_map(|r| {
            r.product
                .as_ref()
                .map(|p| p.price * Decimal::from(r.quantity))
        })
        .sum()
}

/// Order tallies per status, in fulfilment-sequence order, including zero
/// counts.
pub fn status_counts(orders: &[Order]) -> Vec<(OrderStatus, usize)> {
    OrderStatus::iter()
        .map(|status| {
            let count = orders.iter().filter(|o| o.status == status).count();
            (status, count)
        })
        .collect()
}

/// Orders that are neither delivered nor cancelled.
pub fn open_order_count(orders: &[Order]) -> usize {
    orders.iter().filter(|o| o.status.is_open()).count()
}

/// Orders delivered, regardless of date.
pub fn delivered_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .count()
}

/// Orders delivered on a specific day, by delivery timestamp with the order
/// date as fallback.
pub fn delivered_on(orders: &[Order], day: NaiveDate) -> usize {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered && o.completion_date().date_naive() == day)
        .count()
}
