//! In-memory shopping cart for the retailer catalog view, with the credit
//! checkout guard.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::entities::{Product, Retailer};
use crate::errors::DashboardError;

/// Product-id to quantity mapping. Prices are resolved against the catalog
/// at read time, so a cart never goes stale when the catalog reloads.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    quantities: HashMap<Uuid, i64>,
}

/// One cart row resolved against the catalog.
#[derive(Clone, Debug, Serialize)]
pub struct CartLine {
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i64,
    pub line_total: Decimal,
}

/// Checkout acknowledgement. Nothing is persisted: the provider contract is
/// read-only, so a successful checkout only means the guard passed.
#[derive(Clone, Debug, Serialize)]
pub struct CheckoutAck {
    pub item_count: i64,
    pub total: Decimal,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product.
    pub fn add(&mut self, product_id: Uuid) {
        *self.quantities.entry(product_id).or_insert(0) += 1;
    }

    /// Removes one unit; the row disappears when it hits zero.
    pub fn remove(&mut self, product_id: Uuid) {
        if let Some(qty) = self.quantities.get_mut(&product_id) {
            *qty -= 1;
            if *qty <= 0 {
                self.quantities.remove(&product_id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Units across all rows.
    pub fn item_count(&self) -> i64 {
        self.quantities.values().sum()
    }

    pub fn quantity_of(&self, product_id: Uuid) -> i64 {
        self.quantities.get(&product_id).copied().unwrap_or(0)
    }

    /// Cart rows resolved against the catalog, sorted by product name.
    /// Quantities for products missing from the catalog are skipped, the
    /// same way the source treated unknown ids as zero-priced.
    pub fn lines(&self, catalog: &[Product]) -> Vec<CartLine> {
        let mut lines: Vec<CartLine> = self
            .quantities
            .iter()
            .filter_map(|(&product_id, &quantity)| {
                catalog.iter().find(|p| p.id == product_id).map(|product| {
                    let line_total = product.price * Decimal::from(quantity);
                    CartLine {
                        product_id,
                        product_name: product.name.clone(),
                        unit_price: product.price,
                        quantity,
                        line_total,
                    }
                })
            })
            .collect();
        lines.sort_by(|a, b| a.product_name.cmp(&b.product_name));
        lines
    }

    /// Sum of price times quantity over the resolved lines.
    pub fn total(&self, catalog: &[Product]) -> Decimal {
        self.lines(catalog).iter().map(|l| l.line_total).sum()
    }

    /// The checkout guard: blocks when the prospective total exceeds the
    /// retailer's available credit. On success returns an acknowledgement;
    /// no order is written anywhere.
    pub fn checkout(
        &self,
        catalog: &[Product],
        retailer: &Retailer,
    ) -> Result<CheckoutAck, DashboardError> {
        let total = self.total(catalog);
        let available = retailer.credit_available();

        if total > available {
            return Err(DashboardError::InsufficientCredit {
                required: total,
                available,
            });
        }

        info!(
            retailer = %retailer.shop_name,
            %total,
            items = self.item_count(),
            "order acknowledged (not persisted)"
        );
        Ok(CheckoutAck {
            item_count: self.item_count(),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn product(name: &str, price: Decimal) -> Product {
        Product {
            id: Uuid::new_v4(),
            category_id: None,
            category: None,
            name: name.to_string(),
            description: None,
            price,
            moq: 1,
            created_at: Utc::now(),
        }
    }

    fn retailer(limit: Decimal, used: Decimal) -> Retailer {
        Retailer {
            id: Uuid::new_v4(),
            shop_name: "Test Traders".to_string(),
            address: "Market Road".to_string(),
            latitude: 10.0,
            longitude: 76.0,
            assigned_warehouse_id: None,
            warehouse: None,
            credit_limit: limit,
            credit_used: used,
            credit_score: 80,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let a = product("A", dec!(100));
        let b = product("B", dec!(50));
        let catalog = vec![a.clone(), b.clone()];

        let mut cart = Cart::new();
        cart.add(a.id);
        cart.add(a.id);
        cart.add(b.id);

        assert_eq!(cart.total(&catalog), dec!(250));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn remove_drops_row_at_zero() {
        let a = product("A", dec!(10));
        let mut cart = Cart::new();
        cart.add(a.id);
        cart.add(a.id);
        cart.remove(a.id);
        assert_eq!(cart.quantity_of(a.id), 1);
        cart.remove(a.id);
        assert!(cart.is_empty());
        // removing from an empty cart is a no-op
        cart.remove(a.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn checkout_blocked_when_total_exceeds_available_credit() {
        let a = product("A", dec!(100));
        let catalog = vec![a.clone()];
        // 10_000 limit, 9_950 used: 50 available
        let retailer = retailer(dec!(10000), dec!(9950));

        let mut cart = Cart::new();
        cart.add(a.id);

        let err = cart.checkout(&catalog, &retailer).unwrap_err();
        match err {
            DashboardError::InsufficientCredit {
                required,
                available,
            } => {
                assert_eq!(required, dec!(100));
                assert_eq!(available, dec!(50));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn checkout_passes_at_exactly_available_credit() {
        let a = product("A", dec!(50));
        let catalog = vec![a.clone()];
        let retailer = retailer(dec!(10000), dec!(9950));

        let mut cart = Cart::new();
        cart.add(a.id);

        let ack = cart.checkout(&catalog, &retailer).unwrap();
        assert_eq!(ack.total, dec!(50));
        assert_eq!(ack.item_count, 1);
    }

    #[test]
    fn unknown_product_ids_are_ignored() {
        let a = product("A", dec!(100));
        let mut cart = Cart::new();
        cart.add(Uuid::new_v4());
        cart.add(a.id);
        assert_eq!(cart.total(std::slice::from_ref(&a)), dec!(100));
        assert_eq!(cart.lines(std::slice::from_ref(&a)).len(), 1);
    }
}
