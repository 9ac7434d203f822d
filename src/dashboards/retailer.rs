use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::entities::{Order, OrderStatus, PaymentMethod, PaymentStatus, Product, Retailer};
use crate::errors::DashboardError;
use crate::provider::DataProvider;
use crate::services::analytics::{self, CreditBand};
use crate::services::cart::{Cart, CartLine, CheckoutAck};

const RECENT_ORDER_LIMIT: usize = 5;
const PAYMENT_HISTORY_LIMIT: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RetailerTab {
    #[default]
    Overview,
    Catalog,
    Orders,
    Credit,
}

#[derive(Clone, Debug, Serialize)]
pub struct RetailerOverview {
    pub shop_name: String,
    pub address: String,
    pub serviced_by: Option<String>,
    pub pending_orders: usize,
    pub completed_orders: usize,
    pub credit_available: Decimal,
    pub total_spent: Decimal,
    pub credit_utilization_pct: f64,
    pub credit_band: CreditBand,
    pub credit_score: i32,
    pub recent_orders: Vec<OrderGlance>,
}

#[derive(Clone, Debug, Serialize)]
pub struct OrderGlance {
    pub order_number: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
}

#[derive(Clone, Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub item_count: i64,
    pub total: Decimal,
    pub credit_available: Decimal,
    pub within_credit: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct PaymentDue {
    pub order_number: String,
    pub amount: Decimal,
    pub order_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PaymentRecord {
    pub order_number: String,
    pub payment_method: PaymentMethod,
    pub amount: Decimal,
    pub order_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
pub struct CreditOverview {
    pub credit_limit: Decimal,
    pub credit_used: Decimal,
    pub credit_available: Decimal,
    pub utilization_pct: f64,
    pub band: CreditBand,
    pub credit_score: i32,
    pub score_remark: &'static str,
    pub total_pending: Decimal,
    pub pending_payments: Vec<PaymentDue>,
    pub payment_history: Vec<PaymentRecord>,
}

/// Single-retailer view: overview, product catalog with cart, order list,
/// and credit standing. The retailer is selected explicitly by id.
pub struct RetailerDashboard {
    provider: Arc<dyn DataProvider>,
    retailer_id: Uuid,

    tab: RetailerTab,
    search: String,
    category_filter: Option<String>,
    cart: Cart,

    retailer: Option<Retailer>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl RetailerDashboard {
    pub fn new(provider: Arc<dyn DataProvider>, retailer_id: Uuid) -> Self {
        Self {
            provider,
            retailer_id,
            tab: RetailerTab::default(),
            search: String::new(),
            category_filter: None,
            cart: Cart::new(),
            retailer: None,
            products: Vec::new(),
            orders: Vec::new(),
        }
    }

    /// Fetches the retailer record and catalog in parallel, then the
    /// retailer's orders. A missing retailer row is an explicit not-found
    /// condition, not an empty dashboard.
    #[instrument(skip(self), fields(retailer_id = %self.retailer_id))]
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let (retailer, products) = tokio::try_join!(
            self.provider.retailer(self.retailer_id),
            self.provider.products(),
        )?;

        let retailer = retailer.ok_or_else(|| {
            DashboardError::NotFound(format!("retailer {} not found", self.retailer_id))
        })?;

        let orders = self.provider.orders_by_retailer(self.retailer_id).await?;

        info!(
            shop = %retailer.shop_name,
            products = products.len(),
            orders = orders.len(),
            "retailer dashboard loaded"
        );

        self.retailer = Some(retailer);
        self.products = products;
        self.orders = orders;
        Ok(())
    }

    fn retailer(&self) -> Result<&Retailer, DashboardError> {
        self.retailer
            .as_ref()
            .ok_or_else(|| DashboardError::NotFound("retailer data not loaded".to_string()))
    }

    pub fn tab(&self) -> RetailerTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: RetailerTab) {
        self.tab = tab;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// `None` clears the category filter.
    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.category_filter = category;
    }

    pub fn overview(&self) -> Result<RetailerOverview, DashboardError> {
        let retailer = self.retailer()?;
        let utilization =
            analytics::credit_utilization(retailer.credit_used, retailer.credit_limit);

        Ok(RetailerOverview {
            shop_name: retailer.shop_name.clone(),
            address: retailer.address.clone(),
            serviced_by: retailer.warehouse.as_ref().map(|w| w.name.clone()),
            pending_orders: analytics::open_order_count(&self.orders),
            completed_orders: analytics::delivered_count(&self.orders),
            credit_available: retailer.credit_available(),
            total_spent: analytics::revenue_total(&self.orders),
            credit_utilization_pct: utilization,
            credit_band: CreditBand::classify(utilization),
            credit_score: retailer.credit_score,
            recent_orders: self
                .orders
                .iter()
                .take(RECENT_ORDER_LIMIT)
                .map(|o| OrderGlance {
                    order_number: o.order_number.clone(),
                    status: o.status,
                    total_amount: o.total_amount,
                })
                .collect(),
        })
    }

    /// Distinct category names present in the catalog, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .products
            .iter()
            .filter_map(|p| p.category.as_ref().map(|c| c.name.clone()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Catalog filtered by the case-insensitive search term and the active
    /// category filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        let needle = self.search.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .filter(|p| match &self.category_filter {
                Some(category) => p
                    .category
                    .as_ref()
                    .is_some_and(|c| &c.name == category),
                None => true,
            })
            .collect()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn add_to_cart(&mut self, product_id: Uuid) {
        self.cart.add(product_id);
    }

    pub fn remove_from_cart(&mut self, product_id: Uuid) {
        self.cart.remove(product_id);
    }

    pub fn cart_view(&self) -> Result<CartView, DashboardError> {
        let retailer = self.retailer()?;
        let total = self.cart.total(&self.products);
        let credit_available = retailer.credit_available();
        Ok(CartView {
            lines: self.cart.lines(&self.products),
            item_count: self.cart.item_count(),
            total,
            credit_available,
            within_credit: total <= credit_available,
        })
    }

    /// Runs the credit guard and, on success, clears the cart and refreshes
    /// the snapshot. The order itself is not persisted; the provider
    /// contract is read-only.
    #[instrument(skip(self))]
    pub async fn checkout(&mut self) -> Result<CheckoutAck, DashboardError> {
        let retailer = self.retailer()?;
        let ack = self.cart.checkout(&self.products, retailer)?;
        self.cart.clear();
        self.load().await?;
        Ok(ack)
    }

    pub fn credit(&self) -> Result<CreditOverview, DashboardError> {
        let retailer = self.retailer()?;
        let utilization =
            analytics::credit_utilization(retailer.credit_used, retailer.credit_limit);

        let pending_payments: Vec<PaymentDue> = self
            .orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Pending)
            .map(|o| PaymentDue {
                order_number: o.order_number.clone(),
                amount: o.total_amount,
                order_date: o.order_date,
            })
            .collect();
        let total_pending =
            analytics::revenue_by_payment_status(&self.orders, PaymentStatus::Pending);

        // Orders arrive newest-first, so the paid prefix is already the
        // most recent history.
        let payment_history: Vec<PaymentRecord> = self
            .orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Paid)
            .take(PAYMENT_HISTORY_LIMIT)
            .map(|o| PaymentRecord {
                order_number: o.order_number.clone(),
                payment_method: o.payment_method,
                amount: o.total_amount,
                order_date: o.order_date,
            })
            .collect();

        Ok(CreditOverview {
            credit_limit: retailer.credit_limit,
            credit_used: retailer.credit_used,
            credit_available: retailer.credit_available(),
            utilization_pct: utilization,
            band: CreditBand::classify(utilization),
            credit_score: retailer.credit_score,
            score_remark: analytics::credit_score_remark(retailer.credit_score),
            total_pending,
            pending_payments,
            payment_history,
        })
    }
}
