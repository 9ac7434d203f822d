use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};

use crate::charts::{bar, donut, line, map, Datum};
use crate::entities::{InventoryRecord, Order, StockStatus, Warehouse};
use crate::errors::DashboardError;
use crate::provider::DataProvider;
use crate::services::analytics;

/// Static weekly demand series shown on the company overview. The source
/// system displays this fixed sample rather than a computed trend.
const DEMAND_TREND: [(&str, f64); 7] = [
    ("Mon", 150.0),
    ("Tue", 180.0),
    ("Wed", 165.0),
    ("Thu", 195.0),
    ("Fri", 220.0),
    ("Sat", 200.0),
    ("Sun", 170.0),
];

#[derive(Clone, Debug, Serialize)]
pub struct CompanySummary {
    pub total_stock: i64,
    pub total_orders: usize,
    pub low_stock_count: usize,
    pub total_revenue: Decimal,
}

/// A restock suggestion for one low-stock row.
#[derive(Clone, Debug, Serialize)]
pub struct ProductionSuggestion {
    pub product_name: String,
    pub warehouse_location: String,
    pub quantity: i64,
    pub low_stock_threshold: i64,
    pub suggested_quantity: i64,
}

/// One row of the company stock-status table.
#[derive(Clone, Debug, Serialize)]
pub struct StockRow {
    pub warehouse_location: String,
    pub product_name: String,
    pub quantity: i64,
    pub status: StockStatus,
}

/// Network-wide view over every warehouse, order, and inventory row.
pub struct CompanyDashboard {
    provider: Arc<dyn DataProvider>,
    warehouses: Vec<Warehouse>,
    inventory: Vec<InventoryRecord>,
    orders: Vec<Order>,
    low_stock: Vec<InventoryRecord>,
}

impl CompanyDashboard {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self {
            provider,
            warehouses: Vec::new(),
            inventory: Vec::new(),
            orders: Vec::new(),
            low_stock: Vec::new(),
        }
    }

    /// Fetches all four collections in parallel and replaces the held
    /// snapshot.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let (warehouses, inventory, orders, low_stock) = tokio::try_join!(
            self.provider.warehouses(),
            self.provider.inventory_all(),
            self.provider.orders_all(),
            self.provider.inventory_low_stock(),
        )?;

        info!(
            warehouses = warehouses.len(),
            inventory = inventory.len(),
            orders = orders.len(),
            low_stock = low_stock.len(),
            "company dashboard loaded"
        );

        self.warehouses = warehouses;
        self.inventory = inventory;
        self.orders = orders;
        self.low_stock = low_stock;
        Ok(())
    }

    pub fn summary(&self) -> CompanySummary {
        CompanySummary {
            total_stock: analytics::total_stock(&self.inventory),
            total_orders: self.orders.len(),
            low_stock_count: self.low_stock.len(),
            total_revenue: analytics::revenue_total(&self.orders),
        }
    }

    /// Inventory-by-warehouse bar chart.
    pub fn stock_by_warehouse_chart(&self) -> Vec<bar::Bar> {
        let data: Vec<Datum> = analytics::stock_by_warehouse(&self.warehouses, &self.inventory)
            .into_iter()
            .map(Datum::from)
            .collect();
        bar::layout(&data)
    }

    /// Stock-distribution-by-category donut.
    pub fn stock_by_category_chart(&self) -> Vec<donut::Slice> {
        let data: Vec<Datum> = analytics::stock_by_category(&self.inventory)
            .into_iter()
            .map(Datum::from)
            .collect();
        donut::layout(&data)
    }

    /// Seven-day demand trend line.
    pub fn demand_trend_chart(&self) -> Option<line::LineChart> {
        let data: Vec<Datum> = DEMAND_TREND
            .iter()
            .map(|&(label, value)| Datum::new(label, value))
            .collect();
        line::layout(&data)
    }

    /// Map markers for the warehouse network.
    pub fn warehouse_markers(&self) -> Vec<map::Marker> {
        self.warehouses
            .iter()
            .map(|w| {
                map::place(
                    w.location.clone(),
                    map::MarkerKind::Warehouse,
                    w.latitude,
                    w.longitude,
                )
            })
            .collect()
    }

    /// Restock suggestions for the most urgent low-stock rows. Empty means
    /// everything is well stocked.
    pub fn production_plan(&self, limit: usize) -> Vec<ProductionSuggestion> {
        self.low_stock
            .iter()
            .take(limit)
            .map(|r| ProductionSuggestion {
                product_name: r
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                warehouse_location: r
                    .warehouse
                    .as_ref()
                    .map(|w| w.location.clone())
                    .unwrap_or_default(),
                quantity: r.quantity,
                low_stock_threshold: r.low_stock_threshold,
                suggested_quantity: analytics::production_suggestion(r.low_stock_threshold),
            })
            .collect()
    }

    /// Recent stock rows with their derived status, fetch order preserved
    /// (most recently updated first).
    pub fn stock_table(&self, limit: usize) -> Vec<StockRow> {
        self.inventory
            .iter()
            .take(limit)
            .map(|r| StockRow {
                warehouse_location: r
                    .warehouse
                    .as_ref()
                    .map(|w| w.location.clone())
                    .unwrap_or_default(),
                product_name: r
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                quantity: r.quantity,
                status: r.stock_status(),
            })
            .collect()
    }
}
