use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::charts::map;
use crate::entities::{InventoryRecord, Order, OrderStatus, Retailer, StockStatus, Warehouse};
use crate::errors::DashboardError;
use crate::provider::DataProvider;
use crate::services::analytics::{self, CreditBand};
use crate::services::{geo, order_status};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WarehouseTab {
    #[default]
    Overview,
    Orders,
    Inventory,
    Delivery,
}

/// Stock filter applied on top of the inventory search. `Low` matches rows
/// below threshold; `Good` matches everything else, including Medium.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    Low,
    Good,
}

#[derive(Clone, Debug, Serialize)]
pub struct WarehouseOverview {
    pub name: String,
    pub location: String,
    pub pending_orders: usize,
    pub active_deliveries: usize,
    pub completed_today: usize,
    pub total_stock: i64,
    pub low_stock_alerts: Vec<LowStockAlert>,
    pub served_retailers: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct LowStockAlert {
    pub product_name: String,
    pub quantity: i64,
    pub low_stock_threshold: i64,
}

/// Credit standing of one shop this warehouse serves.
#[derive(Clone, Debug, Serialize)]
pub struct RetailerCreditSummary {
    pub shop_name: String,
    pub credit_limit: Decimal,
    pub credit_used: Decimal,
    pub credit_available: Decimal,
    pub utilization_pct: f64,
    pub band: CreditBand,
}

#[derive(Clone, Debug, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_units: i64,
    pub low_stock_count: usize,
    pub inventory_value: Decimal,
}

/// Acknowledgement of a validated status change. The snapshot itself is
/// not mutated; the provider contract is read-only.
#[derive(Clone, Debug, Serialize)]
pub struct StatusChangeAck {
    pub order_number: String,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// A delivery run with its distance and fixed-speed time estimate.
#[derive(Clone, Debug, Serialize)]
pub struct DeliveryEstimate {
    pub order_number: String,
    pub shop_name: String,
    pub status: OrderStatus,
    pub distance_km: f64,
    pub eta_minutes: i64,
}

/// Single-warehouse operations view: order pipeline, stock levels, and
/// the delivery map for the retailers this warehouse serves.
pub struct WarehouseDashboard {
    provider: Arc<dyn DataProvider>,
    warehouse_id: Uuid,

    tab: WarehouseTab,
    search: String,
    stock_filter: StockFilter,
    status_filter: Option<OrderStatus>,

    warehouse: Option<Warehouse>,
    orders: Vec<Order>,
    inventory: Vec<InventoryRecord>,
    retailers: Vec<Retailer>,
}

impl WarehouseDashboard {
    pub fn new(provider: Arc<dyn DataProvider>, warehouse_id: Uuid) -> Self {
        Self {
            provider,
            warehouse_id,
            tab: WarehouseTab::default(),
            search: String::new(),
            stock_filter: StockFilter::default(),
            status_filter: None,
            warehouse: None,
            orders: Vec::new(),
            inventory: Vec::new(),
            retailers: Vec::new(),
        }
    }

    /// Fetches the warehouse record and the retailer directory in parallel,
    /// then this warehouse's orders and inventory. Retailers are narrowed to
    /// the ones assigned here.
    #[instrument(skip(self), fields(warehouse_id = %self.warehouse_id))]
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        let (warehouse, retailers) = tokio::try_join!(
            self.provider.warehouse(self.warehouse_id),
            self.provider.retailers(),
        )?;

        let warehouse = warehouse.ok_or_else(|| {
            DashboardError::NotFound(format!("warehouse {} not found", self.warehouse_id))
        })?;

        let (orders, inventory) = tokio::try_join!(
            self.provider.orders_by_warehouse(self.warehouse_id),
            self.provider.inventory_by_warehouse(self.warehouse_id),
        )?;

        let retailers: Vec<Retailer> = retailers
            .into_iter()
            .filter(|r| r.assigned_warehouse_id == Some(self.warehouse_id))
            .collect();

        info!(
            name = %warehouse.name,
            orders = orders.len(),
            inventory = inventory.len(),
            retailers = retailers.len(),
            "warehouse dashboard loaded"
        );

        self.warehouse = Some(warehouse);
        self.orders = orders;
        self.inventory = inventory;
        self.retailers = retailers;
        Ok(())
    }

    fn warehouse(&self) -> Result<&Warehouse, DashboardError> {
        self.warehouse
            .as_ref()
            .ok_or_else(|| DashboardError::NotFound("warehouse data not loaded".to_string()))
    }

    pub fn tab(&self) -> WarehouseTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: WarehouseTab) {
        self.tab = tab;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_stock_filter(&mut self, filter: StockFilter) {
        self.stock_filter = filter;
    }

    /// `None` shows orders in every status.
    pub fn set_status_filter(&mut self, status: Option<OrderStatus>) {
        self.status_filter = status;
    }

    pub fn overview(&self) -> Result<WarehouseOverview, DashboardError> {
        self.overview_at(Utc::now().date_naive())
    }

    /// Overview with "completed today" evaluated against an explicit day.
    pub fn overview_at(&self, today: NaiveDate) -> Result<WarehouseOverview, DashboardError> {
        let warehouse = self.warehouse()?;

        let pending_orders = self
            .orders
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::Processing))
            .count();
        let active_deliveries = self
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::OutForDelivery)
            .count();

        let low_stock_alerts = analytics::low_stock(&self.inventory)
            .into_iter()
            .map(|r| LowStockAlert {
                product_name: r
                    .product
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                quantity: r.quantity,
                low_stock_threshold: r.low_stock_threshold,
            })
            .collect();

        Ok(WarehouseOverview {
            name: warehouse.name.clone(),
            location: warehouse.location.clone(),
            pending_orders,
            active_deliveries,
            completed_today: analytics::delivered_on(&self.orders, today),
            total_stock: analytics::total_stock(&self.inventory),
            low_stock_alerts,
            served_retailers: self.retailers.len(),
        })
    }

    /// Credit standing for every shop assigned to this warehouse, in shop
    /// name order.
    pub fn retailer_credit_summaries(&self) -> Vec<RetailerCreditSummary> {
        self.retailers
            .iter()
            .map(|r| {
                let utilization = analytics::credit_utilization(r.credit_used, r.credit_limit);
                RetailerCreditSummary {
                    shop_name: r.shop_name.clone(),
                    credit_limit: r.credit_limit,
                    credit_used: r.credit_used,
                    credit_available: r.credit_available(),
                    utilization_pct: utilization,
                    band: CreditBand::classify(utilization),
                }
            })
            .collect()
    }

    /// Order tallies per status, zero counts included.
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        analytics::status_counts(&self.orders)
    }

    /// Orders narrowed by the active status filter.
    pub fn filtered_orders(&self) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| match self.status_filter {
                Some(status) => o.status == status,
                None => true,
            })
            .collect()
    }

    /// Validates moving an order one step along the fulfilment sequence and
    /// returns an acknowledgement. The held snapshot is left untouched.
    #[instrument(skip(self))]
    pub fn advance_order(&self, order_id: Uuid) -> Result<StatusChangeAck, DashboardError> {
        let order = self
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| DashboardError::NotFound(format!("order {order_id} not found")))?;

        let next = order.status.next().ok_or(DashboardError::InvalidTransition {
            from: order.status,
            to: order.status,
        })?;
        let to = order_status::advance(order.status, next)?;

        info!(order = %order.order_number, from = %order.status, to = %to, "order advanced");
        Ok(StatusChangeAck {
            order_number: order.order_number.clone(),
            from: order.status,
            to,
        })
    }

    /// Validates cancelling an order and returns an acknowledgement.
    pub fn cancel_order(&self, order_id: Uuid) -> Result<StatusChangeAck, DashboardError> {
        let order = self
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| DashboardError::NotFound(format!("order {order_id} not found")))?;

        let to = order_status::advance(order.status, OrderStatus::Cancelled)?;
        Ok(StatusChangeAck {
            order_number: order.order_number.clone(),
            from: order.status,
            to,
        })
    }

    /// Inventory rows narrowed by the product-name search and the stock
    /// filter.
    pub fn filtered_inventory(&self) -> Vec<&InventoryRecord> {
        let needle = self.search.to_lowercase();
        self.inventory
            .iter()
            .filter(|r| {
                r.product
                    .as_ref()
                    .map(|p| p.name.to_lowercase().contains(&needle))
                    .unwrap_or(needle.is_empty())
            })
            .filter(|r| match self.stock_filter {
                StockFilter::All => true,
                StockFilter::Low => r.stock_status() == StockStatus::Low,
                StockFilter::Good => r.stock_status() != StockStatus::Low,
            })
            .collect()
    }

    pub fn inventory_stats(&self) -> InventoryStats {
        InventoryStats {
            total_items: self.inventory.len(),
            total_units: analytics::total_stock(&self.inventory),
            low_stock_count: analytics::low_stock(&self.inventory).len(),
            inventory_value: analytics::inventory_value(&self.inventory),
        }
    }

    /// Map markers: this warehouse plus every retailer it serves.
    pub fn delivery_markers(&self) -> Result<Vec<map::Marker>, DashboardError> {
        let warehouse = self.warehouse()?;
        let mut markers = vec![map::place(
            warehouse.name.clone(),
            map::MarkerKind::Warehouse,
            warehouse.latitude,
            warehouse.longitude,
        )];
        markers.extend(self.retailers.iter().map(|r| {
            map::place(
                r.shop_name.clone(),
                map::MarkerKind::Retailer,
                r.latitude,
                r.longitude,
            )
        }));
        Ok(markers)
    }

    /// Orders currently out for delivery, with distance and ETA to each
    /// destination shop.
    pub fn active_deliveries(&self) -> Result<Vec<DeliveryEstimate>, DashboardError> {
        self.estimates_for(|status| status == OrderStatus::OutForDelivery)
    }

    /// Picked and packed orders waiting for a driver, with the same
    /// estimates.
    pub fn dispatch_ready(&self) -> Result<Vec<DeliveryEstimate>, DashboardError> {
        self.estimates_for(|status| matches!(status, OrderStatus::Picked | OrderStatus::Packed))
    }

    fn estimates_for(
        &self,
        wanted: impl Fn(OrderStatus) -> bool,
    ) -> Result<Vec<DeliveryEstimate>, DashboardError> {
        let warehouse = self.warehouse()?;
        Ok(self
            .orders
            .iter()
            .filter(|o| wanted(o.status))
            .filter_map(|o| {
                let retailer = o.retailer.as_ref()?;
                let distance_km = geo::haversine_km(
                    warehouse.latitude,
                    warehouse.longitude,
                    retailer.latitude,
                    retailer.longitude,
                );
                Some(DeliveryEstimate {
                    order_number: o.order_number.clone(),
                    shop_name: retailer.shop_name.clone(),
                    status: o.status,
                    distance_km,
                    eta_minutes: geo::eta_minutes(distance_km),
                })
            })
            .collect())
    }
}
