//! Data-access facade over the hosted data backend.
//!
//! All persistence lives behind this read-only contract. Controllers receive
//! an injected `Arc<dyn DataProvider>`, so tests and the demo binary can
//! substitute the in-memory fake for the REST client.

pub mod memory;
pub mod rest;

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{InventoryRecord, Order, Product, ProductCategory, Retailer, Warehouse};
use crate::errors::DashboardError;

pub use memory::MemoryProvider;
pub use rest::RestProvider;

/// Read contract against the external data provider, one call per
/// collection. Sort orders are part of the contract; callers rely on them.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// All warehouses, name ascending.
    async fn warehouses(&self) -> Result<Vec<Warehouse>, DashboardError>;

    /// One warehouse by id, or `None`.
    async fn warehouse(&self, id: Uuid) -> Result<Option<Warehouse>, DashboardError>;

    /// All products with category joins, name ascending.
    async fn products(&self) -> Result<Vec<Product>, DashboardError>;

    /// All product categories, name ascending.
    async fn categories(&self) -> Result<Vec<ProductCategory>, DashboardError>;

    /// All inventory rows with product and warehouse joins, most recently
    /// updated first.
    async fn inventory_all(&self) -> Result<Vec<InventoryRecord>, DashboardError>;

    /// Inventory for one warehouse, most recently updated first.
    async fn inventory_by_warehouse(
        &self,
        warehouse_id: Uuid,
    ) -> Result<Vec<InventoryRecord>, DashboardError>;

    /// Rows below their low-stock threshold, quantity ascending. The
    /// threshold comparison is applied client-side on top of the ordered
    /// fetch.
    async fn inventory_low_stock(&self) -> Result<Vec<InventoryRecord>, DashboardError>;

    /// All retailers with warehouse joins, shop name ascending.
    async fn retailers(&self) -> Result<Vec<Retailer>, DashboardError>;

    /// One retailer by id, or `None`.
    async fn retailer(&self, id: Uuid) -> Result<Option<Retailer>, DashboardError>;

    /// All orders with retailer, warehouse, and item joins, newest first.
    async fn orders_all(&self) -> Result<Vec<Order>, DashboardError>;

    /// Orders for one retailer, newest first.
    async fn orders_by_retailer(&self, retailer_id: Uuid) -> Result<Vec<Order>, DashboardError>;

    /// Orders for one warehouse, newest first.
    async fn orders_by_warehouse(&self, warehouse_id: Uuid) -> Result<Vec<Order>, DashboardError>;
}
