use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{InventoryRecord, Order, Product, ProductCategory, Retailer, Warehouse};
use crate::errors::DashboardError;

use super::DataProvider;

/// In-memory provider honoring the same filter and sort contract as the
/// REST client. Used by tests and the demo binary; collections are seeded up
/// front and served as clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    pub warehouses: Vec<Warehouse>,
    pub retailers: Vec<Retailer>,
    pub categories: Vec<ProductCategory>,
    pub products: Vec<Product>,
    pub inventory: Vec<InventoryRecord>,
    pub orders: Vec<Order>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn warehouses(&self) -> Result<Vec<Warehouse>, DashboardError> {
        let mut rows = self.warehouses.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn warehouse(&self, id: Uuid) -> Result<Option<Warehouse>, DashboardError> {
        Ok(self.warehouses.iter().find(|w| w.id == id).cloned())
    }

    async fn products(&self) -> Result<Vec<Product>, DashboardError> {
        let mut rows = self.products.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn categories(&self) -> Result<Vec<ProductCategory>, DashboardError> {
        let mut rows = self.categories.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn inventory_all(&self) -> Result<Vec<InventoryRecord>, DashboardError> {
        let mut rows = self.inventory.clone();
        rows.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(rows)
    }

    async fn inventory_by_warehouse(
        &self,
        warehouse_id: Uuid,
    ) -> Result<Vec<InventoryRecord>, DashboardError> {
        let mut rows: Vec<_> = self
            .inventory
            .iter()
            .filter(|r| r.warehouse_id == warehouse_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(rows)
    }

    async fn inventory_low_stock(&self) -> Result<Vec<InventoryRecord>, DashboardError> {
        let mut rows: Vec<_> = self
            .inventory
            .iter()
            .filter(|r| r.is_low())
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.quantity);
        Ok(rows)
    }

    async fn retailers(&self) -> Result<Vec<Retailer>, DashboardError> {
        let mut rows = self.retailers.clone();
        rows.sort_by(|a, b| a.shop_name.cmp(&b.shop_name));
        Ok(rows)
    }

    async fn retailer(&self, id: Uuid) -> Result<Option<Retailer>, DashboardError> {
        Ok(self.retailers.iter().find(|r| r.id == id).cloned())
    }

    async fn orders_all(&self) -> Result<Vec<Order>, DashboardError> {
        let mut rows = self.orders.clone();
        rows.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(rows)
    }

    async fn orders_by_retailer(&self, retailer_id: Uuid) -> Result<Vec<Order>, DashboardError> {
        let mut rows: Vec<_> = self
            .orders
            .iter()
            .filter(|o| o.retailer_id == retailer_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(rows)
    }

    async fn orders_by_warehouse(&self, warehouse_id: Uuid) -> Result<Vec<Order>, DashboardError> {
        let mut rows: Vec<_> = self
            .orders
            .iter()
            .filter(|o| o.warehouse_id == warehouse_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(rows)
    }
}
