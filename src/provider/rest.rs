use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::entities::{InventoryRecord, Order, Product, ProductCategory, Retailer, Warehouse};
use crate::errors::DashboardError;

use super::DataProvider;

const INVENTORY_SELECT: &str =
    "*,product:products(*,category:product_categories(*)),warehouse:warehouses(*)";
const ORDER_SELECT: &str = "*,retailer:retailers(*,warehouse:warehouses(*)),warehouse:warehouses(*),items:order_items(*,product:products(*,category:product_categories(*)))";
const RETAILER_SELECT: &str = "*,warehouse:warehouses(*)";
const PRODUCT_SELECT: &str = "*,category:product_categories(*)";

/// Read-only client for a PostgREST-style data backend.
///
/// Every call is a single GET with `select`, `order`, and equality filters in
/// the query string; joins come back embedded and deserialize straight into
/// the entity records.
#[derive(Clone)]
pub struct RestProvider {
    client: reqwest::Client,
    base: Url,
    api_key: Option<String>,
}

impl RestProvider {
    pub fn new(cfg: &AppConfig) -> Result<Self, DashboardError> {
        let mut base = Url::parse(&cfg.provider_url)?;
        // A base without a trailing slash would swallow its last path
        // segment on join.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .map_err(|e| DashboardError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base,
            api_key: cfg.provider_api_key.clone(),
        })
    }

    #[instrument(skip(self), fields(table = %table))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, DashboardError> {
        let mut url = self.base.join(table)?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }

        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key).header("apikey", key.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Provider(format!(
                "{table} query returned {status}"
            )));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| DashboardError::Decode(format!("{table}: {e}")))?;
        debug!(rows = rows.len(), "fetched collection");
        Ok(rows)
    }

    async fn fetch_one<T: DeserializeOwned>(
        &self,
        table: &str,
        select: &str,
        id: Uuid,
    ) -> Result<Option<T>, DashboardError> {
        let rows = self
            .fetch(
                table,
                &[
                    ("select", select.to_string()),
                    ("id", format!("eq.{id}")),
                ],
            )
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl DataProvider for RestProvider {
    async fn warehouses(&self) -> Result<Vec<Warehouse>, DashboardError> {
        self.fetch(
            "warehouses",
            &[("select", "*".into()), ("order", "name.asc".into())],
        )
        .await
    }

    async fn warehouse(&self, id: Uuid) -> Result<Option<Warehouse>, DashboardError> {
        self.fetch_one("warehouses", "*", id).await
    }

    async fn products(&self) -> Result<Vec<Product>, DashboardError> {
        self.fetch(
            "products",
            &[
                ("select", PRODUCT_SELECT.into()),
                ("order", "name.asc".into()),
            ],
        )
        .await
    }

    async fn categories(&self) -> Result<Vec<ProductCategory>, DashboardError> {
        self.fetch(
            "product_categories",
            &[("select", "*".into()), ("order", "name.asc".into())],
        )
        .await
    }

    async fn inventory_all(&self) -> Result<Vec<InventoryRecord>, DashboardError> {
        self.fetch(
            "warehouse_inventory",
            &[
                ("select", INVENTORY_SELECT.into()),
                ("order", "last_updated.desc".into()),
            ],
        )
        .await
    }

    async fn inventory_by_warehouse(
        &self,
        warehouse_id: Uuid,
    ) -> Result<Vec<InventoryRecord>, DashboardError> {
        self.fetch(
            "warehouse_inventory",
            &[
                ("select", INVENTORY_SELECT.into()),
                ("warehouse_id", format!("eq.{warehouse_id}")),
                ("order", "last_updated.desc".into()),
            ],
        )
        .await
    }

    async fn inventory_low_stock(&self) -> Result<Vec<InventoryRecord>, DashboardError> {
        // The backend cannot compare two columns in a filter, so the
        // threshold check happens here on the quantity-ordered fetch.
        let rows: Vec<InventoryRecord> = self
            .fetch(
                "warehouse_inventory",
                &[
                    ("select", INVENTORY_SELECT.into()),
                    ("order", "quantity.asc".into()),
                ],
            )
            .await?;
        Ok(rows.into_iter().filter(InventoryRecord::is_low).collect())
    }

    async fn retailers(&self) -> Result<Vec<Retailer>, DashboardError> {
        self.fetch(
            "retailers",
            &[
                ("select", RETAILER_SELECT.into()),
                ("order", "shop_name.asc".into()),
            ],
        )
        .await
    }

    async fn retailer(&self, id: Uuid) -> Result<Option<Retailer>, DashboardError> {
        self.fetch_one("retailers", RETAILER_SELECT, id).await
    }

    async fn orders_all(&self) -> Result<Vec<Order>, DashboardError> {
        self.fetch(
            "orders",
            &[
                ("select", ORDER_SELECT.into()),
                ("order", "order_date.desc".into()),
            ],
        )
        .await
    }

    async fn orders_by_retailer(&self, retailer_id: Uuid) -> Result<Vec<Order>, DashboardError> {
        self.fetch(
            "orders",
            &[
                ("select", ORDER_SELECT.into()),
                ("retailer_id", format!("eq.{retailer_id}")),
                ("order", "order_date.desc".into()),
            ],
        )
        .await
    }

    async fn orders_by_warehouse(&self, warehouse_id: Uuid) -> Result<Vec<Order>, DashboardError> {
        self.fetch(
            "orders",
            &[
                ("select", ORDER_SELECT.into()),
                ("warehouse_id", format!("eq.{warehouse_id}")),
                ("order", "order_date.desc".into()),
            ],
        )
        .await
    }
}
