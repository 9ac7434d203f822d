use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,

    #[serde(default)]
    pub category_id: Option<Uuid>,

    /// Category join, embedded by the provider when requested. A product
    /// without one lands in the "Unknown" bucket of category groupings.
    #[serde(default)]
    pub category: Option<ProductCategory>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub price: Decimal,

    /// Minimum order quantity.
    pub moq: i64,

    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Category name for grouping, with the documented fallback bucket.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Unknown")
    }
}
