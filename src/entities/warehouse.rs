use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A regional warehouse serving assigned retailers within its coverage
/// radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Warehouse {
    pub id: Uuid,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Human-readable location label, used as the grouping key for
    /// stock-by-warehouse charts.
    pub location: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// Storage capacity in units.
    pub capacity: i64,

    /// Maximum delivery distance this warehouse is assumed to service.
    pub coverage_radius_km: f64,

    pub created_at: DateTime<Utc>,
}
