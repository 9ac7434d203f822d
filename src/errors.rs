use rust_decimal::Decimal;

use crate::entities::order::OrderStatus;

/// Error taxonomy for the dashboard core.
///
/// Fetch failures and boundary shape mismatches surface as `Provider` and
/// `Decode`; degenerate ratio inputs (zero credit limit, flat value series)
/// never reach this enum because the aggregation and chart layers define
/// zero-safe fallbacks instead.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("provider error: {0}")]
    Provider(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid status transition from '{from}' to '{to}'")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("insufficient credit: order total {required} exceeds available {available}")]
    InsufficientCredit {
        required: Decimal,
        available: Decimal,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DashboardError::Decode(err.to_string())
        } else {
            DashboardError::Provider(err.to_string())
        }
    }
}

impl From<url::ParseError> for DashboardError {
    fn from(err: url::ParseError) -> Self {
        DashboardError::Config(format!("invalid provider url: {err}"))
    }
}

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for DashboardError {
    fn from(err: validator::ValidationErrors) -> Self {
        DashboardError::Config(err.to_string())
    }
}
