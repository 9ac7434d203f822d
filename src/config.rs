use std::env;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::errors::DashboardError;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const CONFIG_DIR: &str = "config";

/// Application configuration.
///
/// Tenant selection is explicit: the retailer and warehouse views require
/// `retailer_id` / `warehouse_id` instead of picking the first row the
/// provider returns.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Base URL of the hosted data backend (PostgREST-style read API)
    #[validate(url)]
    pub provider_url: String,

    /// API key sent as bearer token, if the backend requires one
    #[serde(default)]
    pub provider_api_key: Option<String>,

    /// Retailer tenant for the retailer dashboard
    #[serde(default)]
    pub retailer_id: Option<Uuid>,

    /// Warehouse tenant for the warehouse dashboard
    #[serde(default)]
    pub warehouse_id: Option<Uuid>,

    /// Per-request timeout for provider reads
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Logging level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

/// Loads configuration from the layered `config/` directory plus `APP_*`
/// environment variables, then validates it.
pub fn load_config() -> Result<AppConfig, DashboardError> {
    let run_env = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let settings = Config::builder()
        .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
        .add_source(File::with_name(&format!("{CONFIG_DIR}/{run_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    let cfg: AppConfig = settings.try_deserialize()?;
    cfg.validate()?;

    info!(environment = %run_env, "configuration loaded");
    Ok(cfg)
}

/// Loads configuration from a single explicit file plus `APP_*` overrides.
pub fn load_config_from(path: &Path) -> Result<AppConfig, DashboardError> {
    let settings = Config::builder()
        .add_source(File::from(path))
        .add_source(Environment::with_prefix("APP"))
        .build()?;

    let cfg: AppConfig = settings.try_deserialize()?;
    cfg.validate()?;

    info!(path = %path.display(), "configuration loaded");
    Ok(cfg)
}
