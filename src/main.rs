use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use tracing::info;

use distboard::dashboards::{CompanyDashboard, RetailerDashboard, WarehouseDashboard};
use distboard::provider::RestProvider;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum View {
    Company,
    Retailer,
    Warehouse,
}

/// Distribution network dashboard over a hosted read-only data backend.
#[derive(Debug, Parser)]
#[command(name = "distboard", version, about)]
struct Cli {
    /// Which dashboard view to render
    #[arg(long, value_enum, default_value_t = View::Company)]
    view: View,

    /// Explicit configuration file; defaults to the layered config/ directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => distboard::config::load_config_from(path),
        None => distboard::config::load_config(),
    }
    .context("loading configuration")?;

    distboard::telemetry::init(&cfg.log_level, cfg.log_json);

    let provider = Arc::new(RestProvider::new(&cfg)?);

    match cli.view {
        View::Company => {
            let mut dashboard = CompanyDashboard::new(provider);
            dashboard.load().await?;

            println!("{}", serde_json::to_string_pretty(&dashboard.summary())?);
            println!(
                "{}",
                serde_json::to_string_pretty(&dashboard.production_plan(5))?
            );
        }
        View::Retailer => {
            let Some(retailer_id) = cfg.retailer_id else {
                bail!("the retailer view requires retailer_id in the configuration");
            };
            let mut dashboard = RetailerDashboard::new(provider, retailer_id);
            dashboard.load().await?;

            println!("{}", serde_json::to_string_pretty(&dashboard.overview()?)?);
            println!("{}", serde_json::to_string_pretty(&dashboard.credit()?)?);
        }
        View::Warehouse => {
            let Some(warehouse_id) = cfg.warehouse_id else {
                bail!("the warehouse view requires warehouse_id in the configuration");
            };
            let mut dashboard = WarehouseDashboard::new(provider, warehouse_id);
            dashboard.load().await?;

            println!("{}", serde_json::to_string_pretty(&dashboard.overview()?)?);
            println!(
                "{}",
                serde_json::to_string_pretty(&dashboard.active_deliveries()?)?
            );
        }
    }

    info!("done");
    Ok(())
}
