//! Distboard core library
//!
//! Data core for a role-switching distribution dashboard: typed records for
//! the hosted data backend's rows, a read-only data-access facade, pure
//! aggregation and chart-geometry services, and per-view controllers for the
//! company, retailer, and warehouse dashboards.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod charts;
pub mod config;
pub mod dashboards;
pub mod entities;
pub mod errors;
pub mod provider;
pub mod services;
pub mod telemetry;

pub use config::AppConfig;
pub use errors::DashboardError;
