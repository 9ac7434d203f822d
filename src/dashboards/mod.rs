//! Per-view controllers. Each one owns an injected provider handle, issues
//! its fan-out reads on load (all-or-nothing: any failed collection fails
//! the whole view), and recomputes derived metrics synchronously from the
//! held snapshot on every state change. Nothing is cached between loads.

pub mod company;
pub mod retailer;
pub mod warehouse;

pub use company::CompanyDashboard;
pub use retailer::{RetailerDashboard, RetailerTab};
pub use warehouse::{StockFilter, WarehouseDashboard, WarehouseTab};
