//! Typed records for the rows the data backend returns.
//!
//! Entities are immutable snapshots per fetch: they are created and mutated
//! externally, deserialized at the provider boundary, and held in transient
//! view state until the next reload. Deserialization is the shape check:
//! a row that does not match its record fails the load with a decode error.

pub mod inventory;
pub mod order;
pub mod product;
pub mod retailer;
pub mod warehouse;

pub use inventory::{InventoryRecord, StockStatus};
pub use order::{Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
pub use product::{Product, ProductCategory};
pub use retailer::Retailer;
pub use warehouse::Warehouse;
