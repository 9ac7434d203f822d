// Aggregation and domain services. All pure except for tracing output.

pub mod analytics;
pub mod cart;
pub mod geo;
pub mod order_status;
