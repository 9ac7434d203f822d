//! Explicit transition guard for the order fulfilment state machine.
//!
//! States run Pending, Processing, Picked, Packed, OutForDelivery,
//! Delivered one step at a time; Cancelled absorbs from any non-terminal
//! state. Nothing in the backend enforces this, so every status change a
//! view offers goes through `advance` first.

use tracing::warn;

use crate::entities::OrderStatus;
use crate::errors::DashboardError;

/// Validates a status change.
///
/// Accepts exactly the immediate next status in the fulfilment sequence, or
/// cancellation from a non-terminal state. Backward moves and moves out of
/// `Delivered`/`Cancelled` are rejected with an explicit error.
pub fn advance(from: OrderStatus, to: OrderStatus) -> Result<OrderStatus, DashboardError> {
    if from.is_terminal() {
        warn!(%from, %to, "rejected transition out of terminal status");
        return Err(DashboardError::InvalidTransition { from, to });
    }

    if to == OrderStatus::Cancelled || from.next() == Some(to) {
        return Ok(to);
    }

    warn!(%from, %to, "rejected non-sequential transition");
    Err(DashboardError::InvalidTransition { from, to })
}
