use thiserror::Error;
use crate::domain::OrderId;

/// Errors that can occur when mutating the order store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Order id mismatch: expected {expected}, found {found}")]
    IdMismatch { expected: OrderId, found: OrderId },
}
