use thiserror::Error;
use crate::edit_session::SessionError;
use crate::order_store::OrderError;

/// Errors surfaced to callers of the dashboard.
///
/// All of these are contract violations by calling code; the farmer never
/// sees a validation error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
