//! Copy-on-open, write-on-commit editing of one pending order.
//!
//! The session holds a value copy of the order, never a reference into the
//! store. Edits stay local until [`OrderEditSession::commit`] writes the whole
//! record back.

pub mod error;

pub use error::*;

use tracing::{debug, info, instrument, warn};
use crate::collection::Entity;
use crate::domain::{PendingOrder, PendingOrderField};
use crate::error::DashboardError;
use crate::order_store::OrderStore;

#[derive(Debug, Clone, Default)]
pub struct OrderEditSession {
    target: Option<PendingOrder>,
}

impl OrderEditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.target.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    /// The working copy, when open.
    pub fn target(&self) -> Option<&PendingOrder> {
        self.target.as_ref()
    }

    /// Starts editing a copy of `order`. An already open session is replaced.
    #[instrument(fields(order_id = order.id()), skip(self, order))]
    pub fn open(&mut self, order: PendingOrder) {
        if let Some(previous) = self.target.replace(order) {
            debug!(previous_order_id = previous.id(), "Replacing open edit session");
        }
        info!("Edit session opened");
    }

    /// Changes one field of the working copy. The store is not touched.
    pub fn edit_field(&mut self, update: PendingOrderField) -> Result<&PendingOrder, SessionError> {
        let state = self.state();
        let target = self.target.as_mut().ok_or(SessionError::InvalidSessionState {
            operation: "edit",
            state,
        })?;
        debug!(order_id = target.id(), update = ?update, "Editing working copy");
        target.on_update(update);
        Ok(&*target)
    }

    /// Writes the working copy back to `store` and closes the session.
    ///
    /// The session is closed even when the store rejects the record.
    #[instrument(skip(self, store))]
    pub fn commit(&mut self, store: &mut OrderStore) -> Result<PendingOrder, DashboardError> {
        let state = self.state();
        let target = self.target.take().ok_or_else(|| {
            warn!("Commit without an open edit session");
            SessionError::InvalidSessionState {
                operation: "commit",
                state,
            }
        })?;

        let committed = store.apply_edit(target.id(), target)?;
        info!(order_id = committed.id(), "Edit session committed");
        Ok(committed)
    }

    /// Closes the session, dropping the working copy.
    pub fn discard(&mut self) -> Result<(), SessionError> {
        let state = self.state();
        match self.target.take() {
            Some(target) => {
                info!(order_id = target.id(), "Edit session discarded");
                Ok(())
            }
            None => Err(SessionError::InvalidSessionState {
                operation: "discard",
                state,
            }),
        }
    }
}
