//! Pending and completed purchase orders.
//!
//! The store owns both collections outright. Nothing outside holds a live
//! reference into them; edits arrive as whole records through
//! [`OrderStore::apply_edit`].

pub mod entity;
pub mod error;

pub use error::*;

use tracing::{debug, info, instrument, warn};
use crate::collection::Collection;
use crate::domain::{CompletedOrder, OrderId, PendingOrder};

/// Orders the store starts from, and returns to on remount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOrders {
    pub pending: Vec<PendingOrder>,
    pub completed: Vec<CompletedOrder>,
}

impl Default for SeedOrders {
    fn default() -> Self {
        Self {
            pending: vec![
                PendingOrder::new(1, "Tomatoes", "$5", "NGO B", "Handle with care"),
                PendingOrder::new(2, "Potatoes", "$3", "FoodBank A", "Urgent"),
            ],
            completed: vec![
                CompletedOrder::new(1, "Carrots", "John Doe", "$4", "100kg"),
                CompletedOrder::new(2, "Cabbages", "Jane Smith", "$6", "50kg"),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderStore {
    pending: Collection<PendingOrder>,
    completed: Collection<CompletedOrder>,
}

impl OrderStore {
    pub fn new(seed: SeedOrders) -> Self {
        Self {
            pending: Collection::from_seed(seed.pending),
            completed: Collection::from_seed(seed.completed),
        }
    }

    pub fn list_pending(&self) -> &[PendingOrder] {
        self.pending.list()
    }

    pub fn list_completed(&self) -> &[CompletedOrder] {
        self.completed.list()
    }

    pub fn pending(&self, id: OrderId) -> Option<&PendingOrder> {
        self.pending.get(id)
    }

    /// Replaces the pending order `id` with `updated`.
    ///
    /// On error the pending collection is left as it was.
    #[instrument(fields(order_id = id), skip(self, updated))]
    pub fn apply_edit(&mut self, id: OrderId, updated: PendingOrder) -> Result<PendingOrder, OrderError> {
        debug!("Applying edit to pending order");

        if updated.id() != id {
            warn!(found = updated.id(), "Edited order carries a different id");
            return Err(OrderError::IdMismatch { expected: id, found: updated.id() });
        }

        match self.pending.replace(updated.clone()) {
            Ok(_previous) => {
                info!(produce_type = %updated.produce_type, price = %updated.price, "Pending order updated");
                Ok(updated)
            }
            Err(_) => {
                warn!("Pending order not found for edit");
                Err(OrderError::NotFound(id))
            }
        }
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new(SeedOrders::default())
    }
}
