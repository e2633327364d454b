use crate::collection::Entity;
use crate::domain::{CompletedOrder, OrderId, PendingOrder, PendingOrderField};

impl Entity for PendingOrder {
    type Id = OrderId;
    type Patch = PendingOrderField;

    fn id(&self) -> OrderId {
        PendingOrder::id(self)
    }

    /// Updates exactly one field of the order.
    ///
    /// The id is not addressable, so it never changes.
    fn on_update(&mut self, patch: PendingOrderField) {
        match patch {
            PendingOrderField::ProduceType(value) => self.produce_type = value,
            PendingOrderField::Price(value) => self.price = value,
            PendingOrderField::Organization(value) => self.organization = value,
            PendingOrderField::Notes(value) => self.notes = value,
        }
    }
}

impl Entity for CompletedOrder {
    type Id = OrderId;
    type Patch = (); // Completed orders are read-only

    fn id(&self) -> OrderId {
        CompletedOrder::id(self)
    }

    fn on_update(&mut self, _patch: ()) {}
}
