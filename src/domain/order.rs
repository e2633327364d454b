/// Identifier of an order, unique within its own collection only.
pub type OrderId = u64;

/// Lifecycle stage of a purchase order.
///
/// An order never moves from `Completed` back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
}

/// A purchase order awaiting fulfillment. Editable by the farmer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    id: OrderId,
    pub produce_type: String,
    pub price: String,
    pub organization: String,
    pub notes: String,
}

impl PendingOrder {
    pub fn new(
        id: OrderId,
        produce_type: impl Into<String>,
        price: impl Into<String>,
        organization: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            produce_type: produce_type.into(),
            price: price.into(),
            organization: organization.into(),
            notes: notes.into(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        OrderStatus::Pending
    }
}

/// A single-field change to a pending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOrderField {
    ProduceType(String),
    Price(String),
    Organization(String),
    Notes(String),
}

/// A finalized purchase order. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedOrder {
    id: OrderId,
    pub produce_type: String,
    pub buyer: String,
    pub price: String,
    pub quantity: String,
}

impl CompletedOrder {
    pub fn new(
        id: OrderId,
        produce_type: impl Into<String>,
        buyer: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            id,
            produce_type: produce_type.into(),
            buyer: buyer.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        OrderStatus::Completed
    }
}
