use super::OrganizationId;

/// Whether a listing is offered for sale or donated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivityKind {
    #[default]
    Sale,
    Donation,
}

impl ActivityKind {
    /// Translation key of the notification shown after a successful post.
    pub fn success_message_key(self) -> &'static str {
        match self {
            ActivityKind::Sale => "farmers.success",
            ActivityKind::Donation => "farmers.donated-success",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ActivityKind::Sale => "farmers.activity-type-options.sale",
            ActivityKind::Donation => "farmers.activity-type-options.donation",
        }
    }
}

/// The in-progress produce listing form.
///
/// No field is required. `price_offer` only means something for sales.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProduceListingDraft {
    pub crop_type: String,
    pub notes: String,
    pub activity_kind: ActivityKind,
    pub price_offer: String,
    pub organization: Option<OrganizationId>,
}

impl ProduceListingDraft {
    /// Whether the price input applies to the current activity kind.
    pub fn price_applicable(&self) -> bool {
        self.activity_kind == ActivityKind::Sale
    }
}

/// A single-field change to the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    CropType(String),
    Notes(String),
    ActivityKind(ActivityKind),
    PriceOffer(String),
    Organization(Option<OrganizationId>),
}

/// What was posted. Donations never carry a price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProduceListing {
    pub crop_type: String,
    pub notes: String,
    pub activity_kind: ActivityKind,
    pub price_offer: Option<String>,
    pub organization: Option<OrganizationId>,
}

/// Outcome of posting a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub kind: ActivityKind,
    pub message: String,
    pub listing: ProduceListing,
}
