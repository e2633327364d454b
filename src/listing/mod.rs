//! The produce listing form.

use tracing::{debug, info, instrument};
use crate::domain::{ActivityKind, DraftField, ProduceListing, ProduceListingDraft, SubmissionResult};
use crate::i18n::Translator;

/// Holds the draft for the lifetime of the screen.
///
/// Submitting does not clear the draft; the fields stay as the farmer left
/// them.
#[derive(Debug, Clone, Default)]
pub struct ListingDraftBuilder {
    draft: ProduceListingDraft,
}

impl ListingDraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ProduceListingDraft {
        &self.draft
    }

    pub fn set_field(&mut self, update: DraftField) {
        debug!(update = ?update, "Updating listing draft");
        match update {
            DraftField::CropType(value) => self.draft.crop_type = value,
            DraftField::Notes(value) => self.draft.notes = value,
            DraftField::ActivityKind(kind) => self.draft.activity_kind = kind,
            DraftField::PriceOffer(value) => self.draft.price_offer = value,
            DraftField::Organization(value) => self.draft.organization = value,
        }
    }

    /// Posts the draft. Never fails; incomplete drafts are accepted.
    #[instrument(fields(kind = ?self.draft.activity_kind), skip(self, translator))]
    pub fn submit(&self, translator: &dyn Translator) -> SubmissionResult {
        let draft = &self.draft;
        let kind = draft.activity_kind;
        let listing = ProduceListing {
            crop_type: draft.crop_type.clone(),
            notes: draft.notes.clone(),
            activity_kind: kind,
            price_offer: match kind {
                ActivityKind::Sale => Some(draft.price_offer.clone()),
                ActivityKind::Donation => None,
            },
            organization: draft.organization.clone(),
        };

        info!(crop_type = %listing.crop_type, "Produce listing posted");

        SubmissionResult {
            kind,
            message: translator.translate(kind.success_message_key()),
            listing,
        }
    }

    pub fn reset(&mut self) {
        self.draft = ProduceListingDraft::default();
    }
}
