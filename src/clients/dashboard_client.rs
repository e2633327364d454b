use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use crate::domain::{
    CompletedOrder, DraftField, FarmerProfile, OrderId, Organization, PendingOrder, PendingOrderField,
    ProduceListingDraft, SubmissionResult,
};
use crate::error::DashboardError;
use crate::messages::DashboardRequest;
use crate::notification::Notification;

/// Client for the dashboard service. Cheap to clone; every clone talks to the
/// same screen state.
#[derive(Clone)]
pub struct DashboardClient {
    sender: mpsc::Sender<DashboardRequest>,
}

impl DashboardClient {
    pub fn new(sender: mpsc::Sender<DashboardRequest>) -> Self {
        Self { sender }
    }

    /// Manual method for the one request that has no response
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), DashboardError> {
        debug!("Sending shutdown request");
        self.sender
            .send(DashboardRequest::Shutdown)
            .await
            .map_err(|e| DashboardError::ActorCommunicationError(e.to_string()))
    }

    /// Fills in the draft and posts it.
    #[instrument(skip(self, fields))]
    pub async fn post_listing(&self, fields: Vec<DraftField>) -> Result<SubmissionResult, DashboardError> {
        for update in fields {
            self.set_draft_field(update).await?;
        }
        let result = self.submit_listing().await?;
        info!(kind = ?result.kind, "Listing posted");
        Ok(result)
    }

    /// Opens a session on `id`, applies `updates` and commits.
    ///
    /// If any update is rejected the session is discarded and the store keeps
    /// its previous copy of the order.
    #[instrument(skip(self, updates))]
    pub async fn edit_order(&self, id: OrderId, updates: Vec<PendingOrderField>) -> Result<PendingOrder, DashboardError> {
        self.open_edit_session(id).await?;

        for update in updates {
            if let Err(e) = self.edit_order_field(update).await {
                error!(error = %e, "Edit failed, discarding session");
                if let Err(discard_error) = self.discard_edit().await {
                    error!(error = %discard_error, "Discard after failed edit also failed");
                }
                return Err(e);
            }
        }

        self.commit_edit().await
    }
}

client_method!(DashboardClient => fn set_draft_field(update: DraftField) -> () as DashboardRequest::SetDraftField, Error = DashboardError);
client_method!(DashboardClient => fn get_draft() -> ProduceListingDraft as DashboardRequest::GetDraft, Error = DashboardError);
client_method!(DashboardClient => fn submit_listing() -> SubmissionResult as DashboardRequest::SubmitListing, Error = DashboardError);
client_method!(DashboardClient => fn list_pending() -> Vec<PendingOrder> as DashboardRequest::ListPending, Error = DashboardError);
client_method!(DashboardClient => fn list_completed() -> Vec<CompletedOrder> as DashboardRequest::ListCompleted, Error = DashboardError);
client_method!(DashboardClient => fn open_edit_session(id: OrderId) -> PendingOrder as DashboardRequest::OpenEditSession, Error = DashboardError);
client_method!(DashboardClient => fn edit_order_field(update: PendingOrderField) -> PendingOrder as DashboardRequest::EditOrderField, Error = DashboardError);
client_method!(DashboardClient => fn commit_edit() -> PendingOrder as DashboardRequest::CommitEdit, Error = DashboardError);
client_method!(DashboardClient => fn discard_edit() -> () as DashboardRequest::DiscardEdit, Error = DashboardError);
client_method!(DashboardClient => fn get_edit_target() -> Option<PendingOrder> as DashboardRequest::GetEditTarget, Error = DashboardError);
client_method!(DashboardClient => fn get_notification() -> Notification as DashboardRequest::GetNotification, Error = DashboardError);
client_method!(DashboardClient => fn list_organizations() -> Vec<Organization> as DashboardRequest::ListOrganizations, Error = DashboardError);
client_method!(DashboardClient => fn get_profile() -> FarmerProfile as DashboardRequest::GetProfile, Error = DashboardError);
client_method!(DashboardClient => fn remount() -> () as DashboardRequest::Remount, Error = DashboardError);
