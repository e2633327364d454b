use tokio::sync::oneshot;
use crate::domain::{
    CompletedOrder, DraftField, FarmerProfile, OrderId, Organization, PendingOrder, PendingOrderField,
    ProduceListingDraft, SubmissionResult,
};
use crate::error::DashboardError;
use crate::notification::Notification;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the dashboard actor. Each variant includes parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum DashboardRequest {
    // Listing draft
    SetDraftField {
        update: DraftField,
        respond_to: ServiceResponse<(), DashboardError>,
    },
    GetDraft {
        respond_to: ServiceResponse<ProduceListingDraft, DashboardError>,
    },
    SubmitListing {
        respond_to: ServiceResponse<SubmissionResult, DashboardError>,
    },

    // Orders
    ListPending {
        respond_to: ServiceResponse<Vec<PendingOrder>, DashboardError>,
    },
    ListCompleted {
        respond_to: ServiceResponse<Vec<CompletedOrder>, DashboardError>,
    },

    // Edit session
    OpenEditSession {
        id: OrderId,
        respond_to: ServiceResponse<PendingOrder, DashboardError>,
    },
    EditOrderField {
        update: PendingOrderField,
        respond_to: ServiceResponse<PendingOrder, DashboardError>,
    },
    CommitEdit {
        respond_to: ServiceResponse<PendingOrder, DashboardError>,
    },
    DiscardEdit {
        respond_to: ServiceResponse<(), DashboardError>,
    },
    GetEditTarget {
        respond_to: ServiceResponse<Option<PendingOrder>, DashboardError>,
    },

    // Notification
    GetNotification {
        respond_to: ServiceResponse<Notification, DashboardError>,
    },
    /// Posted by the hide timer; nobody waits for a reply.
    ExpireNotification {
        generation: u64,
    },

    // Static data
    ListOrganizations {
        respond_to: ServiceResponse<Vec<Organization>, DashboardError>,
    },
    GetProfile {
        respond_to: ServiceResponse<FarmerProfile, DashboardError>,
    },

    // Lifecycle
    Remount {
        respond_to: ServiceResponse<(), DashboardError>,
    },
    Shutdown,
}
