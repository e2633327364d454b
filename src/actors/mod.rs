use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, Instrument};
use crate::app_system::DashboardConfig;
use crate::clients::DashboardClient;
use crate::domain::{
    FarmerProfile, OrderId, OrganizationDirectory, PendingOrder, PendingOrderField, SubmissionResult,
};
use crate::edit_session::OrderEditSession;
use crate::error::DashboardError;
use crate::i18n::Translator;
use crate::listing::ListingDraftBuilder;
use crate::messages::{DashboardRequest, ServiceResponse};
use crate::notification::{HideTicket, NotificationTimer};
use crate::order_store::{OrderError, OrderStore, SeedOrders};

// =============================================================================
// DASHBOARD SERVICE
// =============================================================================

/// The screen's event loop.
///
/// Owns every component of the dashboard and handles one request at a time,
/// so no component is ever observed mid-update. The hide timer reports back
/// through the same mailbox.
pub struct DashboardService {
    receiver: mpsc::Receiver<DashboardRequest>,
    timer_sender: mpsc::WeakSender<DashboardRequest>,
    translator: Arc<dyn Translator>,
    organizations: OrganizationDirectory,
    profile: FarmerProfile,
    seed: SeedOrders,
    draft: ListingDraftBuilder,
    orders: OrderStore,
    edit_session: OrderEditSession,
    notifications: NotificationTimer,
}

impl DashboardService {
    pub fn new(config: DashboardConfig, translator: Arc<dyn Translator>) -> (Self, DashboardClient) {
        let (sender, receiver) = mpsc::channel(config.mailbox_capacity);
        let service = Self {
            receiver,
            timer_sender: sender.downgrade(),
            translator,
            organizations: config.organizations,
            profile: config.profile,
            orders: OrderStore::new(config.seed.clone()),
            seed: config.seed,
            draft: ListingDraftBuilder::new(),
            edit_session: OrderEditSession::new(),
            notifications: NotificationTimer::new(config.notification_window),
        };
        let client = DashboardClient::new(sender);
        (service, client)
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    #[instrument(name = "dashboard_service", skip(self))]
    pub async fn run(mut self) {
        info!("DashboardService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DashboardRequest::SetDraftField { update, respond_to } => {
                    self.draft.set_field(update);
                    let _ = respond_to.send(Ok(()));
                }
                DashboardRequest::GetDraft { respond_to } => {
                    let _ = respond_to.send(Ok(self.draft.draft().clone()));
                }
                DashboardRequest::SubmitListing { respond_to } => {
                    self.handle_submit_listing(respond_to);
                }
                DashboardRequest::ListPending { respond_to } => {
                    let _ = respond_to.send(Ok(self.orders.list_pending().to_vec()));
                }
                DashboardRequest::ListCompleted { respond_to } => {
                    let _ = respond_to.send(Ok(self.orders.list_completed().to_vec()));
                }
                DashboardRequest::OpenEditSession { id, respond_to } => {
                    self.handle_open_edit_session(id, respond_to);
                }
                DashboardRequest::EditOrderField { update, respond_to } => {
                    self.handle_edit_order_field(update, respond_to);
                }
                DashboardRequest::CommitEdit { respond_to } => {
                    self.handle_commit_edit(respond_to);
                }
                DashboardRequest::DiscardEdit { respond_to } => {
                    let result = self.edit_session.discard().map_err(DashboardError::from);
                    let _ = respond_to.send(result);
                }
                DashboardRequest::GetEditTarget { respond_to } => {
                    let _ = respond_to.send(Ok(self.edit_session.target().cloned()));
                }
                DashboardRequest::GetNotification { respond_to } => {
                    let _ = respond_to.send(Ok(self.notifications.current().clone()));
                }
                DashboardRequest::ExpireNotification { generation } => {
                    self.notifications.expire(generation);
                }
                DashboardRequest::ListOrganizations { respond_to } => {
                    let _ = respond_to.send(Ok(self.organizations.options().to_vec()));
                }
                DashboardRequest::GetProfile { respond_to } => {
                    let _ = respond_to.send(Ok(self.profile.clone()));
                }
                DashboardRequest::Remount { respond_to } => {
                    self.handle_remount(respond_to);
                }
                DashboardRequest::Shutdown => {
                    info!("DashboardService shutting down");
                    break;
                }
            }
        }

        info!("DashboardService stopped");
    }

    #[instrument(fields(kind = ?self.draft.draft().activity_kind), skip(self, respond_to))]
    fn handle_submit_listing(&mut self, respond_to: ServiceResponse<SubmissionResult, DashboardError>) {
        debug!("Processing submit_listing request");

        let result = self.draft.submit(self.translator.as_ref());
        let ticket = self.notifications.show(result.message.clone());
        self.schedule_hide(ticket);

        let _ = respond_to.send(Ok(result));
    }

    /// Spawns the one-shot hide for `ticket`. The task holds only a weak
    /// sender, so a pending hide never keeps the service alive.
    fn schedule_hide(&self, ticket: HideTicket) {
        let sender = self.timer_sender.clone();
        let span = tracing::debug_span!("notification_timer", generation = ticket.generation);
        tokio::spawn(
            async move {
                tokio::time::sleep(ticket.after).await;
                match sender.upgrade() {
                    Some(sender) => {
                        let expire = DashboardRequest::ExpireNotification { generation: ticket.generation };
                        if sender.send(expire).await.is_err() {
                            debug!("Service stopped before notification expired");
                        }
                    }
                    None => debug!("Service gone before notification expired"),
                }
            }
            .instrument(span),
        );
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_open_edit_session(&mut self, id: OrderId, respond_to: ServiceResponse<PendingOrder, DashboardError>) {
        debug!("Processing open_edit_session request");

        let result = match self.orders.pending(id).cloned() {
            Some(order) => {
                self.edit_session.open(order.clone());
                Ok(order)
            }
            None => {
                error!("Pending order not found");
                Err(OrderError::NotFound(id).into())
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_edit_order_field(
        &mut self,
        update: PendingOrderField,
        respond_to: ServiceResponse<PendingOrder, DashboardError>,
    ) {
        let result = self
            .edit_session
            .edit_field(update)
            .map(PendingOrder::clone)
            .map_err(|e| {
                error!(error = %e, "Edit rejected");
                DashboardError::from(e)
            });

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_commit_edit(&mut self, respond_to: ServiceResponse<PendingOrder, DashboardError>) {
        debug!("Processing commit_edit request");

        let result = self.edit_session.commit(&mut self.orders);
        if let Err(e) = &result {
            error!(error = %e, "Commit failed");
        }

        let _ = respond_to.send(result);
    }

    /// Puts the screen back to its initial state.
    #[instrument(skip(self, respond_to))]
    fn handle_remount(&mut self, respond_to: ServiceResponse<(), DashboardError>) {
        self.draft.reset();
        self.orders = OrderStore::new(self.seed.clone());
        self.edit_session = OrderEditSession::new();
        self.notifications.reset();
        info!("Dashboard remounted from seed");

        let _ = respond_to.send(Ok(()));
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;
    use super::*;
    use crate::domain::{ActivityKind, DraftField, OrganizationId, ProduceListingDraft};
    use crate::edit_session::{SessionError, SessionState};
    use crate::i18n::Catalog;
    use crate::notification::Notification;

    fn start(config: DashboardConfig) -> DashboardClient {
        let (service, client) = DashboardService::new(config, Arc::new(Catalog::english()));
        tokio::spawn(service.run());
        client
    }

    /// Lets woken timer tasks post into the mailbox before the next request.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_hides_after_window() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        let result = client.submit_listing().await?;
        assert_eq!(result.kind, ActivityKind::Sale);
        assert_eq!(
            client.get_notification().await?,
            Notification { visible: true, message: Some("Your produce has been posted for sale!".into()) }
        );

        tokio::time::sleep(Duration::from_millis(2999)).await;
        settle().await;
        assert!(client.get_notification().await?.visible);

        tokio::time::sleep(Duration::from_millis(1)).await;
        settle().await;
        assert!(!client.get_notification().await?.visible);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_timer_does_not_hide_newer_notification() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        client.submit_listing().await?;
        tokio::time::sleep(Duration::from_millis(1000)).await;

        client.set_draft_field(DraftField::ActivityKind(ActivityKind::Donation)).await?;
        client.submit_listing().await?;

        // First submission's deadline passes.
        tokio::time::sleep(Duration::from_millis(2000)).await;
        settle().await;
        assert_eq!(
            client.get_notification().await?,
            Notification { visible: true, message: Some("Thank you! Your donation has been posted.".into()) }
        );

        // Second submission's deadline passes.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        settle().await;
        assert!(!client.get_notification().await?.visible);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_donation_submit_ignores_price() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        client.set_draft_field(DraftField::PriceOffer("40".into())).await?;
        client.set_draft_field(DraftField::ActivityKind(ActivityKind::Donation)).await?;
        client.set_draft_field(DraftField::Organization(Some(OrganizationId::new("foodbank_c")))).await?;
        let result = client.submit_listing().await?;

        assert_eq!(result.kind, ActivityKind::Donation);
        assert_eq!(result.listing.price_offer, None);

        // Draft survives the submit.
        let draft = client.get_draft().await?;
        assert_eq!(draft.price_offer, "40");
        assert_eq!(draft.organization, Some(OrganizationId::new("foodbank_c")));

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_edit_session_through_mailbox() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        let opened = client.open_edit_session(2).await?;
        assert_eq!(opened.produce_type, "Potatoes");

        let working = client.edit_order_field(PendingOrderField::Notes("Deliver Friday".into())).await?;
        assert_eq!(working.notes, "Deliver Friday");
        assert_eq!(client.list_pending().await?[1].notes, "Urgent");

        client.discard_edit().await?;
        assert_eq!(client.get_edit_target().await?, None);
        assert_eq!(client.list_pending().await?[1].notes, "Urgent");

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_open_unknown_order_fails() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        let err = client.open_edit_session(99).await.unwrap_err();
        assert_eq!(err, DashboardError::Order(OrderError::NotFound(99)));
        assert_eq!(client.get_edit_target().await?, None);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_commit_without_session_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        let err = client.commit_edit().await.unwrap_err();
        assert_eq!(
            err,
            DashboardError::Session(SessionError::InvalidSessionState { operation: "commit", state: SessionState::Closed })
        );

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_restores_seed() -> Result<(), Box<dyn std::error::Error>> {
        let client = start(DashboardConfig::default());

        client.set_draft_field(DraftField::CropType("Kale".into())).await?;
        client.submit_listing().await?;
        client.open_edit_session(1).await?;
        client.edit_order_field(PendingOrderField::Price("$9".into())).await?;
        client.commit_edit().await?;
        client.open_edit_session(2).await?;

        client.remount().await?;

        assert_eq!(client.list_pending().await?, SeedOrders::default().pending);
        assert_eq!(client.get_draft().await?, ProduceListingDraft::default());
        assert_eq!(client.get_edit_target().await?, None);
        assert_eq!(client.get_notification().await?, Notification::default());

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_service_stops_when_clients_dropped() {
        let (service, client) = DashboardService::new(DashboardConfig::default(), Arc::new(Catalog::default()));
        let handle = tokio::spawn(service.run());

        client.submit_listing().await.unwrap();
        drop(client);

        // The pending hide timer holds only a weak sender.
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("service should stop once clients are gone")
            .unwrap();
    }
}
