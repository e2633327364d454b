//! # Mock Framework
//!
//! Utilities for testing client logic in isolation.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! mailbox, then pop requests with the `expect_*` helpers and answer them by
//! hand. No `DashboardService` runs, so success, failure and ordering are
//! fully under the test's control.

use tokio::sync::mpsc;
use crate::clients::DashboardClient;
use crate::domain::{DraftField, OrderId, PendingOrder, PendingOrderField, SubmissionResult};
use crate::error::DashboardError;
use crate::messages::{DashboardRequest, ServiceResponse};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(buffer_size: usize) -> (DashboardClient, mpsc::Receiver<DashboardRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DashboardClient::new(sender), receiver)
}

/// Helper to verify that the next message is a SetDraftField request
pub async fn expect_set_draft_field(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<(DraftField, ServiceResponse<(), DashboardError>)> {
    match receiver.recv().await {
        Some(DashboardRequest::SetDraftField { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SubmitListing request
pub async fn expect_submit_listing(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<ServiceResponse<SubmissionResult, DashboardError>> {
    match receiver.recv().await {
        Some(DashboardRequest::SubmitListing { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an OpenEditSession request
pub async fn expect_open_edit_session(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<(OrderId, ServiceResponse<PendingOrder, DashboardError>)> {
    match receiver.recv().await {
        Some(DashboardRequest::OpenEditSession { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an EditOrderField request
pub async fn expect_edit_order_field(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<(PendingOrderField, ServiceResponse<PendingOrder, DashboardError>)> {
    match receiver.recv().await {
        Some(DashboardRequest::EditOrderField { update, respond_to }) => Some((update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a CommitEdit request
pub async fn expect_commit_edit(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<ServiceResponse<PendingOrder, DashboardError>> {
    match receiver.recv().await {
        Some(DashboardRequest::CommitEdit { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a DiscardEdit request
pub async fn expect_discard_edit(
    receiver: &mut mpsc::Receiver<DashboardRequest>,
) -> Option<ServiceResponse<(), DashboardError>> {
    match receiver.recv().await {
        Some(DashboardRequest::DiscardEdit { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActivityKind, ProduceListing};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let post_task = tokio::spawn(async move {
            client.post_listing(vec![DraftField::CropType("Yams".to_string())]).await
        });

        let (update, responder) = expect_set_draft_field(&mut receiver).await.expect("Expected SetDraftField request");
        assert_eq!(update, DraftField::CropType("Yams".to_string()));
        responder.send(Ok(())).unwrap();

        let responder = expect_submit_listing(&mut receiver).await.expect("Expected SubmitListing request");
        let submitted = SubmissionResult {
            kind: ActivityKind::Sale,
            message: "farmers.success".to_string(),
            listing: ProduceListing {
                crop_type: "Yams".to_string(),
                notes: String::new(),
                activity_kind: ActivityKind::Sale,
                price_offer: Some(String::new()),
                organization: None,
            },
        };
        responder.send(Ok(submitted.clone())).unwrap();

        let result = post_task.await.unwrap();
        assert_eq!(result, Ok(submitted));
    }

    #[tokio::test]
    async fn test_closed_mailbox_reports_communication_error() {
        let (client, receiver) = create_mock_client(1);
        drop(receiver);

        let err = client.list_pending().await.unwrap_err();
        assert_eq!(err, DashboardError::ActorCommunicationError("Actor closed".to_string()));
    }
}
