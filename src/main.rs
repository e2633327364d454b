mod domain;
mod collection;
mod i18n;
mod error;

mod listing;
mod order_store;
mod edit_session;
mod notification;

mod messages;
mod clients;
mod actors;
mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, DashboardConfig, DashboardSystem};
use crate::domain::{ActivityKind, DraftField, OrganizationDirectory, OrganizationId, PendingOrderField};
use crate::i18n::{Catalog, Translator};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting farm dashboard");

    let system = DashboardSystem::new(DashboardConfig::default());
    let client = &system.client;

    let catalog = Catalog::english();
    let profile = client.get_profile().await.map_err(|e| e.to_string())?;
    info!(
        greeting = %profile.greeting(&catalog),
        donated = %profile.stats.donated,
        meals = %profile.stats.meals,
        tax_savings = %profile.stats.tax_savings,
        "Dashboard mounted"
    );

    let organizations = client.list_organizations().await.map_err(|e| e.to_string())?;
    let directory = OrganizationDirectory::new(organizations);

    // Post a donation listing
    let span = tracing::info_span!("post_listing");
    let posted = async {
        client
            .post_listing(vec![
                DraftField::CropType("Maize".to_string()),
                DraftField::Notes("Harvested this week".to_string()),
                DraftField::PriceOffer("25".to_string()),
                DraftField::ActivityKind(ActivityKind::Donation),
                DraftField::Organization(Some(OrganizationId::new("foodbank_a"))),
            ])
            .await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let organization = posted.listing.organization.as_ref().map(|id| directory.label_for(id));
    info!(
        kind = %catalog.translate(posted.kind.label_key()),
        organization = ?organization,
        message = %posted.message,
        "Listing posted"
    );

    let draft = client.get_draft().await.map_err(|e| e.to_string())?;
    let notification = client.get_notification().await.map_err(|e| e.to_string())?;
    info!(
        price_applicable = draft.price_applicable(),
        banner_visible = notification.visible,
        banner = ?notification.message,
        "Draft kept after submit"
    );

    // Raise the price of the first pending order
    let span = tracing::info_span!("edit_pending_order");
    let edit_result = async { client.edit_order(1, vec![PendingOrderField::Price("$7".to_string())]).await }
        .instrument(span)
        .await;

    match edit_result {
        Ok(order) => info!(order_id = order.id(), price = %order.price, "Pending order updated"),
        Err(e) => error!(error = %e, "Pending order update failed"),
    }

    // Redirect the second pending order
    let edit_result = client
        .edit_order(
            2,
            vec![
                PendingOrderField::ProduceType("Sweet potatoes".to_string()),
                PendingOrderField::Organization("ngo_d".to_string()),
                PendingOrderField::Notes("Pick up before noon".to_string()),
            ],
        )
        .await;

    match edit_result {
        Ok(order) => info!(order_id = order.id(), organization = %order.organization, "Pending order updated"),
        Err(e) => error!(error = %e, "Pending order update failed"),
    }

    let pending = client.list_pending().await.map_err(|e| e.to_string())?;
    let completed = client.list_completed().await.map_err(|e| e.to_string())?;
    for order in &pending {
        info!(order_id = order.id(), status = ?order.status(), produce = %order.produce_type, price = %order.price, "Pending order");
    }
    for order in &completed {
        info!(order_id = order.id(), status = ?order.status(), produce = %order.produce_type, buyer = %order.buyer, "Completed order");
    }

    // A re-mount starts over from the seed data
    client.remount().await.map_err(|e| e.to_string())?;
    let pending = client.list_pending().await.map_err(|e| e.to_string())?;
    info!(first_price = ?pending.first().map(|o| o.price.clone()), "Dashboard remounted");

    system.shutdown().await?;

    info!("Farm dashboard finished");
    Ok(())
}
