use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use crate::actors::DashboardService;
use crate::app_system::DashboardConfig;
use crate::clients::DashboardClient;
use crate::i18n::{Catalog, Translator};

/// Starts the dashboard service and manages its lifetime.
///
/// A new system is a fresh screen mount: all state comes from the config.
pub struct DashboardSystem {
    pub client: DashboardClient,
    handle: tokio::task::JoinHandle<()>,
}

impl DashboardSystem {
    /// Starts a dashboard with the built-in English catalog.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_translator(config, Arc::new(Catalog::english()))
    }

    #[instrument(name = "dashboard_system", skip(config, translator))]
    pub fn with_translator(config: DashboardConfig, translator: Arc<dyn Translator>) -> Self {
        info!("Starting dashboard system");

        let (service, client) = DashboardService::new(config, translator);
        let handle = tokio::spawn(service.run());

        info!("Dashboard system started successfully");
        Self { client, handle }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down dashboard system");

        if let Err(e) = self.client.shutdown().await {
            warn!(error = %e, "Shutdown request not delivered, service already stopped");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Dashboard service failed: {:?}", e));
        }

        info!("Dashboard system shutdown complete");
        Ok(())
    }
}
