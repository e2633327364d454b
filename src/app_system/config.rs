use std::time::Duration;
use crate::domain::{FarmerProfile, OrganizationDirectory};
use crate::notification::DEFAULT_NOTIFICATION_WINDOW;
use crate::order_store::SeedOrders;

/// Everything the dashboard starts from.
///
/// `Default` reproduces the stock farmer screen: four organizations, two
/// pending and two completed orders, and a three second notification window.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub mailbox_capacity: usize,
    pub notification_window: Duration,
    pub organizations: OrganizationDirectory,
    pub seed: SeedOrders,
    pub profile: FarmerProfile,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
            notification_window: DEFAULT_NOTIFICATION_WINDOW,
            organizations: OrganizationDirectory::default(),
            seed: SeedOrders::default(),
            profile: FarmerProfile::default(),
        }
    }
}

#[allow(dead_code)]
impl DashboardConfig {
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }

    pub fn with_notification_window(mut self, window: Duration) -> Self {
        self.notification_window = window;
        self
    }

    pub fn with_organizations(mut self, organizations: OrganizationDirectory) -> Self {
        self.organizations = organizations;
        self
    }

    pub fn with_seed(mut self, seed: SeedOrders) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_profile(mut self, profile: FarmerProfile) -> Self {
        self.profile = profile;
        self
    }
}
