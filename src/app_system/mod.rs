//! Runtime orchestration and lifecycle management.
//!
//! - [`DashboardSystem`] builds the dashboard service and hands out its client
//! - [`DashboardConfig`] carries everything the screen is seeded with
//! - [`setup_tracing`] initializes logging

pub mod config;
pub mod dashboard_system;
pub mod tracing;

pub use config::*;
pub use dashboard_system::*;
pub use self::tracing::*;
