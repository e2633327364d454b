//! Handles for talking to the dashboard service.

#[macro_use]
mod macros;
mod dashboard_client;

pub use dashboard_client::*;
