//! Transient "posted" banner.
//!
//! Each [`NotificationTimer::show`] bumps a generation counter and hands back
//! a [`HideTicket`]. Whoever schedules the hide redeems the ticket with
//! [`NotificationTimer::expire`] once the window has passed; a ticket from an
//! older `show` no longer matches and is ignored.

use std::time::Duration;
use tracing::debug;

pub const DEFAULT_NOTIFICATION_WINDOW: Duration = Duration::from_millis(3000);

/// What the banner currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notification {
    pub visible: bool,
    pub message: Option<String>,
}

/// Deferred hide owed to one `show` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    pub generation: u64,
    pub after: Duration,
}

#[derive(Debug, Clone)]
pub struct NotificationTimer {
    window: Duration,
    generation: u64,
    current: Notification,
}

impl NotificationTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            current: Notification::default(),
        }
    }

    pub fn current(&self) -> &Notification {
        &self.current
    }

    pub fn show(&mut self, message: impl Into<String>) -> HideTicket {
        self.generation += 1;
        self.current = Notification {
            visible: true,
            message: Some(message.into()),
        };
        debug!(generation = self.generation, "Notification shown");
        HideTicket {
            generation: self.generation,
            after: self.window,
        }
    }

    /// Hides the banner if `generation` is still the latest. Returns whether
    /// it did.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "Ignoring stale hide");
            return false;
        }
        self.current.visible = false;
        debug!(generation, "Notification hidden");
        true
    }

    /// Hides immediately and invalidates every outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.current = Notification::default();
    }
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_WINDOW)
    }
}
