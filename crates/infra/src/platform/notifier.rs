//! Notification delivery.
//!
//! Actual OS notification and sound playback belong to the desktop shell,
//! which is out of scope here; this implementation records what would be
//! shown so the rest of the pipeline is observable end to end.

use timeslice_core::Notifier;
use tracing::info;

/// `Notifier` that writes notifications to the diagnostic log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, title: &str, body: &str, sound: &str) {
        info!(title, body, sound, "notification");
    }
}
