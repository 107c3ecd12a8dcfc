//! Port interfaces for idle detection and prompt notification
//!
//! The OS-level mechanisms behind these are out of scope; implementations
//! may be no-ops on platforms without support.

/// Trait for measuring user inactivity
pub trait IdleProbe: Send + Sync {
    /// Seconds since the last user input event
    fn idle_seconds(&self) -> f64;

    /// Whether the user has been inactive past the threshold
    fn is_idle(&self, threshold_minutes: u32) -> bool {
        self.idle_seconds() >= f64::from(threshold_minutes) * 60.0
    }
}

/// Trait for surfacing a prompt notification to the user
pub trait Notifier: Send + Sync {
    /// Show a notification; `sound` is a lowercased system sound name
    fn notify(&self, title: &str, body: &str, sound: &str);
}
