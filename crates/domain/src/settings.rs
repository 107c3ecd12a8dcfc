//! Settings registry: recognized keys, defaults and accepted values.
//!
//! Settings are stored as opaque strings; this module is the single place
//! that knows which keys the application recognizes and which values the
//! UI offers for them. Unknown keys pass through untouched.

/// How often to prompt, in minutes.
pub const INTERVAL_MINUTES: &str = "interval_minutes";
/// Idle time before the user is marked away, in minutes.
pub const IDLE_THRESHOLD_MINUTES: &str = "idle_threshold_minutes";
/// Whether to show a system notification with each prompt.
pub const NOTIFICATION_ENABLED: &str = "notification_enabled";
/// Named notification sound.
pub const NOTIFICATION_SOUND: &str = "notification_sound";

pub const DEFAULT_INTERVAL_MINUTES: u64 = 15;
pub const DEFAULT_IDLE_THRESHOLD_MINUTES: u32 = 5;

/// Prompt intervals offered by the settings screen.
pub const INTERVAL_CHOICES: [u64; 6] = [1, 5, 10, 15, 30, 60];

/// Idle thresholds offered by the settings screen.
pub const IDLE_THRESHOLD_CHOICES: [u32; 5] = [2, 5, 10, 15, 30];

/// Named notification sounds (macOS system sound names, lowercased).
pub const NOTIFICATION_SOUNDS: [&str; 10] = [
    "default",
    "glass",
    "hero",
    "morse",
    "ping",
    "pop",
    "purr",
    "sosumi",
    "submarine",
    "tink",
];

/// Default value for a recognized key, `None` for unknown keys.
pub fn default_for(key: &str) -> Option<&'static str> {
    match key {
        INTERVAL_MINUTES => Some("15"),
        IDLE_THRESHOLD_MINUTES => Some("5"),
        NOTIFICATION_ENABLED => Some("true"),
        NOTIFICATION_SOUND => Some("default"),
        _ => None,
    }
}

/// Whether `value` is one the UI would offer for `key`.
///
/// Unknown keys always validate: the storage contract is plain string
/// key/value pairs and consumers parse on read.
pub fn validate(key: &str, value: &str) -> bool {
    match key {
        INTERVAL_MINUTES => value
            .parse::<u64>()
            .is_ok_and(|v| INTERVAL_CHOICES.contains(&v)),
        IDLE_THRESHOLD_MINUTES => value
            .parse::<u32>()
            .is_ok_and(|v| IDLE_THRESHOLD_CHOICES.contains(&v)),
        NOTIFICATION_ENABLED => value == "true" || value == "false",
        NOTIFICATION_SOUND => NOTIFICATION_SOUNDS.contains(&value),
        _ => true,
    }
}
