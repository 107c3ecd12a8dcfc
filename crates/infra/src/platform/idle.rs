//! System idle-time probe.
//!
//! On macOS this reads the seconds since the last input event from the
//! combined session event source. Other platforms report zero, i.e. the
//! user is never considered idle there.

use timeslice_core::IdleProbe;

/// Idle probe backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIdleProbe;

impl SystemIdleProbe {
    pub fn new() -> Self {
        Self
    }
}

impl IdleProbe for SystemIdleProbe {
    #[cfg(target_os = "macos")]
    fn idle_seconds(&self) -> f64 {
        use core_graphics::event::CGEventType;
        use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

        // No "any input" event type is exposed, so take the most recent of
        // the input events that should reset idleness.
        let input_events = [
            CGEventType::MouseMoved,
            CGEventType::LeftMouseDown,
            CGEventType::RightMouseDown,
            CGEventType::KeyDown,
            CGEventType::ScrollWheel,
            CGEventType::FlagsChanged,
        ];

        input_events
            .into_iter()
            .map(|event_type| {
                CGEventSource::seconds_since_last_event_type(
                    CGEventSourceStateID::CombinedSessionState,
                    event_type,
                )
            })
            .fold(f64::INFINITY, f64::min)
    }

    #[cfg(not(target_os = "macos"))]
    fn idle_seconds(&self) -> f64 {
        0.0
    }
}
