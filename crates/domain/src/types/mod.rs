//! Domain types and models

mod category;
mod export;

pub use category::Category;
pub use export::ExportRange;

use serde::{Deserialize, Serialize};

/// One logged interval of time.
///
/// `timestamp` is the interval's start in epoch seconds and doubles as the
/// slot key: the editor flow updates-by-id rather than inserting a second
/// entry for the same slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeEntry {
    /// Absent until persisted.
    pub id: Option<i64>,
    pub timestamp: i64,
    pub category: Category,
    pub duration_minutes: i32,
    /// Auto-generated from idle detection rather than user choice.
    pub is_away: bool,
    /// Filled in after the fact (backfill or manual edit of a past slot).
    pub is_retroactive: bool,
    pub notes: Option<String>,
    /// Set by the persistence layer.
    pub created_at: Option<i64>,
}

/// Creation payload for a time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTimeEntry {
    pub timestamp: i64,
    pub category: Category,
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub is_away: bool,
    #[serde(default)]
    pub is_retroactive: bool,
    pub notes: Option<String>,
}

impl NewTimeEntry {
    /// Interval entry with just a slot and category; flags off, no notes.
    pub fn new(timestamp: i64, category: Category) -> Self {
        Self {
            timestamp,
            category,
            duration_minutes: None,
            is_away: false,
            is_retroactive: false,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn retroactive(mut self) -> Self {
        self.is_retroactive = true;
        self
    }

    /// Auto-away entry covering one interval.
    pub fn away(timestamp: i64, duration_minutes: i32) -> Self {
        Self {
            timestamp,
            category: Category::Away,
            duration_minutes: Some(duration_minutes),
            is_away: true,
            is_retroactive: false,
            notes: None,
        }
    }
}

/// A scheduled prompt that fired but was not answered before its interval
/// elapsed. Removed when the user backfills the slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MissedPrompt {
    pub id: Option<i64>,
    pub timestamp: i64,
    pub reason: Option<String>,
    pub created_at: Option<i64>,
}

/// Key/value settings pair. Values are stored as strings; consumers parse
/// and validate on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}
