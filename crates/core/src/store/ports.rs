//! Port interfaces for the persistence host
//!
//! These traits carry the host's request/response operations, one method
//! per operation. All calls are fire-and-report: no retry and no timeout
//! policy at this layer; failures propagate to the caller as `Err` and are
//! logged where they are issued.

use async_trait::async_trait;
use timeslice_domain::{MissedPrompt, NewTimeEntry, Result, Setting, TimeEntry};

/// Trait for persisting logged time entries
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Persist a new entry, returning its assigned id
    async fn create(&self, entry: NewTimeEntry) -> Result<i64>;

    /// Get entries with `start_ts <= timestamp < end_ts`, ascending.
    /// Callers always pass day-aligned bounds.
    async fn find_in_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<TimeEntry>>;

    /// Update category and/or notes of an existing entry
    async fn update(
        &self,
        id: i64,
        category: Option<timeslice_domain::Category>,
        notes: Option<String>,
    ) -> Result<()>;

    /// Delete an entry by id
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Trait for persisting missed prompt records
#[async_trait]
pub trait MissedPromptRepository: Send + Sync {
    /// Record a missed prompt for an interval start, returning its id.
    /// At most one record exists per timestamp.
    async fn create(&self, timestamp: i64, reason: Option<String>) -> Result<i64>;

    /// Get missed prompts with `start_ts <= timestamp < end_ts`, ascending
    async fn find_in_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<MissedPrompt>>;

    /// Remove the missed prompt for an interval start (no-op if absent)
    async fn delete_by_timestamp(&self, timestamp: i64) -> Result<()>;
}

/// Trait for the string key/value settings store
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn get_all(&self) -> Result<Vec<Setting>>;
}

/// Trait for producing the CSV export artifact over a timestamp range
#[async_trait]
pub trait CsvExporter: Send + Sync {
    /// Render entries with `start_ts <= timestamp < end_ts` as CSV text.
    /// The column schema is owned by the implementation.
    async fn export_csv(&self, start_ts: i64, end_ts: i64) -> Result<String>;
}
