//! Time entry and missed prompt commands.

use std::time::Instant;

use timeslice_core::store::ports::{MissedPromptRepository, TimeEntryRepository};
use timeslice_domain::{Category, MissedPrompt, NewTimeEntry, Result, TimeEntry};
use tracing::{debug, error};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Create a time entry for an interval start.
///
/// Optional fields fall back to the storage defaults: 15 minutes, not
/// away, not retroactive.
pub async fn create_time_entry(
    context: &AppContext,
    timestamp: i64,
    category: Category,
    duration_minutes: Option<i32>,
    is_away: Option<bool>,
    is_retroactive: Option<bool>,
    notes: Option<String>,
) -> Result<i64> {
    let start_time = Instant::now();
    debug!(timestamp, %category, "create_time_entry called");

    let entry = NewTimeEntry {
        timestamp,
        category,
        duration_minutes,
        is_away: is_away.unwrap_or(false),
        is_retroactive: is_retroactive.unwrap_or(false),
        notes,
    };
    let result = context.time_entries.create(entry).await;

    log_command_execution(
        "time_entry::create_time_entry",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, timestamp, "create_time_entry failed");
    }
    result
}

/// Get entries within `[start_timestamp, end_timestamp)`.
pub async fn get_entries_for_date(
    context: &AppContext,
    start_timestamp: i64,
    end_timestamp: i64,
) -> Result<Vec<TimeEntry>> {
    let start_time = Instant::now();
    debug!(start_timestamp, end_timestamp, "get_entries_for_date called");

    let result = context
        .time_entries
        .find_in_range(start_timestamp, end_timestamp)
        .await;

    log_command_execution(
        "time_entry::get_entries_for_date",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, "get_entries_for_date failed");
    }
    result
}

/// Update category and/or notes of an entry.
pub async fn update_time_entry(
    context: &AppContext,
    id: i64,
    category: Option<Category>,
    notes: Option<String>,
) -> Result<()> {
    let start_time = Instant::now();
    debug!(id, "update_time_entry called");

    let result = context.time_entries.update(id, category, notes).await;

    log_command_execution(
        "time_entry::update_time_entry",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, id, "update_time_entry failed");
    }
    result
}

/// Delete an entry by id.
pub async fn delete_time_entry(context: &AppContext, id: i64) -> Result<()> {
    let start_time = Instant::now();
    debug!(id, "delete_time_entry called");

    let result = context.time_entries.delete(id).await;

    log_command_execution(
        "time_entry::delete_time_entry",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, id, "delete_time_entry failed");
    }
    result
}

/// Record a missed prompt for an interval start.
pub async fn create_missed_prompt(
    context: &AppContext,
    timestamp: i64,
    reason: Option<String>,
) -> Result<i64> {
    let start_time = Instant::now();
    debug!(timestamp, "create_missed_prompt called");

    let result = context.missed_prompts.create(timestamp, reason).await;

    log_command_execution(
        "time_entry::create_missed_prompt",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, timestamp, "create_missed_prompt failed");
    }
    result
}

/// Get missed prompts within `[start_timestamp, end_timestamp)`.
pub async fn get_missed_prompts(
    context: &AppContext,
    start_timestamp: i64,
    end_timestamp: i64,
) -> Result<Vec<MissedPrompt>> {
    let start_time = Instant::now();
    debug!(start_timestamp, end_timestamp, "get_missed_prompts called");

    let result = context
        .missed_prompts
        .find_in_range(start_timestamp, end_timestamp)
        .await;

    log_command_execution(
        "time_entry::get_missed_prompts",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, "get_missed_prompts failed");
    }
    result
}

/// Remove the missed prompt for an interval start.
pub async fn delete_missed_prompt(context: &AppContext, timestamp: i64) -> Result<()> {
    let start_time = Instant::now();
    debug!(timestamp, "delete_missed_prompt called");

    let result = context.missed_prompts.delete_by_timestamp(timestamp).await;

    log_command_execution(
        "time_entry::delete_missed_prompt",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, timestamp, "delete_missed_prompt failed");
    }
    result
}
