//! CSV export commands.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use timeslice_core::store::ports::CsvExporter;
use timeslice_core::export_bounds;
use timeslice_domain::{ExportRange, Result};
use tracing::{debug, error};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Render entries within `[start_timestamp, end_timestamp)` as CSV text.
/// Writing the artifact to a user-chosen path is the caller's job.
pub async fn export_entries_to_csv(
    context: &AppContext,
    start_timestamp: i64,
    end_timestamp: i64,
) -> Result<String> {
    let start_time = Instant::now();
    debug!(start_timestamp, end_timestamp, "export_entries_to_csv called");

    let result = context
        .exporter
        .export_csv(start_timestamp, end_timestamp)
        .await;

    log_command_execution(
        "export::export_entries_to_csv",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, "export_entries_to_csv failed");
    }
    result
}

/// Render a named range (evaluated against the local clock) as CSV text.
pub async fn export_entries_for_range(
    context: &AppContext,
    range: ExportRange,
) -> Result<String> {
    let (start, end) = export_bounds(range, &Local::now());
    export_entries_to_csv(context, start, end).await
}

/// Default file name for an export: `timeslice-<range>-<date>.csv`.
pub fn export_file_name(range: ExportRange, date: NaiveDate) -> String {
    let slug = range.label().to_lowercase().replace(' ', "-");
    format!("timeslice-{slug}-{}.csv", date.format("%Y-%m-%d"))
}
