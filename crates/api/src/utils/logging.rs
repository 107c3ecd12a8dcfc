//! Structured logging for command execution.

use std::time::Duration;

use timeslice_domain::TimesliceError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"time_entry::create_time_entry"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape
/// consistent. Callers must avoid forwarding sensitive values in
/// `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `TimesliceError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TimesliceError) -> &'static str {
    match error {
        TimesliceError::Database(_) => "database",
        TimesliceError::Config(_) => "config",
        TimesliceError::NotFound(_) => "not_found",
        TimesliceError::InvalidInput(_) => "invalid_input",
        TimesliceError::Internal(_) => "internal",
    }
}
