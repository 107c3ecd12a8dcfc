//! Settings commands.

use std::time::Instant;

use timeslice_core::store::ports::SettingsRepository;
use timeslice_domain::{settings, Result, Setting};
use tracing::{debug, error};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Read one setting value, `None` when unset.
pub async fn get_setting(context: &AppContext, key: String) -> Result<Option<String>> {
    let start_time = Instant::now();
    debug!(key, "get_setting called");

    let result = context.settings.get(&key).await;

    log_command_execution("settings::get_setting", start_time.elapsed(), result.is_ok());
    if let Err(ref err) = result {
        error!(error = %err, key, "get_setting failed");
    }
    result
}

/// Write one setting value.
///
/// A changed `interval_minutes` also re-arms the running prompt
/// scheduler so the new cadence applies without a restart.
pub async fn set_setting(context: &AppContext, key: String, value: String) -> Result<()> {
    let start_time = Instant::now();
    debug!(key, value, "set_setting called");

    let result = context.settings.set(&key, &value).await;

    if result.is_ok() && key == settings::INTERVAL_MINUTES {
        if let Ok(minutes) = value.parse::<u64>() {
            context.update_interval(minutes);
        }
    }

    log_command_execution("settings::set_setting", start_time.elapsed(), result.is_ok());
    if let Err(ref err) = result {
        error!(error = %err, key, "set_setting failed");
    }
    result
}

/// Read all settings.
pub async fn get_all_settings(context: &AppContext) -> Result<Vec<Setting>> {
    let start_time = Instant::now();
    debug!("get_all_settings called");

    let result = context.settings.get_all().await;

    log_command_execution(
        "settings::get_all_settings",
        start_time.elapsed(),
        result.is_ok(),
    );
    if let Err(ref err) = result {
        error!(error = %err, "get_all_settings failed");
    }
    result
}
