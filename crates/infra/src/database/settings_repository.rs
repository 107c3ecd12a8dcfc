//! Settings repository implementation using SQLite.
//!
//! Storage is plain string key/value pairs; the typed getters parse and
//! validate on read with registry defaults.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::params;
use timeslice_core::store::ports::SettingsRepository;
use timeslice_domain::{settings, Result, Setting, TimesliceError};
use tokio::task;

use super::manager::{map_sql_error, DbManager};

/// SQLite-backed implementation of `SettingsRepository`.
pub struct SqliteSettingsRepository {
    db: Arc<DbManager>,
}

impl SqliteSettingsRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// `interval_minutes`, defaulting to 15.
    pub async fn interval_minutes(&self) -> u64 {
        self.get(settings::INTERVAL_MINUTES)
            .await
            .ok()
            .flatten()
            .and_then(|v| v.parse().ok())
            .unwrap_or(settings::DEFAULT_INTERVAL_MINUTES)
    }

    /// `idle_threshold_minutes`, defaulting to 5.
    pub async fn idle_threshold_minutes(&self) -> u32 {
        self.get(settings::IDLE_THRESHOLD_MINUTES)
            .await
            .ok()
            .flatten()
            .and_then(|v| v.parse().ok())
            .unwrap_or(settings::DEFAULT_IDLE_THRESHOLD_MINUTES)
    }

    /// `notification_enabled`, defaulting to true.
    pub async fn notification_enabled(&self) -> bool {
        self.get(settings::NOTIFICATION_ENABLED)
            .await
            .ok()
            .flatten()
            .map_or(true, |v| v == "true")
    }

    /// `notification_sound`, defaulting to "default".
    pub async fn notification_sound(&self) -> String {
        self.get(settings::NOTIFICATION_SOUND)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| "default".to_string())
    }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepository {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();

        task::spawn_blocking(move || -> Result<Option<String>> {
            let conn = db.get_connection()?;
            let result = conn
                .query_row(
                    "SELECT value FROM settings WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .ok();
            Ok(result)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let db = Arc::clone(&self.db);
        let key = key.to_string();
        let value = value.to_string();

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_all(&self) -> Result<Vec<Setting>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Vec<Setting>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare("SELECT key, value FROM settings")
                .map_err(map_sql_error)?;

            let settings = stmt
                .query_map([], |row| {
                    Ok(Setting {
                        key: row.get(0)?,
                        value: row.get(1)?,
                    })
                })
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<_>>>()
                .map_err(map_sql_error)?;

            Ok(settings)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_join_error(err: task::JoinError) -> TimesliceError {
    TimesliceError::Internal(format!("task join error: {err}"))
}
