//! Missed prompt repository implementation using SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Row};
use timeslice_core::store::ports::MissedPromptRepository;
use timeslice_domain::{MissedPrompt, Result, TimesliceError};
use tokio::task;

use super::manager::{map_sql_error, DbConnection, DbManager};

/// SQLite-backed implementation of `MissedPromptRepository`.
pub struct SqliteMissedPromptRepository {
    db: Arc<DbManager>,
}

impl SqliteMissedPromptRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MissedPromptRepository for SqliteMissedPromptRepository {
    async fn create(&self, timestamp: i64, reason: Option<String>) -> Result<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<i64> {
            let conn = db.get_connection()?;
            // timestamp is UNIQUE: a slot is missed at most once
            conn.execute(
                "INSERT OR IGNORE INTO missed_prompts (timestamp, reason) VALUES (?1, ?2)",
                params![timestamp, reason],
            )
            .map_err(map_sql_error)?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_in_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<MissedPrompt>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Vec<MissedPrompt>> {
            let conn = db.get_connection()?;
            query_missed_in_range(&conn, start_ts, end_ts).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_by_timestamp(&self, timestamp: i64) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "DELETE FROM missed_prompts WHERE timestamp = ?1",
                params![timestamp],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

fn map_missed_row(row: &Row<'_>) -> rusqlite::Result<MissedPrompt> {
    Ok(MissedPrompt {
        id: row.get(0)?,
        timestamp: row.get(1)?,
        reason: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn query_missed_in_range(
    conn: &DbConnection,
    start_ts: i64,
    end_ts: i64,
) -> rusqlite::Result<Vec<MissedPrompt>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp, reason, created_at
         FROM missed_prompts
         WHERE timestamp >= ?1 AND timestamp < ?2
         ORDER BY timestamp ASC",
    )?;

    let prompts = stmt
        .query_map(params![start_ts, end_ts], map_missed_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(prompts)
}

fn map_join_error(err: task::JoinError) -> TimesliceError {
    TimesliceError::Internal(format!("task join error: {err}"))
}
