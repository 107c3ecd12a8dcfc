//! Time entry repository implementation using SQLite.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Row};
use timeslice_core::store::ports::TimeEntryRepository;
use timeslice_domain::{Category, NewTimeEntry, Result, TimeEntry, TimesliceError};
use tokio::task;

use super::manager::{map_sql_error, DbConnection, DbManager};

/// SQLite-backed implementation of `TimeEntryRepository`.
pub struct SqliteTimeEntryRepository {
    db: Arc<DbManager>,
}

impl SqliteTimeEntryRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TimeEntryRepository for SqliteTimeEntryRepository {
    async fn create(&self, entry: NewTimeEntry) -> Result<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<i64> {
            let conn = db.get_connection()?;
            insert_entry(&conn, &entry).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_in_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<TimeEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Vec<TimeEntry>> {
            let conn = db.get_connection()?;
            query_entries_in_range(&conn, start_ts, end_ts).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(
        &self,
        id: i64,
        category: Option<Category>,
        notes: Option<String>,
    ) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            if let Some(category) = category {
                update_category(&conn, id, category).map_err(map_sql_error)?;
            }
            if let Some(notes) = notes {
                update_notes(&conn, id, &notes).map_err(map_sql_error)?;
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            conn.execute("DELETE FROM time_entries WHERE id = ?1", params![id])
                .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Map a row to a TimeEntry. Unknown category text fails the row rather
/// than rendering blank.
fn map_entry_row(row: &Row<'_>) -> rusqlite::Result<TimeEntry> {
    let category_text: String = row.get(2)?;
    let category = Category::parse(&category_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            Box::new(TimesliceError::Database(format!(
                "unknown category: {category_text}"
            ))),
        )
    })?;

    Ok(TimeEntry {
        id: row.get(0)?,
        timestamp: row.get(1)?,
        category,
        duration_minutes: row.get(3)?,
        is_away: row.get(4)?,
        is_retroactive: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}

fn insert_entry(conn: &DbConnection, entry: &NewTimeEntry) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO time_entries (timestamp, category, duration_minutes, is_away, is_retroactive, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.timestamp,
            entry.category.as_str(),
            entry.duration_minutes.unwrap_or(15),
            entry.is_away,
            entry.is_retroactive,
            entry.notes,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn query_entries_in_range(
    conn: &DbConnection,
    start_ts: i64,
    end_ts: i64,
) -> rusqlite::Result<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, timestamp, category, duration_minutes, is_away, is_retroactive, notes, created_at
         FROM time_entries
         WHERE timestamp >= ?1 AND timestamp < ?2
         ORDER BY timestamp ASC",
    )?;

    let entries = stmt
        .query_map(params![start_ts, end_ts], map_entry_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(entries)
}

fn update_category(conn: &DbConnection, id: i64, category: Category) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE time_entries SET category = ?1 WHERE id = ?2",
        params![category.as_str(), id],
    )?;
    Ok(())
}

fn update_notes(conn: &DbConnection, id: i64, notes: &str) -> rusqlite::Result<()> {
    conn.execute(
        "UPDATE time_entries SET notes = ?1 WHERE id = ?2",
        params![notes, id],
    )?;
    Ok(())
}

fn map_join_error(err: task::JoinError) -> TimesliceError {
    TimesliceError::Internal(format!("task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================
