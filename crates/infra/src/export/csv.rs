//! CSV rendering of time entries over a timestamp range.
//!
//! The column schema is owned by this host implementation:
//! `Date,Time,Category,Duration (minutes),Is Away,Is Retroactive,Notes`.
//! Date and time render in UTC.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::params;
use timeslice_core::store::ports::CsvExporter;
use timeslice_domain::{Result, TimesliceError};
use tokio::task;

use crate::database::{DbConnection, DbManager};
use crate::errors::InfraError;

const CSV_HEADER: &str = "Date,Time,Category,Duration (minutes),Is Away,Is Retroactive,Notes\n";

/// SQLite-backed implementation of `CsvExporter`.
pub struct CsvExportService {
    db: Arc<DbManager>,
}

impl CsvExportService {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CsvExporter for CsvExportService {
    async fn export_csv(&self, start_ts: i64, end_ts: i64) -> Result<String> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<String> {
            let conn = db.get_connection()?;
            render_csv(&conn, start_ts, end_ts)
        })
        .await
        .map_err(|err| TimesliceError::Internal(format!("task join error: {err}")))?
    }
}

fn render_csv(conn: &DbConnection, start_ts: i64, end_ts: i64) -> Result<String> {
    let mut stmt = conn
        .prepare(
            "SELECT timestamp, category, duration_minutes, is_away, is_retroactive, notes
             FROM time_entries
             WHERE timestamp >= ?1 AND timestamp < ?2
             ORDER BY timestamp ASC",
        )
        .map_err(map_sql)?;

    let rows = stmt
        .query_map(params![start_ts, end_ts], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i32>(2)?,
                row.get::<_, bool>(3)?,
                row.get::<_, bool>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })
        .map_err(map_sql)?;

    let mut csv = String::from(CSV_HEADER);

    for row in rows {
        let (timestamp, category, duration_minutes, is_away, is_retroactive, notes) =
            row.map_err(map_sql)?;

        let datetime = DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            TimesliceError::Database(format!("invalid timestamp: {timestamp}"))
        })?;
        let date = datetime.format("%Y-%m-%d");
        let time = datetime.format("%H:%M");

        let notes_escaped = escape_csv_field(&notes.unwrap_or_default());

        csv.push_str(&format!(
            "{date},{time},{category},{duration_minutes},{is_away},{is_retroactive},{notes_escaped}\n"
        ));
    }

    Ok(csv)
}

/// Escapes a field for CSV output (handles quotes, commas and newlines).
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn map_sql(err: rusqlite::Error) -> TimesliceError {
    TimesliceError::from(InfraError::from(err))
}
