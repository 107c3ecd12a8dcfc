//! Cross-repository integration tests against one SQLite database.

use std::sync::Arc;

use tempfile::TempDir;
use timeslice_core::store::ports::{
    CsvExporter, MissedPromptRepository, SettingsRepository, TimeEntryRepository,
};
use timeslice_domain::{settings, Category, NewTimeEntry};
use timeslice_infra::{
    CsvExportService, DbManager, SqliteMissedPromptRepository, SqliteSettingsRepository,
    SqliteTimeEntryRepository,
};

struct TestDb {
    entries: SqliteTimeEntryRepository,
    missed: SqliteMissedPromptRepository,
    settings: SqliteSettingsRepository,
    exporter: CsvExportService,
    _temp_dir: TempDir,
}

fn setup() -> TestDb {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db_path = temp_dir.path().join("timeslice.db");
    let db = Arc::new(DbManager::new(&db_path, 4).expect("create db manager"));
    db.run_migrations().expect("run migrations");

    TestDb {
        entries: SqliteTimeEntryRepository::new(Arc::clone(&db)),
        missed: SqliteMissedPromptRepository::new(Arc::clone(&db)),
        settings: SqliteSettingsRepository::new(Arc::clone(&db)),
        exporter: CsvExportService::new(db),
        _temp_dir: temp_dir,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fresh_database_carries_the_default_settings() {
    let db = setup();

    let all = db.settings.get_all().await.expect("get all settings");
    let mut keys: Vec<&str> = all.iter().map(|s| s.key.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            settings::IDLE_THRESHOLD_MINUTES,
            settings::INTERVAL_MINUTES,
            settings::NOTIFICATION_ENABLED,
            settings::NOTIFICATION_SOUND,
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn backfill_sequence_replaces_missed_prompt_with_entry() {
    let db = setup();
    let ts = 1_709_547_300;

    db.missed
        .create(ts, Some("prompt not answered".into()))
        .await
        .expect("create missed prompt");

    // The backfill flow: retroactive entry first, then delete the record.
    db.entries
        .create(
            NewTimeEntry::new(ts, Category::DeepWork)
                .with_notes("deep focus")
                .retroactive(),
        )
        .await
        .expect("create retroactive entry");
    db.missed
        .delete_by_timestamp(ts)
        .await
        .expect("delete missed prompt");

    let entries = db
        .entries
        .find_in_range(ts, ts + 900)
        .await
        .expect("find entries");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_retroactive);

    let missed = db
        .missed
        .find_in_range(ts, ts + 900)
        .await
        .expect("find missed");
    assert!(missed.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn export_covers_entries_from_every_source() {
    let db = setup();
    let ts = 1_709_547_300; // 2024-03-04 10:15:00 UTC

    db.entries
        .create(NewTimeEntry::new(ts, Category::Meetings).with_notes("sync"))
        .await
        .expect("create entry");
    db.entries
        .create(NewTimeEntry::away(ts + 900, 15))
        .await
        .expect("create away entry");

    let csv = db
        .exporter
        .export_csv(ts, ts + 1800)
        .await
        .expect("export csv");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("meetings"));
    assert_eq!(lines[2], "2024-03-04,10:30,away,15,true,false,");
}
