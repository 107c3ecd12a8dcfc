//! Integration tests for the CSV export commands.

mod support;

use chrono::Local;
use support::setup_test_context;
use timeslice_core::{align_timestamp, export_bounds};
use timeslice_domain::{Category, ExportRange};
use timeslice_lib as commands;

#[tokio::test(flavor = "multi_thread")]
async fn exports_header_and_rows_for_explicit_bounds() {
    let (ctx, _temp_dir) = setup_test_context().await;
    let slot = 1_709_547_300; // 2024-03-04 10:15:00 UTC

    commands::create_time_entry(
        &ctx,
        slot,
        Category::Break,
        None,
        None,
        None,
        Some("lunch, outside".into()),
    )
    .await
    .expect("create_time_entry failed");

    let csv = commands::export_entries_to_csv(&ctx, slot, slot + 900)
        .await
        .expect("export_entries_to_csv failed");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "Date,Time,Category,Duration (minutes),Is Away,Is Retroactive,Notes"
    );
    assert_eq!(lines[1], "2024-03-04,10:15,break,15,false,false,\"lunch, outside\"");
}

#[tokio::test(flavor = "multi_thread")]
async fn named_range_export_includes_todays_entries() {
    let (ctx, _temp_dir) = setup_test_context().await;

    // A slot inside today's range regardless of timezone.
    let slot = align_timestamp(Local::now().timestamp(), 15);
    commands::create_time_entry(
        &ctx,
        slot,
        Category::Personal,
        None,
        None,
        None,
        Some("reading".into()),
    )
    .await
    .expect("create_time_entry failed");

    let csv = commands::export_entries_for_range(&ctx, ExportRange::Last7Days)
        .await
        .expect("export_entries_for_range failed");
    assert!(csv.lines().count() >= 2, "today's entry must be covered");
    assert!(csv.contains("personal"));

    // The named bounds themselves match the derived-view computation.
    let (start, end) = export_bounds(ExportRange::Last7Days, &Local::now());
    assert!(start <= slot && slot < end);
}
