//! Integration tests for the time entry and missed prompt commands.

mod support;

use support::setup_test_context;
use timeslice_domain::Category;
use timeslice_lib as commands;

const SLOT: i64 = 1_709_547_300; // 2024-03-04 10:15:00 UTC

#[tokio::test(flavor = "multi_thread")]
async fn create_and_read_back_an_entry() {
    let (ctx, _temp_dir) = setup_test_context().await;

    let id = commands::create_time_entry(
        &ctx,
        SLOT,
        Category::DeepWork,
        None,
        None,
        None,
        Some("spec review".into()),
    )
    .await
    .expect("create_time_entry failed");
    assert!(id > 0);

    let entries = commands::get_entries_for_date(&ctx, SLOT, SLOT + 900)
        .await
        .expect("get_entries_for_date failed");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, Some(id));
    assert_eq!(entries[0].category, Category::DeepWork);
    assert_eq!(entries[0].duration_minutes, 15);
    assert_eq!(entries[0].notes.as_deref(), Some("spec review"));
    assert!(!entries[0].is_away);
    assert!(!entries[0].is_retroactive);
}

#[tokio::test(flavor = "multi_thread")]
async fn range_end_is_exclusive() {
    let (ctx, _temp_dir) = setup_test_context().await;

    for offset in [0, 900, 1800] {
        commands::create_time_entry(
            &ctx,
            SLOT + offset,
            Category::Email,
            None,
            None,
            None,
            None,
        )
        .await
        .expect("create_time_entry failed");
    }

    let entries = commands::get_entries_for_date(&ctx, SLOT, SLOT + 1800)
        .await
        .expect("get_entries_for_date failed");
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.timestamp < SLOT + 1800));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_an_entry() {
    let (ctx, _temp_dir) = setup_test_context().await;

    let id = commands::create_time_entry(
        &ctx,
        SLOT,
        Category::Meetings,
        None,
        None,
        None,
        Some("planning".into()),
    )
    .await
    .expect("create_time_entry failed");

    commands::update_time_entry(&ctx, id, Some(Category::Admin), Some("minutes".into()))
        .await
        .expect("update_time_entry failed");

    let entries = commands::get_entries_for_date(&ctx, SLOT, SLOT + 900)
        .await
        .expect("get_entries_for_date failed");
    assert_eq!(entries[0].category, Category::Admin);
    assert_eq!(entries[0].notes.as_deref(), Some("minutes"));

    commands::delete_time_entry(&ctx, id)
        .await
        .expect("delete_time_entry failed");
    let entries = commands::get_entries_for_date(&ctx, SLOT, SLOT + 900)
        .await
        .expect("get_entries_for_date failed");
    assert!(entries.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn missed_prompt_lifecycle() {
    let (ctx, _temp_dir) = setup_test_context().await;

    commands::create_missed_prompt(&ctx, SLOT, Some("prompt not answered".into()))
        .await
        .expect("create_missed_prompt failed");

    let missed = commands::get_missed_prompts(&ctx, SLOT, SLOT + 900)
        .await
        .expect("get_missed_prompts failed");
    assert_eq!(missed.len(), 1);
    assert_eq!(missed[0].timestamp, SLOT);

    commands::delete_missed_prompt(&ctx, SLOT)
        .await
        .expect("delete_missed_prompt failed");
    let missed = commands::get_missed_prompts(&ctx, SLOT, SLOT + 900)
        .await
        .expect("get_missed_prompts failed");
    assert!(missed.is_empty());
}
