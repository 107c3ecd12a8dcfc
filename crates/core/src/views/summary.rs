//! Per-category duration aggregation for the day summary chart.

use serde::Serialize;
use timeslice_domain::constants::DEFAULT_DURATION_MINUTES;
use timeslice_domain::{Category, TimeEntry};

/// One chart segment: a category with a nonzero minute total.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategorySegment {
    pub category: Category,
    pub label: &'static str,
    pub color: &'static str,
    pub minutes: i64,
}

/// Sum minutes per category over a day's entries in a single pass.
///
/// Entries stored without a duration count as 15 minutes. Segments come
/// out in the fixed category-table order and categories with no time are
/// omitted entirely.
pub fn category_summary(entries: &[TimeEntry]) -> Vec<CategorySegment> {
    let mut minutes_by_category = [0_i64; Category::ALL.len()];

    for entry in entries {
        let minutes = if entry.duration_minutes > 0 {
            i64::from(entry.duration_minutes)
        } else {
            i64::from(DEFAULT_DURATION_MINUTES)
        };
        if let Some(index) = Category::ALL.iter().position(|c| *c == entry.category) {
            minutes_by_category[index] += minutes;
        }
    }

    Category::ALL
        .iter()
        .zip(minutes_by_category)
        .filter(|(_, minutes)| *minutes > 0)
        .map(|(category, minutes)| CategorySegment {
            category: *category,
            label: category.label(),
            color: category.color(),
            minutes,
        })
        .collect()
}

/// Total tracked minutes across the emitted segments.
pub fn total_minutes(segments: &[CategorySegment]) -> i64 {
    segments.iter().map(|s| s.minutes).sum()
}

/// Render a minute count the way the summary legend does: `2h 15m`,
/// `2h`, or `45m`.
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 && mins > 0 {
        format!("{hours}h {mins}m")
    } else if hours > 0 {
        format!("{hours}h")
    } else {
        format!("{mins}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(timestamp: i64, category: Category, duration_minutes: i32) -> TimeEntry {
        TimeEntry {
            id: None,
            timestamp,
            category,
            duration_minutes,
            is_away: false,
            is_retroactive: false,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn sums_per_category_and_omits_empty_ones() {
        let t = 1_700_000_100; // any aligned instant
        let entries = vec![
            entry(t, Category::DeepWork, 15),
            entry(t + 900, Category::DeepWork, 15),
            entry(t + 1800, Category::Meetings, 15),
        ];

        let segments = category_summary(&entries);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].category, Category::DeepWork);
        assert_eq!(segments[0].minutes, 30);
        assert_eq!(segments[1].category, Category::Meetings);
        assert_eq!(segments[1].minutes, 15);
        assert_eq!(total_minutes(&segments), 45);
    }

    #[test]
    fn zero_duration_defaults_to_fifteen_minutes() {
        let segments = category_summary(&[entry(0, Category::Email, 0)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].minutes, 15);
    }

    #[test]
    fn segments_follow_table_order_not_insertion_order() {
        let entries = vec![
            entry(0, Category::Away, 15),
            entry(900, Category::Break, 30),
            entry(1800, Category::DeepWork, 45),
        ];

        let segments = category_summary(&entries);
        let order: Vec<Category> = segments.iter().map(|s| s.category).collect();
        assert_eq!(order, vec![Category::DeepWork, Category::Break, Category::Away]);
    }

    #[test]
    fn total_matches_entry_durations_with_defaults() {
        let entries = vec![
            entry(0, Category::Admin, 0),
            entry(900, Category::Personal, 20),
            entry(1800, Category::Admin, 15),
        ];
        let segments = category_summary(&entries);
        assert_eq!(total_minutes(&segments), 15 + 20 + 15);
    }

    #[test]
    fn formats_minutes_like_the_legend() {
        assert_eq!(format_minutes(135), "2h 15m");
        assert_eq!(format_minutes(120), "2h");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(0), "0m");
    }
}
