//! Named CSV export ranges.

use serde::{Deserialize, Serialize};

/// Named date range for CSV export.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportRange {
    /// Since the most recent Monday through end of today.
    ThisWeek,
    /// Today and the six prior days.
    Last7Days,
    /// Today and the 29 prior days.
    Last30Days,
    /// Epoch zero through end of today.
    AllTime,
}

impl ExportRange {
    pub const ALL: [ExportRange; 4] = [
        ExportRange::ThisWeek,
        ExportRange::Last7Days,
        ExportRange::Last30Days,
        ExportRange::AllTime,
    ];

    /// Menu label, also used to derive export file names.
    pub fn label(&self) -> &'static str {
        match self {
            ExportRange::ThisWeek => "This Week",
            ExportRange::Last7Days => "Last 7 Days",
            ExportRange::Last30Days => "Last 30 Days",
            ExportRange::AllTime => "All Time",
        }
    }
}
