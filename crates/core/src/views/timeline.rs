//! Timeline slot grid for one calendar day.
//!
//! The grid is fixed at 96 fifteen-minute slots per day regardless of the
//! configured prompt interval. A slot is populated only by an entry whose
//! timestamp equals the slot start exactly; entries off the 15-minute
//! boundary do not render here. That alignment contract is deliberate
//! (see DESIGN.md).

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;
use timeslice_domain::constants::{SLOTS_PER_DAY, SLOTS_PER_HOUR, SLOT_SECONDS};
use timeslice_domain::TimeEntry;

use crate::time::day_bounds;

/// One cell of the timeline grid.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Slot start, epoch seconds.
    pub timestamp: i64,
    pub entry: Option<TimeEntry>,
}

/// Partition `date` into its 96 slots and attach matching entries.
pub fn timeline_slots<Tz: TimeZone>(
    date: NaiveDate,
    tz: &Tz,
    entries: &[TimeEntry],
) -> Vec<TimeSlot> {
    let (day_start, _) = day_bounds(date, tz);

    (0..SLOTS_PER_DAY)
        .map(|i| {
            let timestamp = day_start + i as i64 * SLOT_SECONDS;
            let entry = entries.iter().find(|e| e.timestamp == timestamp).cloned();
            TimeSlot { timestamp, entry }
        })
        .collect()
}

/// Group a day's slots into 24 hour rows of four for rendering.
pub fn hour_rows(slots: &[TimeSlot]) -> Vec<(u32, &[TimeSlot])> {
    slots
        .chunks(SLOTS_PER_HOUR)
        .enumerate()
        .map(|(hour, chunk)| (hour as u32, chunk))
        .collect()
}
