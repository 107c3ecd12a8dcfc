//! Local-day and export-range instant computations.
//!
//! The timezone is always passed in explicitly so callers can use the
//! system zone while tests pin a fixed offset.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone};
use timeslice_domain::ExportRange;

/// End-of-day wall-clock time used for inclusive range ends.
const DAY_END: (u32, u32, u32) = (23, 59, 59);

/// Inclusive local-day bounds for `date`: midnight through 23:59:59.
///
/// The host range queries are half-open, so the end instant itself is
/// never matched; no interval slot starts at 23:59:59.
pub fn day_bounds<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> (i64, i64) {
    (instant_at(date, (0, 0, 0), tz), instant_at(date, DAY_END, tz))
}

/// Round `timestamp` down to the containing interval's start.
pub fn align_timestamp(timestamp: i64, interval_minutes: i64) -> i64 {
    let interval_seconds = interval_minutes * 60;
    (timestamp / interval_seconds) * interval_seconds
}

/// Inclusive start/end instants for a named export range, evaluated at
/// `now` in its own timezone. The end is always 23:59:59 of `now`'s day.
pub fn export_bounds<Tz: TimeZone>(range: ExportRange, now: &DateTime<Tz>) -> (i64, i64) {
    let tz = now.timezone();
    let today = now.date_naive();
    let end = instant_at(today, DAY_END, &tz);

    let start = match range {
        ExportRange::ThisWeek => {
            let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
            instant_at(monday, (0, 0, 0), &tz)
        }
        ExportRange::Last7Days => instant_at(today - Days::new(6), (0, 0, 0), &tz),
        ExportRange::Last30Days => instant_at(today - Days::new(29), (0, 0, 0), &tz),
        ExportRange::AllTime => 0,
    };

    (start, end)
}

/// Epoch seconds of a wall-clock time on `date` in `tz`.
///
/// On a DST gap the earliest valid interpretation is used; on a fold, the
/// first occurrence.
fn instant_at<Tz: TimeZone>(date: NaiveDate, (h, m, s): (u32, u32, u32), tz: &Tz) -> i64 {
    let time = NaiveTime::from_hms_opt(h, m, s).unwrap_or(NaiveTime::MIN);
    let naive = date.and_time(time);
    tz.from_local_datetime(&naive)
        .earliest()
        .map_or_else(|| naive.and_utc().timestamp(), |dt| dt.timestamp())
}
