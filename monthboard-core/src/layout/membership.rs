//! Day membership classification.

use chrono::{NaiveDate, NaiveTime};

use crate::event::{Event, EventTime};

/// Whether `event` occurs on `date`.
///
/// All-day events compare civil dates directly (exclusive end). Timed
/// events overlap-test their interval against the day's window,
/// `[00:00:00.000, 23:59:59.999]`.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    match (event.start, event.end) {
        (EventTime::Date(start), EventTime::Date(end)) => start <= date && date < end,
        _ => {
            let day_start = date.and_time(NaiveTime::MIN);
            // Unwrap safe: constant in-range time
            let day_end = date.and_hms_milli_opt(23, 59, 59, 999).unwrap();
            event.start.datetime() < day_end && event.end.datetime() > day_start
        }
    }
}

/// Events occurring on `date`, in display order: all-day events first,
/// then timed events ascending by start. The sort is stable, so events
/// with equal starts keep their input order.
pub fn events_for_day<'a>(events: &'a [Event], date: NaiveDate) -> Vec<&'a Event> {
    let mut day: Vec<&Event> = events.iter().filter(|e| occurs_on(e, date)).collect();
    day.sort_by_key(|e| (!e.all_day(), e.start.datetime()));
    day
}
