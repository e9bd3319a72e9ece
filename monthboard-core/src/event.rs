//! Provider-neutral event types.
//!
//! Providers convert their API responses into these types, and the layout
//! engine works exclusively with them. Timed boundaries are civil local
//! datetimes: the provider adapter converts out of UTC before events reach
//! this crate, so nothing here ever shifts with timezone or DST.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Placeholder title for events without one.
pub const UNTITLED: &str = "(No title)";

/// A calendar event (provider-neutral).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Provider-assigned id, unique per source calendar only.
    pub id: String,
    /// Display text; may be empty (rendered as a placeholder).
    pub title: String,
    pub description: Option<String>,
    /// Id of the owning calendar.
    pub calendar_id: String,
    pub start: EventTime,
    /// For all-day events the end date is EXCLUSIVE: a one-day event ends
    /// on the day after it starts.
    pub end: EventTime,
    /// Explicit display color; falls back to the calendar's color.
    pub color: Option<String>,
}

/// Start or end boundary of an event.
///
/// All-day events carry civil dates, timed events carry civil local
/// datetimes. Mixed variants within one event are rejected at the wire
/// boundary, so layout code can rely on matched pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl EventTime {
    /// The civil date this boundary falls on.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(date) => *date,
            EventTime::DateTime(dt) => dt.date(),
        }
    }

    /// The boundary as a datetime, with all-day dates at midnight.
    pub fn datetime(&self) -> NaiveDateTime {
        match self {
            EventTime::Date(date) => date.and_time(NaiveTime::MIN),
            EventTime::DateTime(dt) => *dt,
        }
    }

    /// Time of day for timed boundaries.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            EventTime::Date(_) => None,
            EventTime::DateTime(dt) => Some(dt.time()),
        }
    }
}

/// Layout identity for an event.
///
/// Provider ids are only unique per source calendar (recurring instances
/// share one), so layout keys on the id plus the start date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub id: String,
    pub start: NaiveDate,
}

impl Event {
    pub fn all_day(&self) -> bool {
        matches!(self.start, EventTime::Date(_))
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { UNTITLED } else { &self.title }
    }

    pub fn key(&self) -> EventKey {
        EventKey {
            id: self.id.clone(),
            start: self.start.date(),
        }
    }

    /// Date bounds for all-day events (end exclusive).
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (EventTime::Date(start), EventTime::Date(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Human-readable time range for listings.
    ///
    /// "All day" for one-day all-day events, "Mar 16 - Mar 18" for
    /// multi-day ones (exclusive end pulled back a day, years shown only
    /// away from `today`'s year), "3:00 PM - 4:00 PM" for timed events.
    pub fn time_label(&self, today: NaiveDate) -> String {
        match (self.start, self.end) {
            (EventTime::Date(start), EventTime::Date(end)) => {
                if (end - start).num_days() > 1 {
                    let last = end.pred_opt().unwrap_or(end);
                    format!(
                        "{} - {}",
                        format_short_date(start, today),
                        format_short_date(last, today)
                    )
                } else {
                    "All day".to_string()
                }
            }
            _ => format!(
                "{} - {}",
                format_clock(self.start.datetime()),
                format_clock(self.end.datetime())
            ),
        }
    }
}

/// "Mar 16", or "Mar 16, 2023" when the year differs from today's.
fn format_short_date(date: NaiveDate, today: NaiveDate) -> String {
    if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// 12-hour clock, e.g. "3:00 PM".
fn format_clock(dt: NaiveDateTime) -> String {
    dt.format("%-I:%M %p").to_string()
}
