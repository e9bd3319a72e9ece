//! Day cell content assembly.
//!
//! The layout output model: what each day cell shows once multi-day bars
//! have been placed and regular events capped. Drawing is the caller's
//! concern; this module only selects, orders and truncates.

use chrono::NaiveTime;

use crate::event::{Event, EventKey};
use crate::grid::{Cell, WEEK_LEN};
use crate::layout::span;
use crate::month::Month;

/// Regular events shown per day cell before the overflow indicator.
pub const MAX_EVENTS_PER_DAY: usize = 4;

/// Identity of one bar segment. The same event renders one segment per
/// week row it crosses, never two in the same row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentKey {
    pub event: EventKey,
    pub week_row: usize,
}

/// One multi-day bar segment, anchored at the cell where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub key: SegmentKey,
    pub title: String,
    pub color: Option<String>,
    /// Vertical lane within the multi-day area.
    pub track: usize,
    /// Days covered within this week row.
    pub span_days: usize,
}

/// One regular (timed, or single-day all-day) entry in a day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    pub title: String,
    /// Start time for timed events.
    pub start_time: Option<NaiveTime>,
    pub all_day: bool,
    pub color: Option<String>,
}

/// Computed content of one day cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayout {
    pub cell: Cell,
    /// Vertical lanes to reserve above the regular entries.
    pub reserved_tracks: usize,
    /// Bar segments starting at this cell.
    pub bars: Vec<BarSegment>,
    /// Regular entries, truncated to `MAX_EVENTS_PER_DAY`.
    pub entries: Vec<CellEntry>,
    /// Count behind the "+N more" indicator; 0 means none.
    pub overflow: usize,
}

/// A fully computed month layout.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub month: Month,
    pub cells: Vec<CellLayout>,
}

impl MonthLayout {
    /// Week rows, each exactly seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[CellLayout]> {
        self.cells.chunks(WEEK_LEN)
    }
}

/// Split a day's classified events into multi-day bar candidates and
/// regular entries, preserving order within each group.
pub fn split<'a>(day_events: &[&'a Event]) -> (Vec<&'a Event>, Vec<&'a Event>) {
    let mut multi_day = Vec::new();
    let mut regular = Vec::new();
    for event in day_events {
        if span::is_multi_day(event) {
            multi_day.push(*event);
        } else {
            regular.push(*event);
        }
    }
    (multi_day, regular)
}

/// Apply the per-cell cap: at most `MAX_EVENTS_PER_DAY` entries plus a
/// single overflow count covering everything hidden.
pub fn truncate(mut entries: Vec<CellEntry>) -> (Vec<CellEntry>, usize) {
    let overflow = entries.len().saturating_sub(MAX_EVENTS_PER_DAY);
    entries.truncate(MAX_EVENTS_PER_DAY);
    (entries, overflow)
}
