//! Multi-day span calculation.
//!
//! Decides where a multi-day event's bar segments start and how far each
//! one stretches. A segment never crosses a week row: an event continuing
//! into the next row gets a fresh segment there.

use crate::event::Event;
use crate::grid::{Cell, WEEK_LEN};

/// Extent of one bar segment within a week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Consecutive days covered, never past the end of the row.
    pub span_days: usize,
    /// Week row this segment belongs to.
    pub week_row: usize,
}

/// Whether an event renders as a connected bar.
///
/// Only all-day events qualify, and only those covering more than one
/// visible date. With the exclusive end, a one-day event has exactly
/// `end - start == 1` and stays a regular event.
pub fn is_multi_day(event: &Event) -> bool {
    event
        .date_range()
        .is_some_and(|(start, end)| (end - start).num_days() > 1)
}

/// Decide whether `event`'s bar starts a segment at `cells[index]`, and
/// if so how many days it spans before the row or the event ends.
///
/// A segment starts at the event's own first date, at the first column of
/// a week row the event continues into, or at the very first grid cell
/// when the event began before the visible range.
pub fn compute(event: &Event, index: usize, cells: &[Cell]) -> Option<Span> {
    let (start, end) = event.date_range()?;

    let cell = &cells[index];
    if !(start <= cell.date && cell.date < end) {
        return None;
    }

    let starts_here = cell.date == start
        || (cell.col == 0 && start < cell.date)
        || (index == 0 && start < cell.date);
    if !starts_here {
        return None;
    }

    let remaining_in_row = WEEK_LEN - cell.col;
    let span_days = cells[index..]
        .iter()
        .take(remaining_in_row)
        .take_while(|c| start <= c.date && c.date < end)
        .count();

    Some(Span {
        span_days,
        week_row: cell.row,
    })
}
