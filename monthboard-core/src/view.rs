//! The month view context.
//!
//! Owns the focused month, the working event set and the calendar
//! metadata, and derives a full `MonthLayout` on demand. All view state
//! lives here explicitly, never in ambient globals; setters never
//! render, and `render` never mutates.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::CalendarInfo;
use crate::event::{Event, EventKey};
use crate::grid;
use crate::layout::cells::{BarSegment, CellEntry, CellLayout, MonthLayout, SegmentKey, split, truncate};
use crate::layout::membership;
use crate::layout::span;
use crate::layout::tracks::TrackBoard;
use crate::month::Month;

/// Source of the current civil date, consulted at every render so the
/// grid reflects day rollover.
pub trait Today {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToday;

impl Today for SystemToday {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

pub struct MonthView<T = SystemToday> {
    focused: Month,
    events: Vec<Event>,
    calendars: HashMap<String, CalendarInfo>,
    clock: T,
}

impl MonthView<SystemToday> {
    /// A view of the current month with no events.
    pub fn new() -> Self {
        Self::with_clock(SystemToday)
    }
}

impl Default for MonthView<SystemToday> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Today> MonthView<T> {
    /// A view with a caller-supplied date source (fixed dates in tests).
    pub fn with_clock(clock: T) -> Self {
        let focused = Month::containing(clock.today());
        MonthView {
            focused,
            events: Vec::new(),
            calendars: HashMap::new(),
            clock,
        }
    }

    pub fn focused_month(&self) -> Month {
        self.focused
    }

    /// Change the focused month. Does not render.
    pub fn set_focused_month(&mut self, month: Month) {
        self.focused = month;
    }

    /// Replace the working event set. Does not render.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Replace the calendar metadata set. Does not render.
    pub fn set_calendars(&mut self, calendars: Vec<CalendarInfo>) {
        self.calendars.clear();
        for calendar in calendars {
            self.calendars.insert(calendar.id.clone(), calendar);
        }
    }

    /// Metadata for `id`, degrading to a stand-in for unknown calendars.
    pub fn calendar(&self, id: &str) -> CalendarInfo {
        self.calendars
            .get(id)
            .cloned()
            .unwrap_or_else(|| CalendarInfo::unknown(id))
    }

    pub fn next_month(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn prev_month(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn go_to_today(&mut self) {
        self.focused = Month::containing(self.clock.today());
    }

    /// Display color for an event: its own color, else its calendar's.
    pub fn resolve_color(&self, event: &Event) -> Option<String> {
        event.color.clone().or_else(|| {
            self.calendars
                .get(&event.calendar_id)
                .and_then(|c| c.color.clone())
        })
    }

    /// Compute the full layout for the focused month.
    ///
    /// Pure derivation: repeated calls with unchanged state produce an
    /// identical layout.
    pub fn render(&self) -> MonthLayout {
        let today = self.clock.today();
        let cells = grid::build(self.focused, today);

        // Collect each multi-day event once, keyed by (id, start date)
        let mut seen: HashSet<EventKey> = HashSet::new();
        let mut multi_day: Vec<&Event> = Vec::new();
        for cell in &cells {
            for event in membership::events_for_day(&self.events, cell.date) {
                if span::is_multi_day(event) && seen.insert(event.key()) {
                    multi_day.push(event);
                }
            }
        }

        // Allocation order is load-bearing for reproducible tracks:
        // start date ascending, then id
        multi_day.sort_by(|a, b| {
            a.start
                .date()
                .cmp(&b.start.date())
                .then_with(|| a.id.cmp(&b.id))
        });

        let mut board: TrackBoard<NaiveDate> = TrackBoard::new();
        let mut assigned: HashMap<EventKey, usize> = HashMap::new();
        for event in &multi_day {
            // Occupancy only counts dates inside the visible grid
            let dates: Vec<NaiveDate> = match event.date_range() {
                Some((start, end)) => cells
                    .iter()
                    .map(|c| c.date)
                    .filter(|d| start <= *d && *d < end)
                    .collect(),
                None => Vec::new(),
            };
            assigned.insert(event.key(), board.allocate(&dates));
        }

        debug!(
            month = %self.focused,
            events = self.events.len(),
            multi_day = multi_day.len(),
            "allocated multi-day tracks"
        );

        let mut rendered: HashSet<SegmentKey> = HashSet::new();
        let cell_layouts = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let day_events = membership::events_for_day(&self.events, cell.date);
                let (bar_events, regular) = split(&day_events);

                let mut bars = Vec::new();
                for event in bar_events {
                    let Some(segment) = span::compute(event, index, &cells) else {
                        continue;
                    };
                    let key = SegmentKey {
                        event: event.key(),
                        week_row: segment.week_row,
                    };
                    if !rendered.insert(key.clone()) {
                        continue;
                    }
                    bars.push(BarSegment {
                        key,
                        title: event.display_title().to_string(),
                        color: self.resolve_color(event),
                        track: assigned.get(&event.key()).copied().unwrap_or(0),
                        span_days: segment.span_days,
                    });
                }
                // Canonical order: tracks are unique per date, so this
                // also makes cell contents independent of input order
                bars.sort_by_key(|b| b.track);

                let entries: Vec<CellEntry> = regular
                    .iter()
                    .map(|event| CellEntry {
                        title: event.display_title().to_string(),
                        start_time: event.start.time(),
                        all_day: event.all_day(),
                        color: self.resolve_color(event),
                    })
                    .collect();
                let (entries, overflow) = truncate(entries);

                CellLayout {
                    cell: *cell,
                    reserved_tracks: board.depth(&cell.date),
                    bars,
                    entries,
                    overflow,
                }
            })
            .collect();

        MonthLayout {
            month: self.focused,
            cells: cell_layouts,
        }
    }
}
