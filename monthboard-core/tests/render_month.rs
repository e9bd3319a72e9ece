//! Full render passes over realistic month/event combinations.

use std::collections::HashMap;

use chrono::NaiveDate;
use monthboard_core::event::{Event, EventTime};
use monthboard_core::month::Month;
use monthboard_core::view::{MonthView, Today};

struct FixedToday(NaiveDate);

impl Today for FixedToday {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn view_for(month: Month, today: NaiveDate) -> MonthView<FixedToday> {
    let mut view = MonthView::with_clock(FixedToday(today));
    view.set_focused_month(month);
    view
}

fn all_day(id: &str, start: NaiveDate, end: NaiveDate) -> Event {
    Event {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        calendar_id: "primary".to_string(),
        start: EventTime::Date(start),
        end: EventTime::Date(end),
        color: None,
    }
}

fn timed(id: &str, day: NaiveDate, hour: u32) -> Event {
    Event {
        id: id.to_string(),
        title: id.to_string(),
        description: None,
        calendar_id: "primary".to_string(),
        start: EventTime::DateTime(day.and_hms_opt(hour, 0, 0).unwrap()),
        end: EventTime::DateTime(day.and_hms_opt(hour + 1, 0, 0).unwrap()),
        color: None,
    }
}

#[test]
fn one_day_event_stays_regular_two_day_event_becomes_a_bar() {
    let mut view = view_for(
        Month {
            year: 2024,
            month: 1,
        },
        date(2024, 1, 1),
    );
    view.set_events(vec![
        all_day("single", date(2024, 1, 16), date(2024, 1, 17)),
        all_day("double", date(2024, 1, 16), date(2024, 1, 18)),
    ]);

    let layout = view.render();
    let tuesday = layout
        .cells
        .iter()
        .find(|c| c.cell.date == date(2024, 1, 16))
        .unwrap();

    assert_eq!(tuesday.bars.len(), 1);
    assert_eq!(tuesday.bars[0].key.event.id, "double");
    assert_eq!(tuesday.bars[0].span_days, 2);
    assert_eq!(tuesday.entries.len(), 1);
    assert_eq!(tuesday.entries[0].title, "single");
}

#[test]
fn bar_crossing_a_week_boundary_splits_into_two_segments() {
    // Jan 28 2025 is a Tuesday; the event runs through Sunday Feb 2
    // (exclusive end Feb 3) and so crosses into February's second row.
    let mut view = view_for(
        Month {
            year: 2025,
            month: 2,
        },
        date(2025, 2, 1),
    );
    view.set_events(vec![all_day(
        "crossing",
        date(2025, 1, 28),
        date(2025, 2, 3),
    )]);

    let layout = view.render();
    let segments: Vec<_> = layout
        .cells
        .iter()
        .flat_map(|c| c.bars.iter().map(|b| (c.cell.date, b)))
        .collect();

    assert_eq!(segments.len(), 2);

    // First segment runs from Tuesday to the Saturday ending its row
    let (first_anchor, first) = &segments[0];
    assert_eq!(*first_anchor, date(2025, 1, 28));
    assert_eq!(first.span_days, 5);

    // Second segment restarts on the Sunday beginning the next row
    let (second_anchor, second) = &segments[1];
    assert_eq!(*second_anchor, date(2025, 2, 2));
    assert_eq!(second.span_days, 1);

    assert_ne!(first.key.week_row, second.key.week_row);
    assert_eq!(first.key.event, second.key.event);
    assert_eq!(first.track, second.track);
}

#[test]
fn overlapping_bars_never_share_a_track_on_a_date() {
    let mut view = view_for(
        Month {
            year: 2024,
            month: 1,
        },
        date(2024, 1, 1),
    );
    view.set_events(vec![
        all_day("a", date(2024, 1, 8), date(2024, 1, 12)),
        all_day("b", date(2024, 1, 10), date(2024, 1, 15)),
        all_day("c", date(2024, 1, 11), date(2024, 1, 13)),
        all_day("d", date(2024, 1, 14), date(2024, 1, 17)),
        all_day("e", date(2023, 12, 28), date(2024, 1, 10)),
    ]);

    let layout = view.render();

    // Rebuild per-date occupancy from the emitted segments
    let mut tracks_by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();
    for (index, cell) in layout.cells.iter().enumerate() {
        for bar in &cell.bars {
            for offset in 0..bar.span_days {
                let covered = layout.cells[index + offset].cell.date;
                tracks_by_date.entry(covered).or_default().push(bar.track);
            }
        }
    }

    for (covered, mut tracks) in tracks_by_date {
        let total = tracks.len();
        tracks.sort_unstable();
        tracks.dedup();
        assert_eq!(tracks.len(), total, "duplicate track on {covered}");
    }
}

#[test]
fn track_assignment_ignores_input_order() {
    let month = Month {
        year: 2024,
        month: 1,
    };
    let events = vec![
        all_day("gamma", date(2024, 1, 8), date(2024, 1, 12)),
        all_day("alpha", date(2024, 1, 8), date(2024, 1, 12)),
        all_day("beta", date(2024, 1, 10), date(2024, 1, 15)),
        timed("standup", date(2024, 1, 9), 9),
    ];

    let mut forward = view_for(month, date(2024, 1, 1));
    forward.set_events(events.clone());

    let mut reversed = view_for(month, date(2024, 1, 1));
    reversed.set_events(events.into_iter().rev().collect());

    assert_eq!(forward.render(), reversed.render());
}

#[test]
fn same_start_date_ties_break_by_id() {
    let mut view = view_for(
        Month {
            year: 2024,
            month: 1,
        },
        date(2024, 1, 1),
    );
    view.set_events(vec![
        all_day("zulu", date(2024, 1, 8), date(2024, 1, 11)),
        all_day("alpha", date(2024, 1, 8), date(2024, 1, 11)),
    ]);

    let layout = view.render();
    let monday = layout
        .cells
        .iter()
        .find(|c| c.cell.date == date(2024, 1, 8))
        .unwrap();

    let by_id: HashMap<&str, usize> = monday
        .bars
        .iter()
        .map(|b| (b.key.event.id.as_str(), b.track))
        .collect();
    assert_eq!(by_id["alpha"], 0);
    assert_eq!(by_id["zulu"], 1);
}

#[test]
fn render_is_idempotent() {
    let mut view = view_for(
        Month {
            year: 2024,
            month: 1,
        },
        date(2024, 1, 16),
    );
    view.set_events(vec![
        all_day("trip", date(2024, 1, 15), date(2024, 1, 20)),
        timed("standup", date(2024, 1, 16), 9),
        timed("review", date(2024, 1, 16), 15),
    ]);

    assert_eq!(view.render(), view.render());
}

#[test]
fn six_regular_events_show_four_plus_overflow() {
    let day = date(2024, 1, 16);
    let mut view = view_for(
        Month {
            year: 2024,
            month: 1,
        },
        date(2024, 1, 1),
    );
    view.set_events((0..6).map(|i| timed(&format!("e{i}"), day, 8 + i)).collect());

    let layout = view.render();
    let cell = layout.cells.iter().find(|c| c.cell.date == day).unwrap();
    assert_eq!(cell.entries.len(), 4);
    assert_eq!(cell.overflow, 2);

    // Four or fewer show everything with no indicator
    view.set_events((0..4).map(|i| timed(&format!("e{i}"), day, 8 + i)).collect());
    let layout = view.render();
    let cell = layout.cells.iter().find(|c| c.cell.date == day).unwrap();
    assert_eq!(cell.entries.len(), 4);
    assert_eq!(cell.overflow, 0);
}

#[test]
fn event_from_before_the_grid_anchors_at_cell_zero() {
    // January 2024's grid starts on Sunday Dec 31
    let mut view = view_for(
        Month {
            year: 2024,
            month: 1,
        },
        date(2024, 1, 1),
    );
    view.set_events(vec![all_day(
        "holidays",
        date(2023, 12, 22),
        date(2024, 1, 3),
    )]);

    let layout = view.render();
    let first = &layout.cells[0];
    assert_eq!(first.cell.date, date(2023, 12, 31));
    assert_eq!(first.bars.len(), 1);
    assert_eq!(first.bars[0].span_days, 3); // Dec 31, Jan 1, Jan 2

    // And nowhere else
    let total: usize = layout.cells.iter().map(|c| c.bars.len()).sum();
    assert_eq!(total, 1);
}
