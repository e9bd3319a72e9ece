//! Terminal rendering of a computed month layout.
//!
//! Draws the `MonthLayout` the core produces: a header, a weekday row,
//! then per week a day-number line, one line per occupied bar track, and
//! the regular entry lines with their overflow indicators. Event chips
//! use the event's background color with auto-contrast text.

use chrono::Datelike;
use monthboard_core::calendar::CalendarInfo;
use monthboard_core::color::{contrast_text, parse_rgb};
use monthboard_core::layout::{CellLayout, MonthLayout};
use owo_colors::OwoColorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Total columns per day cell, including the single-space gutter.
const CELL_WIDTH: usize = 14;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Extension trait for terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for MonthLayout {
    fn render(&self) -> String {
        render_month(self, false)
    }
}

impl Render for CalendarInfo {
    fn render(&self) -> String {
        let swatch = match self.color.as_deref().and_then(parse_rgb) {
            Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
            None => "●".to_string(),
        };
        format!(
            "{} {} {}",
            swatch,
            self.summary,
            format!("({})", self.id).dimmed()
        )
    }
}

/// Render the whole board. `stale` marks the header when the layout
/// shows events kept from before a failed refresh.
pub fn render_month(layout: &MonthLayout, stale: bool) -> String {
    let total_width = CELL_WIDTH * WEEKDAYS.len();
    let mut lines = Vec::new();

    let mut title = layout.month.name();
    if stale {
        title.push_str(" (stale)");
    }
    let pad = total_width.saturating_sub(title.width()) / 2;
    let title = if stale {
        title.yellow().bold().to_string()
    } else {
        title.bold().to_string()
    };
    lines.push(format!("{}{}", " ".repeat(pad), title));

    let weekday_row: String = WEEKDAYS.iter().map(|d| fit(d, CELL_WIDTH)).collect();
    lines.push(weekday_row.dimmed().to_string());

    for week in layout.weeks() {
        lines.push(String::new());
        lines.push(day_number_line(week));

        let depth = week.iter().map(|c| c.reserved_tracks).max().unwrap_or(0);
        for track in 0..depth {
            lines.push(bar_line(week, track));
        }

        let entry_rows = week
            .iter()
            .map(|c| c.entries.len() + usize::from(c.overflow > 0))
            .max()
            .unwrap_or(0);
        for row in 0..entry_rows {
            lines.push(entry_line(week, row));
        }
    }

    lines.join("\n")
}

fn day_number_line(week: &[CellLayout]) -> String {
    week.iter()
        .map(|cell| {
            let number = fit(&cell.cell.date.day().to_string(), CELL_WIDTH);
            if cell.cell.is_today {
                number.yellow().bold().to_string()
            } else if cell.cell.is_other_month {
                number.dimmed().to_string()
            } else {
                number
            }
        })
        .collect()
}

/// One line of bars for a single track. A bar anchored at a column draws
/// across its whole span; columns it covers are consumed in one step, so
/// nothing else can collide with it.
fn bar_line(week: &[CellLayout], track: usize) -> String {
    let mut line = String::new();
    let mut col = 0;
    while col < week.len() {
        match week[col].bars.iter().find(|b| b.track == track) {
            Some(bar) => {
                let span = bar.span_days.clamp(1, week.len() - col);
                line.push_str(&chip(&bar.title, bar.color.as_deref(), span * CELL_WIDTH - 1));
                line.push(' ');
                col += span;
            }
            None => {
                line.push_str(&" ".repeat(CELL_WIDTH));
                col += 1;
            }
        }
    }
    line
}

fn entry_line(week: &[CellLayout], row: usize) -> String {
    week.iter()
        .map(|cell| {
            if row < cell.entries.len() {
                let entry = &cell.entries[row];
                let text = match entry.start_time {
                    Some(time) => format!("{} {}", time.format("%-I:%M%P"), entry.title),
                    None => entry.title.clone(),
                };
                let mut block = chip(&text, entry.color.as_deref(), CELL_WIDTH - 1);
                block.push(' ');
                block
            } else if row == cell.entries.len() && cell.overflow > 0 {
                fit(&format!("+{} more", cell.overflow), CELL_WIDTH)
                    .dimmed()
                    .to_string()
            } else {
                " ".repeat(CELL_WIDTH)
            }
        })
        .collect()
}

/// A solid colored block of exactly `width` columns.
fn chip(text: &str, color: Option<&str>, width: usize) -> String {
    paint(&fit(text, width), color)
}

fn paint(text: &str, color: Option<&str>) -> String {
    let Some(hex) = color else {
        return text.to_string();
    };
    let Some((r, g, b)) = parse_rgb(hex) else {
        return text.to_string();
    };
    // Unwrap safe: contrast_text returns one of two parseable constants
    let (fr, fg, fb) = parse_rgb(contrast_text(hex)).unwrap();
    text.truecolor(fr, fg, fb).on_truecolor(r, g, b).to_string()
}

/// Pad or truncate to an exact display width, ellipsizing truncations.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return format!("{text}{}", " ".repeat(width - text.width()));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}
