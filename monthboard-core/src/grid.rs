//! Month grid construction.
//!
//! Builds the ordered cell sequence for a rendered month: a whole number
//! of Sunday-first week rows, padded with leading and trailing days from
//! the adjacent months.

use chrono::{Datelike, Days, NaiveDate};

use crate::month::Month;

/// Days per week row.
pub const WEEK_LEN: usize = 7;

/// One grid position for a rendered month.
///
/// Cells are produced fresh on every render and carry no identity across
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub date: NaiveDate,
    /// Date falls outside the focused month.
    pub is_other_month: bool,
    /// Date equals the current civil date.
    pub is_today: bool,
    /// Week row, `index / 7`.
    pub row: usize,
    /// Column within the week, `index % 7`, 0 = Sunday.
    pub col: usize,
}

/// Build the cell sequence for `month`.
///
/// The grid always covers whole weeks: it starts on the Sunday on or
/// before the 1st and ends on the Saturday on or after the last day.
pub fn build(month: Month, today: NaiveDate) -> Vec<Cell> {
    let first = month.first_day();
    let start_dow = first.weekday().num_days_from_sunday() as usize;
    let total_days = month.day_count() as usize;
    let total_cells = (start_dow + total_days).div_ceil(WEEK_LEN) * WEEK_LEN;

    let grid_start = first - Days::new(start_dow as u64);

    (0..total_cells)
        .map(|i| {
            let date = grid_start + Days::new(i as u64);
            Cell {
                date,
                is_other_month: !month.contains(date),
                is_today: date == today,
                row: i / WEEK_LEN,
                col: i % WEEK_LEN,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_is_whole_weeks() {
        for month in 1..=12 {
            let month = Month { year: 2024, month };
            let cells = build(month, date(2024, 6, 15));
            assert!(!cells.is_empty());
            assert_eq!(cells.len() % WEEK_LEN, 0);
        }
    }

    #[test]
    fn test_grid_covers_month_exactly_once() {
        let month = Month {
            year: 2024,
            month: 2,
        };
        let cells = build(month, date(2024, 2, 10));

        let in_month: Vec<u32> = cells
            .iter()
            .filter(|c| !c.is_other_month)
            .map(|c| c.date.day())
            .collect();
        let expected: Vec<u32> = (1..=29).collect();
        assert_eq!(in_month, expected);
    }

    #[test]
    fn test_leading_cells_come_from_previous_month() {
        // March 2024 starts on a Friday: five leading cells from February
        let month = Month {
            year: 2024,
            month: 3,
        };
        let cells = build(month, date(2024, 3, 10));

        assert_eq!(cells[0].date, date(2024, 2, 25));
        assert!(cells[0].is_other_month);
        assert_eq!(cells[5].date, date(2024, 3, 1));
        assert!(!cells[5].is_other_month);
    }

    #[test]
    fn test_trailing_cells_come_from_next_month() {
        // April 2024 ends on a Tuesday: trailing cells from May
        let month = Month {
            year: 2024,
            month: 4,
        };
        let cells = build(month, date(2024, 4, 10));

        let last = cells.last().unwrap();
        assert_eq!(last.date, date(2024, 5, 4));
        assert!(last.is_other_month);
    }

    #[test]
    fn test_rows_and_columns() {
        let month = Month {
            year: 2024,
            month: 1,
        };
        let cells = build(month, date(2024, 1, 1));

        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.row, i / WEEK_LEN);
            assert_eq!(cell.col, i % WEEK_LEN);
        }
        // Dates are consecutive
        for pair in cells.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    #[test]
    fn test_today_flag_marks_one_cell() {
        let month = Month {
            year: 2024,
            month: 1,
        };
        let cells = build(month, date(2024, 1, 16));
        let today_cells: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date, date(2024, 1, 16));
    }

    #[test]
    fn test_today_outside_month_marks_nothing() {
        let month = Month {
            year: 2024,
            month: 1,
        };
        let cells = build(month, date(2024, 6, 15));
        assert!(cells.iter().all(|c| !c.is_today));
    }
}
