//! Focused month and navigation.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month (year plus 1-based month number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    /// 1-12.
    pub month: u32,
}

impl Month {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing the current local date.
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Parse "YYYY-MM".
    pub fn from_arg(s: &str) -> Result<Self, String> {
        let err = || format!("Invalid month '{}'. Expected YYYY-MM", s);

        let (year, month) = s.split_once('-').ok_or_else(err)?;
        let year: i32 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;

        if !(1..=12).contains(&month) {
            return Err(err());
        }
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(err)?;

        Ok(Month { year, month })
    }

    pub fn first_day(&self) -> NaiveDate {
        // Unwrap safe: month is kept in 1-12 and day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Days::new(1)
    }

    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn next(&self) -> Month {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Month {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Header label, e.g. "January 2024".
    pub fn name(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
