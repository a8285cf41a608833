//! Calendar-date aggregation key.
//!
//! The store encodes dates as a single `YYYYMMDD` integer; the aggregation
//! and sort key is the plain (year, month, day) triple. Field order gives
//! the derived `Ord` the year-then-month-then-day ordering.

use chrono::{Datelike, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Decode the store's `YYYYMMDD` integer form.
    pub const fn from_encoded(encoded: i32) -> Self {
        Self {
            year: encoded / 10000,
            month: ((encoded % 10000) / 100) as u32,
            day: (encoded % 100) as u32,
        }
    }

    /// Encode to the store's `YYYYMMDD` integer form.
    pub const fn encoded(&self) -> i32 {
        self.year * 10000 + self.month as i32 * 100 + self.day as i32
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
