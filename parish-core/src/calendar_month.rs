//! A calendar month, the unit a calendar grid is drawn for.

use std::fmt;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::error::{ParishError, ParishResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> ParishResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| CalendarMonth { first })
            .ok_or_else(|| ParishError::InvalidDate(format!("{}-{:02} is not a month", year, month)))
    }

    /// The month a given day belongs to.
    pub fn containing(date: NaiveDate) -> Self {
        CalendarMonth {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> ParishResult<Self> {
        NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
            .map(|first| CalendarMonth { first })
            .map_err(|_| ParishError::InvalidDate(format!("'{}'. Expected YYYY-MM", s)))
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            // December of the last representable year
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Every day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}
