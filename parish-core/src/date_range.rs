//! Date range for filtering entities.

use chrono::{Duration, NaiveDate};

use crate::constants::DEFAULT_RANGE_DAYS;
use crate::error::{ParishError, ParishResult};

/// Inclusive date range.
/// None values mean unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn unbounded() -> Self {
        DateRange::default()
    }

    /// Parse range arguments relative to `today`.
    /// - `from`: "start" for unbounded, or YYYY-MM-DD; defaults to today
    /// - `to`: YYYY-MM-DD, defaults to +DEFAULT_RANGE_DAYS from today
    pub fn from_args(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> ParishResult<Self> {
        let from = match from {
            Some("start") => None, // Unbounded past
            Some(s) => Some(parse_date(s)?),
            None => Some(today),
        };

        let to = match to {
            Some(s) => Some(parse_date(s)?),
            None => Some(today + Duration::days(DEFAULT_RANGE_DAYS)),
        };

        Ok(DateRange { from, to })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }

    /// True when the bounds are inverted, so no date can match.
    pub fn is_empty(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> ParishResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ParishError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_args_defaults_to_next_days() {
        let today = date(2025, 4, 1);
        let range = DateRange::from_args(None, None, today).unwrap();
        assert_eq!(range.from, Some(today));
        assert_eq!(range.to, Some(date(2025, 5, 1)));
    }

    #[test]
    fn from_args_start_is_unbounded() {
        let range = DateRange::from_args(Some("start"), Some("2025-04-30"), date(2025, 4, 1)).unwrap();
        assert_eq!(range.from, None);
        assert!(range.contains(date(1990, 1, 1)));
        assert!(range.contains(date(2025, 4, 30)));
        assert!(!range.contains(date(2025, 5, 1)));
    }

    #[test]
    fn from_args_rejects_bad_dates() {
        assert!(DateRange::from_args(Some("04/05/2025"), None, date(2025, 4, 1)).is_err());
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange::new(date(2025, 4, 5), date(2025, 4, 8));
        assert!(range.contains(date(2025, 4, 5)));
        assert!(range.contains(date(2025, 4, 8)));
        assert!(!range.contains(date(2025, 4, 4)));
        assert!(!range.is_empty());
    }

    #[test]
    fn inverted_range_is_empty() {
        let range = DateRange::new(date(2025, 4, 8), date(2025, 4, 5));
        assert!(range.is_empty());
        assert!(!range.contains(date(2025, 4, 6)));
    }
}
