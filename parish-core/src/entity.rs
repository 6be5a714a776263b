//! Date-scoped entity types.
//!
//! Every record the aggregator works with (appointments, events, birthdays)
//! implements [`ScopedEntity`]. The aggregator only ever borrows these records;
//! creating and storing them is the caller's business.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::ALL_FILTER;
use crate::error::{ParishError, ParishResult};

/// Record identifier, stable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(u64),
    Text(String),
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        EntityId::Number(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Datetime formats accepted for local timestamps, tried in order.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// When an entity happens, in local calendar terms.
///
/// There is no time zone attached: two values are compared field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityDate {
    /// Timed entity (appointments, timed events)
    DateTime(NaiveDateTime),
    /// All-day entity
    Date(NaiveDate),
    /// Recurs every year on the same month and day (birthdays)
    Annual { month: u32, day: u32 },
}

impl EntityDate {
    /// Build an annual date, rejecting impossible month/day pairs.
    /// February 29 is accepted.
    pub fn annual(month: u32, day: u32) -> ParishResult<Self> {
        // 2000 is a leap year
        NaiveDate::from_ymd_opt(2000, month, day)
            .map(|_| EntityDate::Annual { month, day })
            .ok_or_else(|| ParishError::InvalidDate(format!("{:02}-{:02}", month, day)))
    }

    /// Parse a date as written in fixture files.
    ///
    /// Accepts `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM`, `YYYY-MM-DD`, `MM-DD`
    /// (annual) and RFC 3339 with an offset. Offset timestamps are converted into
    /// `tz` and then kept as local wall-clock time.
    pub fn parse_in(raw: &str, tz: &Tz) -> ParishResult<Self> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(EntityDate::DateTime(dt.with_timezone(tz).naive_local()));
        }

        for format in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Ok(EntityDate::DateTime(dt));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(EntityDate::Date(date));
        }

        if let Some((month, day)) = raw.split_once('-') {
            if let (Ok(month), Ok(day)) = (month.parse(), day.parse()) {
                return Self::annual(month, day);
            }
        }

        Err(ParishError::InvalidDate(format!(
            "'{}'. Expected YYYY-MM-DD, YYYY-MM-DDTHH:MM, RFC 3339 or MM-DD",
            raw
        )))
    }

    /// The calendar day this date falls on. `None` for annual dates.
    pub fn local_date(&self) -> Option<NaiveDate> {
        match self {
            EntityDate::DateTime(dt) => Some(dt.date()),
            EntityDate::Date(d) => Some(*d),
            EntityDate::Annual { .. } => None,
        }
    }

    /// Time of day, only for timed entities.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            EntityDate::DateTime(dt) => Some(dt.time()),
            _ => None,
        }
    }

    pub fn month_day(&self) -> (u32, u32) {
        match self {
            EntityDate::DateTime(dt) => (dt.month(), dt.day()),
            EntityDate::Date(d) => (d.month(), d.day()),
            EntityDate::Annual { month, day } => (*month, *day),
        }
    }

    /// The day this date's month/day lands on in `year`, if that year has it.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = self.month_day();
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Like [`EntityDate::in_year`], but February 29 is observed on
    /// February 28 in non-leap years. Used for birthday reminders.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        self.in_year(year).or_else(|| {
            if self.month_day() == (2, 29) {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    pub fn is_annual(&self) -> bool {
        matches!(self, EntityDate::Annual { .. })
    }
}

impl fmt::Display for EntityDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityDate::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
            EntityDate::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EntityDate::Annual { month, day } => write!(f, "{:02}-{:02}", month, day),
        }
    }
}

/// A value of a closed enumeration (category or status).
pub trait Tag: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    const VARIANTS: &'static [Self];

    /// The tag as written in fixtures and filter arguments.
    fn as_str(&self) -> &'static str;

    fn from_tag(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == raw)
    }
}

/// A category or status filter.
///
/// Parsed from raw input so that an out-of-range value is kept as
/// [`Filter::Unknown`] instead of failing the whole query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
    Unknown(String),
}

impl<T: Tag> Filter<T> {
    /// `"all"` disables the filter; anything else must be a known tag.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_FILTER {
            return Filter::All;
        }

        match T::from_tag(raw) {
            Some(tag) => Filter::Only(tag),
            None => Filter::Unknown(raw.to_string()),
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(tag) => *tag == value,
            Filter::Unknown(_) => false,
        }
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: Tag> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "{}", ALL_FILTER),
            Filter::Only(tag) => write!(f, "{}", tag),
            Filter::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// A record bound to a calendar date.
pub trait ScopedEntity {
    type Category: Tag;
    type Status: Tag;

    fn id(&self) -> &EntityId;

    /// `None` marks a malformed record; it is never defaulted.
    fn date(&self) -> Option<&EntityDate>;

    fn category(&self) -> Self::Category;

    fn status(&self) -> Self::Status;

    fn title(&self) -> &str;

    fn location(&self) -> Option<&str> {
        None
    }

    /// The entity's date, or `InvalidEntity` if it has none.
    fn require_date(&self) -> ParishResult<&EntityDate> {
        self.date()
            .ok_or_else(|| ParishError::InvalidEntity(self.id().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_local_datetime() {
        let date = EntityDate::parse_in("2025-04-05T14:30", &Tz::UTC).unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 4, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(date, EntityDate::DateTime(expected));
    }

    #[test]
    fn parse_all_day_and_annual() {
        assert_eq!(
            EntityDate::parse_in("2025-04-13", &Tz::UTC).unwrap(),
            EntityDate::Date(NaiveDate::from_ymd_opt(2025, 4, 13).unwrap())
        );
        assert_eq!(
            EntityDate::parse_in("05-15", &Tz::UTC).unwrap(),
            EntityDate::Annual { month: 5, day: 15 }
        );
    }

    #[test]
    fn parse_offset_converts_into_zone() {
        // 23:30 in New York is already the next day in UTC
        let date = EntityDate::parse_in("2025-04-05T23:30:00-04:00", &Tz::UTC).unwrap();
        assert_eq!(
            date.local_date(),
            NaiveDate::from_ymd_opt(2025, 4, 6)
        );

        let date =
            EntityDate::parse_in("2025-04-05T23:30:00-04:00", &chrono_tz::America::New_York)
                .unwrap();
        assert_eq!(
            date.local_date(),
            NaiveDate::from_ymd_opt(2025, 4, 5)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(EntityDate::parse_in("next tuesday", &Tz::UTC).is_err());
        assert!(EntityDate::parse_in("13-01", &Tz::UTC).is_err());
        assert!(EntityDate::parse_in("02-30", &Tz::UTC).is_err());
    }

    #[test]
    fn annual_accepts_leap_day() {
        assert!(EntityDate::annual(2, 29).is_ok());
        assert!(EntityDate::annual(4, 31).is_err());
    }

    #[test]
    fn leap_day_anniversary_falls_back_to_feb_28() {
        let date = EntityDate::Annual { month: 2, day: 29 };
        assert_eq!(date.in_year(2025), None);
        assert_eq!(date.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(date.anniversary_in(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(date.anniversary_in(2025), NaiveDate::from_ymd_opt(2025, 2, 28));
    }

    #[test]
    fn entity_id_display() {
        assert_eq!(EntityId::from(7).to_string(), "7");
        assert_eq!(EntityId::from("apt-7").to_string(), "apt-7");
    }
}
