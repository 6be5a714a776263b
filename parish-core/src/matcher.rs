//! Day, month and range matching for date-scoped entities.
//!
//! Comparisons are done on local calendar fields (year, month, day-of-month)
//! with no time zone conversion. The time of day never affects which day an
//! entity is on.

use chrono::{Datelike, NaiveDate};

use crate::calendar_month::CalendarMonth;
use crate::date_range::DateRange;
use crate::entity::{EntityDate, ScopedEntity};
use crate::error::ParishResult;

/// True iff the entity is on `day`.
///
/// Dated entities must share year, month and day-of-month with `day`.
/// Annual entities (birthdays) are on every anniversary, see [`is_recurring_on_day`].
pub fn is_on_day<E: ScopedEntity + ?Sized>(entity: &E, day: NaiveDate) -> ParishResult<bool> {
    Ok(date_is_on_day(entity.require_date()?, day))
}

/// True iff the entity's month and day-of-month equal `day`'s, ignoring the year.
pub fn is_recurring_on_day<E: ScopedEntity + ?Sized>(entity: &E, day: NaiveDate) -> ParishResult<bool> {
    Ok(recurs_on(entity.require_date()?, day))
}

/// True iff the entity falls in `month`. Annual entities match on month alone.
pub fn is_in_month<E: ScopedEntity + ?Sized>(entity: &E, month: CalendarMonth) -> ParishResult<bool> {
    Ok(occurrence_in(entity.require_date()?, month).is_some())
}

/// True iff the entity's day lies within `range`. Annual entities match if any
/// anniversary does.
pub fn is_in_range<E: ScopedEntity + ?Sized>(entity: &E, range: &DateRange) -> ParishResult<bool> {
    Ok(date_in_range(entity.require_date()?, range))
}

pub fn date_is_on_day(date: &EntityDate, day: NaiveDate) -> bool {
    match date {
        EntityDate::Annual { .. } => recurs_on(date, day),
        _ => date.local_date() == Some(day),
    }
}

fn recurs_on(date: &EntityDate, day: NaiveDate) -> bool {
    date.month_day() == (day.month(), day.day())
}

/// The day `date` lands on within `month`, if any.
pub fn occurrence_in(date: &EntityDate, month: CalendarMonth) -> Option<NaiveDate> {
    match date {
        EntityDate::Annual { month: m, .. } if *m == month.month() => {
            date.in_year(month.year())
        }
        EntityDate::Annual { .. } => None,
        _ => date.local_date().filter(|d| month.contains(*d)),
    }
}

pub fn date_in_range(date: &EntityDate, range: &DateRange) -> bool {
    if range.is_empty() {
        return false;
    }

    match date {
        EntityDate::Annual { .. } => match (range.from, range.to) {
            (Some(from), Some(to)) => (from.year()..=to.year())
                .filter_map(|year| date.in_year(year))
                .any(|d| range.contains(d)),
            // Every year is in range in at least one direction
            _ => true,
        },
        _ => date.local_date().is_some_and(|d| range.contains(d)),
    }
}
