//! Filtering and per-period counts over an entity store.
//!
//! Every function borrows its input and returns references in store order.
//! Inputs are `IntoIterator<Item = &E>`, so a slice, a `Vec<E>` or the output
//! of another filter can be passed in, which makes filters composable:
//!
//! ```
//! use parish_core::aggregate::{entities_on_day, filter_by_category};
//! use parish_core::entity::Filter;
//! use parish_core::store::{EntityStore, Fixtures};
//! use chrono::NaiveDate;
//!
//! let fixtures = Fixtures::seed().unwrap();
//! let day = NaiveDate::from_ymd_opt(2025, 4, 5).unwrap();
//! let prayers = filter_by_category(
//!     entities_on_day(fixtures.appointments.list_all(), day),
//!     &Filter::parse("prayer"),
//! );
//! assert_eq!(prayers.len(), 1);
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use tracing::warn;

use crate::calendar_month::CalendarMonth;
use crate::date_range::DateRange;
use crate::entity::{Filter, ScopedEntity, Tag};
use crate::error::ParishResult;
use crate::matcher::{is_in_month, is_in_range, is_on_day, occurrence_in};
use crate::records::{AppointmentStatus, Birthday};

/// Keep entities whose category passes `filter`.
///
/// `Filter::All` keeps everything; an unknown category keeps nothing.
pub fn filter_by_category<'a, E, I>(entities: I, filter: &Filter<E::Category>) -> Vec<&'a E>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    filter_by(entities, filter, "category", |e| e.category())
}

/// Keep entities whose status passes `filter`.
pub fn filter_by_status<'a, E, I>(entities: I, filter: &Filter<E::Status>) -> Vec<&'a E>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    filter_by(entities, filter, "status", |e| e.status())
}

fn filter_by<'a, E, I, T>(entities: I, filter: &Filter<T>, field: &'static str, tag: impl Fn(&E) -> T) -> Vec<&'a E>
where
    E: 'a,
    I: IntoIterator<Item = &'a E>,
    T: Tag,
{
    match filter {
        Filter::All => entities.into_iter().collect(),
        Filter::Only(value) => entities.into_iter().filter(|e| tag(*e) == *value).collect(),
        Filter::Unknown(raw) => {
            warn!(field, value = %raw, "unknown filter value, no entities match");
            Vec::new()
        }
    }
}

/// Entities on `day`, in store order.
///
/// Entities without a date are skipped; they never hide the rest of the day.
pub fn entities_on_day<'a, E, I>(entities: I, day: NaiveDate) -> Vec<&'a E>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    entities
        .into_iter()
        .filter(|e| matched_or_skipped(*e, is_on_day(*e, day)))
        .collect()
}

/// Entities in `month`, in store order.
pub fn entities_in_month<'a, E, I>(entities: I, month: CalendarMonth) -> Vec<&'a E>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    entities
        .into_iter()
        .filter(|e| matched_or_skipped(*e, is_in_month(*e, month)))
        .collect()
}

/// Entities in `range`, in store order.
pub fn entities_in_range<'a, E, I>(entities: I, range: &DateRange) -> Vec<&'a E>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    entities
        .into_iter()
        .filter(|e| matched_or_skipped(*e, is_in_range(*e, range)))
        .collect()
}

/// Number of entities on each day of `month`, keyed by day-of-month.
///
/// Every day of the month has an entry, including days with no entities.
pub fn count_per_day_in_month<'a, E, I>(entities: I, month: CalendarMonth) -> BTreeMap<u32, usize>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut counts: BTreeMap<u32, usize> = month.days().map(|d| (d.day(), 0)).collect();

    for entity in entities {
        let date = match entity.require_date() {
            Ok(date) => date,
            Err(err) => {
                skip(entity, &err.to_string());
                continue;
            }
        };

        if let Some(day) = occurrence_in(date, month) {
            *counts.entry(day.day()).or_default() += 1;
        }
    }

    counts
}

/// Appointments awaiting approval.
pub fn pending_only<'a, E, I>(entities: I) -> Vec<&'a E>
where
    E: ScopedEntity<Status = AppointmentStatus> + 'a,
    I: IntoIterator<Item = &'a E>,
{
    filter_by_status(entities, &Filter::Only(AppointmentStatus::Pending))
}

/// Case-insensitive substring search over title and location.
/// A blank query keeps everything.
pub fn search<'a, E, I>(entities: I, query: &str) -> Vec<&'a E>
where
    E: ScopedEntity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entities.into_iter().collect();
    }

    entities
        .into_iter()
        .filter(|e| {
            e.title().to_lowercase().contains(&needle)
                || e.location().is_some_and(|l| l.to_lowercase().contains(&needle))
        })
        .collect()
}

/// A birthday's next occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingBirthday<'a> {
    pub date: NaiveDate,
    pub birthday: &'a Birthday,
    /// Age reached that day, when the birth year is known
    pub turning: Option<i32>,
}

/// Birthdays whose next occurrence (today included) is within `within_days`,
/// soonest first. Ties keep store order.
///
/// A February 29 birthday is observed on February 28 in non-leap years.
pub fn upcoming_birthdays<'a, I>(birthdays: I, today: NaiveDate, within_days: u32) -> Vec<UpcomingBirthday<'a>>
where
    I: IntoIterator<Item = &'a Birthday>,
{
    let last = today
        .checked_add_days(Days::new(u64::from(within_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<_> = birthdays
        .into_iter()
        .filter_map(|birthday| {
            let date = match birthday.require_date() {
                Ok(date) => date,
                Err(err) => {
                    skip(birthday, &err.to_string());
                    return None;
                }
            };

            let next = date
                .anniversary_in(today.year())
                .filter(|d| *d >= today)
                .or_else(|| date.anniversary_in(today.year() + 1))?;

            (next <= last).then(|| UpcomingBirthday {
                date: next,
                birthday,
                turning: birthday.age_on(next),
            })
        })
        .collect();

    // Stable sort keeps store order for birthdays on the same day
    upcoming.sort_by_key(|u| u.date);
    upcoming
}

fn matched_or_skipped<E: ScopedEntity + ?Sized>(entity: &E, result: ParishResult<bool>) -> bool {
    match result {
        Ok(matched) => matched,
        Err(err) => {
            skip(entity, &err.to_string());
            false
        }
    }
}

fn skip<E: ScopedEntity + ?Sized>(entity: &E, reason: &str) {
    warn!(id = %entity.id(), reason, "skipping malformed entity");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityDate;
    use crate::records::{Appointment, AppointmentType, BirthdayStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn appointment(id: u64, kind: AppointmentType, status: AppointmentStatus, at: (u32, u32, u32, u32)) -> Appointment {
        let (m, d, h, min) = at;
        let dt = date(2025, m, d).and_hms_opt(h, min, 0).unwrap();
        Appointment::new(id, format!("Appointment {}", id), kind, EntityDate::DateTime(dt), status)
    }

    fn sample() -> Vec<Appointment> {
        vec![
            appointment(1, AppointmentType::Visit, AppointmentStatus::Confirmed, (4, 5, 10, 0))
                .with_location("123 Main St"),
            appointment(2, AppointmentType::Prayer, AppointmentStatus::Pending, (4, 5, 14, 30))
                .with_location("Memorial Hospital, Room 305"),
            appointment(3, AppointmentType::Worship, AppointmentStatus::Confirmed, (4, 6, 18, 0)),
            appointment(4, AppointmentType::Social, AppointmentStatus::Cancelled, (4, 8, 9, 0)),
            appointment(5, AppointmentType::Visit, AppointmentStatus::Pending, (5, 10, 13, 0)),
        ]
    }

    fn ids<E: ScopedEntity>(entities: &[&E]) -> Vec<String> {
        entities.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn all_category_is_identity() {
        let apts = sample();
        let all = filter_by_category(&apts, &Filter::All);
        assert_eq!(all.len(), apts.len());
        assert!(all.iter().zip(&apts).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn category_filter_is_ordered_subsequence() {
        let apts = sample();
        let visits = filter_by_category(&apts, &Filter::Only(AppointmentType::Visit));
        assert_eq!(ids(&visits), ["1", "5"]);
        assert!(visits.iter().all(|a| a.kind == AppointmentType::Visit));
    }

    #[test]
    fn unknown_filter_values_match_nothing() {
        let apts = sample();
        assert!(filter_by_category(&apts, &Filter::parse("baptism")).is_empty());
        assert!(filter_by_status(&apts, &Filter::parse("approved")).is_empty());
    }

    #[test]
    fn status_filter() {
        let apts = sample();
        let confirmed = filter_by_status(&apts, &Filter::parse("confirmed"));
        assert_eq!(ids(&confirmed), ["1", "3"]);
        assert_eq!(filter_by_status(&apts, &Filter::parse("all")).len(), 5);
    }

    #[test]
    fn pending_only_keeps_pending() {
        let apts = sample();
        assert_eq!(ids(&pending_only(&apts)), ["2", "5"]);
    }

    #[test]
    fn filters_compose() {
        let apts = sample();
        let on_day = entities_on_day(&apts, date(2025, 4, 5));
        let pending = pending_only(on_day);
        assert_eq!(ids(&pending), ["2"]);
    }

    #[test]
    fn entities_on_day_keeps_store_order() {
        let mut apts = sample();
        // Later time first in the store: output must not be re-sorted
        apts.swap(0, 1);
        assert_eq!(ids(&entities_on_day(&apts, date(2025, 4, 5))), ["2", "1"]);
        assert!(entities_on_day(&apts, date(2025, 4, 7)).is_empty());
    }

    #[test]
    fn malformed_entity_does_not_blank_the_day() {
        let mut apts = sample();
        apts[0].date = None;

        assert_eq!(ids(&entities_on_day(&apts, date(2025, 4, 5))), ["2"]);

        let counts = count_per_day_in_month(&apts, CalendarMonth::new(2025, 4).unwrap());
        assert_eq!(counts[&5], 1);
        assert_eq!(counts[&8], 1);
    }

    #[test]
    fn month_and_range_listing() {
        let apts = sample();
        let april = entities_in_month(&apts, CalendarMonth::new(2025, 4).unwrap());
        assert_eq!(ids(&april), ["1", "2", "3", "4"]);

        let range = DateRange::new(date(2025, 4, 6), date(2025, 5, 10));
        assert_eq!(ids(&entities_in_range(&apts, &range)), ["3", "4", "5"]);
    }

    #[test]
    fn count_per_day_has_every_day() {
        let apts = sample();
        let counts = count_per_day_in_month(&apts, CalendarMonth::new(2025, 5).unwrap());
        assert_eq!(counts.len(), 31);
        assert_eq!(counts[&10], 1);
        assert_eq!(counts.values().sum::<usize>(), 1);
    }

    #[test]
    fn search_matches_title_and_location() {
        let apts = sample();
        assert_eq!(ids(&search(&apts, "HOSPITAL")), ["2"]);
        assert_eq!(ids(&search(&apts, "appointment 3")), ["3"]);
        assert_eq!(search(&apts, "  ").len(), 5);
        assert!(search(&apts, "cathedral").is_empty());
    }

    #[test]
    fn empty_inputs_give_empty_results() {
        let none: Vec<Appointment> = Vec::new();
        let april = CalendarMonth::new(2025, 4).unwrap();

        assert!(filter_by_category(&none, &Filter::All).is_empty());
        assert!(filter_by_status(&none, &Filter::Only(AppointmentStatus::Pending)).is_empty());
        assert!(entities_on_day(&none, date(2025, 4, 5)).is_empty());
        assert!(entities_in_month(&none, april).is_empty());
        assert!(pending_only(&none).is_empty());
        assert!(upcoming_birthdays(&[], date(2025, 4, 5), 30).is_empty());
        assert!(count_per_day_in_month(&none, april).values().all(|c| *c == 0));
    }

    #[test]
    fn upcoming_birthdays_wrap_into_next_year() {
        let mut birthdays = vec![
            Birthday::new(1, "Ruth", 1, 5),
            Birthday::new(2, "Noah", 12, 28),
            Birthday::new(3, "Anna", 12, 20),
            Birthday::new(4, "Past", 12, 1),
            Birthday::new(5, "Later", 3, 1),
        ];
        birthdays[0].birth_year = Some(1980);

        let today = date(2025, 12, 20);
        let upcoming = upcoming_birthdays(&birthdays, today, 30);

        let names: Vec<_> = upcoming.iter().map(|u| u.birthday.member_name.as_str()).collect();
        assert_eq!(names, ["Anna", "Noah", "Ruth"]);
        assert_eq!(upcoming[2].date, date(2026, 1, 5));
        assert_eq!(upcoming[2].turning, Some(46));
        assert_eq!(upcoming[0].turning, None);
    }

    #[test]
    fn huge_window_is_clamped() {
        let birthdays = vec![Birthday::new(1, "Ruth", 5, 15)];
        let upcoming = upcoming_birthdays(&birthdays, date(2025, 4, 1), u32::MAX);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, date(2025, 5, 15));
    }

    #[test]
    fn leap_day_birthday_reminded_on_feb_28() {
        let birthdays = vec![Birthday::new(1, "Leap", 2, 29)];
        let upcoming = upcoming_birthdays(&birthdays, date(2025, 2, 20), 14);
        assert_eq!(upcoming[0].date, date(2025, 2, 28));
    }

    #[test]
    fn upcoming_birthdays_same_day_keep_store_order() {
        let birthdays = vec![
            Birthday::new(1, "B", 6, 1),
            Birthday::new(2, "A", 6, 1),
        ];
        let upcoming = upcoming_birthdays(&birthdays, date(2025, 5, 30), 7);
        let names: Vec<_> = upcoming.iter().map(|u| u.birthday.member_name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn archived_birthdays_can_be_filtered_first() {
        let mut birthdays = vec![Birthday::new(1, "Old", 6, 1), Birthday::new(2, "New", 6, 2)];
        birthdays[0].status = BirthdayStatus::Archived;

        let active = filter_by_status(&birthdays, &Filter::Only(BirthdayStatus::Active));
        let upcoming = upcoming_birthdays(active, date(2025, 5, 30), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday.member_name, "New");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let apts = sample();
        let april = CalendarMonth::new(2025, 4).unwrap();
        assert_eq!(count_per_day_in_month(&apts, april), count_per_day_in_month(&apts, april));
        assert_eq!(
            ids(&entities_on_day(&apts, date(2025, 4, 5))),
            ids(&entities_on_day(&apts, date(2025, 4, 5)))
        );
    }
}
