use chrono::{NaiveDate, NaiveDateTime};
use parish_core::aggregate::{count_per_day_in_month, entities_on_day, filter_by_category};
use parish_core::matcher::{is_in_month, is_on_day, is_recurring_on_day};
use parish_core::records::{Appointment, AppointmentStatus, AppointmentType, Birthday};
use parish_core::store::{EntityStore, Fixtures};
use parish_core::{CalendarMonth, EntityDate, Filter};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn two_on_april_5() -> Vec<Appointment> {
    vec![
        Appointment::new(
            1,
            "Home Visit",
            AppointmentType::Visit,
            EntityDate::DateTime(at(2025, 4, 5, 10, 0)),
            AppointmentStatus::Confirmed,
        ),
        Appointment::new(
            2,
            "Prayer Meeting",
            AppointmentType::Prayer,
            EntityDate::DateTime(at(2025, 4, 5, 14, 30)),
            AppointmentStatus::Pending,
        ),
    ]
}

#[test]
fn same_day_entities_listed_in_store_order() {
    let apts = two_on_april_5();

    let on_day = entities_on_day(&apts, date(2025, 4, 5));
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0].id, apts[0].id);
    assert_eq!(on_day[1].id, apts[1].id);

    assert!(entities_on_day(&apts, date(2025, 4, 6)).is_empty());
}

#[test]
fn prayer_filter_returns_second_entity() {
    let apts = two_on_april_5();
    let prayers = filter_by_category(&apts, &Filter::parse("prayer"));
    assert_eq!(prayers, vec![&apts[1]]);
}

#[test]
fn april_badges() {
    let mut apts = two_on_april_5();
    apts.push(Appointment::new(
        3,
        "Food Bank",
        AppointmentType::Social,
        EntityDate::DateTime(at(2025, 4, 8, 9, 0)),
        AppointmentStatus::Confirmed,
    ));

    let april = CalendarMonth::new(2025, 4).unwrap();
    let counts = count_per_day_in_month(&apts, april);

    assert_eq!(counts.len(), 30);
    for (day, count) in &counts {
        let expected = match day {
            5 => 2,
            8 => 1,
            _ => 0,
        };
        assert_eq!(*count, expected, "day {}", day);
    }
}

#[test]
fn birthday_recurs_regardless_of_year() {
    let birthday = Birthday::new(1, "Michael Smith", 5, 15);
    assert!(is_recurring_on_day(&birthday, date(2030, 5, 15)).unwrap());
    assert!(!is_recurring_on_day(&birthday, date(2025, 5, 16)).unwrap());
}

#[test]
fn counts_sum_to_entities_in_month() {
    let fixtures = Fixtures::seed().unwrap();

    for (year, month) in [(2025, 2), (2024, 2), (2025, 4), (2025, 5), (2025, 6), (2025, 12)] {
        let month = CalendarMonth::new(year, month).unwrap();

        let appointments = fixtures.appointments.list_all();
        let counts = count_per_day_in_month(appointments, month);
        assert_eq!(counts.len() as u32, month.days_in_month());
        let in_month = appointments
            .iter()
            .filter(|a| is_in_month(*a, month).unwrap())
            .count();
        assert_eq!(counts.values().sum::<usize>(), in_month);

        let birthdays = fixtures.birthdays.list_all();
        let counts = count_per_day_in_month(birthdays, month);
        let in_month = birthdays
            .iter()
            .filter(|b| is_in_month(*b, month).unwrap())
            .count();
        assert_eq!(counts.values().sum::<usize>(), in_month);
    }
}

#[test]
fn on_day_agrees_with_field_comparison() {
    let fixtures = Fixtures::seed().unwrap();
    let april = CalendarMonth::new(2025, 4).unwrap();

    for day in april.days() {
        for apt in fixtures.appointments.list_all() {
            let expected = apt.date.and_then(|d| d.local_date()) == Some(day);
            assert_eq!(is_on_day(apt, day).unwrap(), expected);
        }
    }
}

#[test]
fn leap_day_birthday_counted_only_in_leap_years() {
    let fixtures = Fixtures::seed().unwrap();
    let birthdays = fixtures.birthdays.list_all();

    let common = count_per_day_in_month(birthdays, CalendarMonth::new(2025, 2).unwrap());
    assert_eq!(common[&28], 0);
    assert_eq!(common.values().sum::<usize>(), 0);

    let leap = count_per_day_in_month(birthdays, CalendarMonth::new(2024, 2).unwrap());
    assert_eq!(leap[&28], 0);
    assert_eq!(leap[&29], 1);
}
