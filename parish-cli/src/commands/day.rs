use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use parish_core::aggregate::{entities_on_day, filter_by_category, filter_by_status, search};
use parish_core::display::{Describe, EntityKind, empty_state_message};
use parish_core::store::EntityStore;
use parish_core::{Filter, ScopedEntity};

use crate::render::Render;
use crate::session::Session;

pub fn run(
    session: &Session,
    day: NaiveDate,
    kind: EntityKind,
    category: &str,
    status: &str,
    query: Option<&str>,
) -> Result<()> {
    println!("{}", day.format("%A, %B %-d, %Y").to_string().bold());

    let fixtures = &session.fixtures;
    let query = query.unwrap_or_default();
    let lines = match kind {
        EntityKind::Appointments => {
            day_lines(fixtures.appointments.list_all(), kind, day, category, status, query)
        }
        EntityKind::Events => day_lines(fixtures.events.list_all(), kind, day, category, status, query),
        EntityKind::Birthdays => {
            day_lines(fixtures.birthdays.list_all(), kind, day, category, status, query)
        }
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// The listing for one day: a count line, then a row per entity or the empty state.
fn day_lines<E>(
    entities: &[E],
    kind: EntityKind,
    day: NaiveDate,
    category: &str,
    status: &str,
    query: &str,
) -> Vec<String>
where
    E: ScopedEntity + Render,
    E::Category: Describe,
{
    let category = Filter::parse(category);
    let on_day = entities_on_day(entities, day);
    let matched = filter_by_category(on_day, &category);
    let matched = filter_by_status(matched, &Filter::parse(status));
    let matched = search(matched, query);

    let mut lines = vec![format!("{} {}", matched.len(), kind.noun(matched.len()))
        .dimmed()
        .to_string()];

    if matched.is_empty() {
        lines.push(format!("  {}", empty_state_message(kind, &category).dimmed()));
    } else {
        lines.extend(matched.into_iter().map(|e| format!("  {}", e.render())));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use parish_core::store::Fixtures;

    fn april(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn lists_seed_appointments_for_a_day() {
        let fixtures = Fixtures::seed().unwrap();
        let apts = fixtures.appointments.list_all();

        let lines = day_lines(apts, EntityKind::Appointments, april(5), "all", "all", "");
        assert_eq!(lines.len(), 1 + entities_on_day(apts, april(5)).len());
    }

    #[test]
    fn empty_day_names_the_selected_category() {
        let fixtures = Fixtures::seed().unwrap();
        let apts = fixtures.appointments.list_all();

        let lines = day_lines(apts, EntityKind::Appointments, april(30), "worship", "all", "");
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("No worship services for this date."));
    }

    #[test]
    fn unknown_category_shows_generic_empty_state() {
        let fixtures = Fixtures::seed().unwrap();
        let apts = fixtures.appointments.list_all();

        let lines = day_lines(apts, EntityKind::Appointments, april(5), "gala", "all", "");
        assert!(lines[1].contains("No appointments for this date."));
    }
}
