use std::collections::BTreeMap;

use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::CalendarMonth;
use parish_core::annotator::CalendarAnnotator;
use parish_core::display::EntityKind;
use parish_core::records::{AppointmentType, BirthdayCategory, EventType};
use parish_core::store::EntityStore;

use crate::render::{legend, render_month};
use crate::session::Session;

pub fn run(session: &Session, month: CalendarMonth, kind: EntityKind) -> Result<()> {
    let fixtures = &session.fixtures;
    let (badges, legend) = match kind {
        EntityKind::Appointments => (
            CalendarAnnotator::new(fixtures.appointments.list_all()).month_badges(month),
            legend::<AppointmentType>(),
        ),
        EntityKind::Events => (
            CalendarAnnotator::new(fixtures.events.list_all()).month_badges(month),
            legend::<EventType>(),
        ),
        EntityKind::Birthdays => (
            CalendarAnnotator::new(fixtures.birthdays.list_all()).month_badges(month),
            legend::<BirthdayCategory>(),
        ),
    };

    println!("{}", render_month(month, &badges, session.today));
    println!();
    println!("{}", summary(&badges, kind, month).dimmed());
    println!("{}", legend);

    Ok(())
}

fn summary(badges: &BTreeMap<u32, usize>, kind: EntityKind, month: CalendarMonth) -> String {
    let total: usize = badges.values().sum();
    let busy = badges.values().filter(|count| **count > 0).count();

    format!(
        "{} {} in {} across {} {}",
        total,
        kind.noun(total),
        month,
        busy,
        if busy == 1 { "day" } else { "days" }
    )
}
