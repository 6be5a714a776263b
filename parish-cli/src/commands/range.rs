use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::DateRange;
use parish_core::ScopedEntity;
use parish_core::aggregate::entities_in_range;
use parish_core::display::EntityKind;
use parish_core::store::EntityStore;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, from: Option<&str>, to: Option<&str>, kind: EntityKind) -> Result<()> {
    let range = DateRange::from_args(from, to, session.today)?;
    if range.is_empty() {
        anyhow::bail!("--from is after --to");
    }

    let fixtures = &session.fixtures;
    let lines = match kind {
        EntityKind::Appointments => range_lines(fixtures.appointments.list_all(), &range, kind),
        EntityKind::Events => range_lines(fixtures.events.list_all(), &range, kind),
        EntityKind::Birthdays => range_lines(fixtures.birthdays.list_all(), &range, kind),
    };

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn range_lines<E>(entities: &[E], range: &DateRange, kind: EntityKind) -> Vec<String>
where
    E: ScopedEntity + Render,
{
    let matched = entities_in_range(entities, range);
    if matched.is_empty() {
        return vec![format!("No {} found", kind).dimmed().to_string()];
    }

    matched
        .into_iter()
        .map(|entity| {
            let date = match entity.date() {
                Some(date) => date
                    .local_date()
                    .map(|day| day.format("%a %b %-d").to_string())
                    .unwrap_or_else(|| date.to_string()),
                None => String::new(),
            };
            format!("{:<11} {}", date.bold(), entity.render())
        })
        .collect()
}
