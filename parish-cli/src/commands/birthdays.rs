use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::Filter;
use parish_core::aggregate::{UpcomingBirthday, filter_by_status, upcoming_birthdays};
use parish_core::records::BirthdayStatus;
use parish_core::store::EntityStore;

use crate::dates::parse_window_days;
use crate::render::{badge, format_date_label};
use crate::session::Session;

pub fn run(session: &Session, within: Option<&str>) -> Result<()> {
    let days = match within {
        Some(input) => parse_window_days(input)?,
        None => session.config.birthday_window_days,
    };

    let active = filter_by_status(
        session.fixtures.birthdays.list_all(),
        &Filter::Only(BirthdayStatus::Active),
    );
    let upcoming = upcoming_birthdays(active, session.today, days);

    if upcoming.is_empty() {
        println!("{}", format!("No birthdays in the next {} days", days).dimmed());
        return Ok(());
    }

    for entry in &upcoming {
        println!("{}", birthday_row(entry, session.today));
    }

    Ok(())
}

fn birthday_row(entry: &UpcomingBirthday<'_>, today: chrono::NaiveDate) -> String {
    let turning = entry
        .turning
        .map(|age| format!(" turns {}", age).dimmed().to_string())
        .unwrap_or_default();

    format!(
        "{:<11} {} {}{}",
        format_date_label(entry.date, today).bold(),
        entry.birthday.member_name,
        badge(entry.birthday.category),
        turning
    )
}
