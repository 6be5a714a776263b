use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::aggregate::pending_only;
use parish_core::display::Describe;
use parish_core::records::Appointment;
use parish_core::store::EntityStore;

use crate::render::paint;
use crate::session::Session;

pub fn run(session: &Session) -> Result<()> {
    let pending = pending_only(session.fixtures.appointments.list_all());

    if pending.is_empty() {
        println!("{}", "No appointments awaiting approval".dimmed());
        return Ok(());
    }

    println!("{}", "Pending approval".bold());
    for apt in pending {
        println!("  {}", pending_row(apt));
    }

    Ok(())
}

/// Date, time, title, type, who asked and where.
fn pending_row(apt: &Appointment) -> String {
    let (date, time) = match apt.date.as_ref().and_then(|d| d.local_date().zip(d.time())) {
        Some((date, time)) => (
            date.format("%b %-d, %Y").to_string(),
            time.format("%-I:%M %p").to_string(),
        ),
        None => ("no date".to_string(), String::new()),
    };
    let info = apt.kind.info();

    format!(
        "{:<13} {:>8}  {}  {}  {} {}",
        date,
        time,
        apt.title,
        paint(info.label, info.hint),
        format!("by {}", apt.requested_by()).dimmed(),
        apt.location.dimmed()
    )
}
