//! Colored terminal rendering for parish records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use parish_core::display::{Describe, DisplayHint};
use parish_core::records::{Appointment, AppointmentStatus, Birthday, ChurchEvent};
use parish_core::{CalendarMonth, EntityDate};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to a display hint
pub fn paint(text: &str, hint: DisplayHint) -> String {
    match hint {
        DisplayHint::Default => text.blue().to_string(),
        DisplayHint::Secondary => text.magenta().to_string(),
        DisplayHint::Destructive => text.red().to_string(),
        DisplayHint::Outline => text.cyan().to_string(),
        DisplayHint::Confirmed => text.green().to_string(),
        DisplayHint::Pending => text.yellow().to_string(),
        DisplayHint::Muted => text.dimmed().to_string(),
    }
}

/// `[visit]`, colored like its label
pub fn badge<T: Describe>(tag: T) -> String {
    paint(&format!("[{}]", tag), tag.info().hint)
}

/// One line per tag: its label in its color
pub fn legend<T: Describe>() -> String {
    T::VARIANTS
        .iter()
        .map(|tag| {
            let info = tag.info();
            format!("{} {}", paint("■", info.hint), info.label)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format the time portion of a date (e.g. "15:00" or "all-day")
pub fn format_time(date: Option<&EntityDate>) -> String {
    match date {
        Some(EntityDate::DateTime(dt)) => format!("{:>7}", dt.format("%H:%M")),
        Some(EntityDate::Date(_)) => "all-day".to_string(),
        Some(EntityDate::Annual { .. }) => " yearly".to_string(),
        None => "no date".to_string(),
    }
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            format_time(self.date.as_ref()),
            self.title,
            badge(self.kind)
        );
        if self.status != AppointmentStatus::Confirmed {
            line.push_str(&format!(" {}", badge(self.status)));
        }
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", self.location.dimmed()));
        }
        line
    }
}

impl Render for ChurchEvent {
    fn render(&self) -> String {
        let time = match &self.time {
            Some(label) => label.clone(),
            None => format_time(self.date.as_ref()),
        };
        let price = match self.price {
            Some(price) if self.is_paid => format!("${:.2}", price),
            _ => "free".to_string(),
        };

        let mut line = format!(
            "{} {} {} {}",
            time,
            self.name,
            badge(self.kind),
            price.dimmed()
        );
        if self.confirmed_persons > 0 {
            line.push_str(&format!(" {}", format!("({} going)", self.confirmed_persons).dimmed()));
        }
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", self.location.dimmed()));
        }
        line
    }
}

impl Render for Birthday {
    fn render(&self) -> String {
        let date = self
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "no date".to_string());

        format!(
            "{:>7} {} {}",
            date.dimmed(),
            self.member_name,
            badge(self.category)
        )
    }
}

/// Weekday grid for `month`. Days with entries carry their count.
pub fn render_month(month: CalendarMonth, badges: &BTreeMap<u32, usize>, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("{:^34}", month.to_string()).bold().to_string(),
        "  Mo    Tu    We    Th    Fr    Sa    Su".dimmed().to_string(),
    ];

    let lead = month.first_day().weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec![" ".repeat(5); lead];

    for day in month.days() {
        let count = badges.get(&day.day()).copied().unwrap_or(0);
        let number = format!("{:>4}", day.day());
        let number = if day == today {
            number.reversed().to_string()
        } else if count > 0 {
            number.bold().to_string()
        } else {
            number
        };
        let marker = if count > 0 {
            format!("{}", count).green().to_string()
        } else {
            " ".to_string()
        };
        cells.push(format!("{}{}", number, marker));
    }

    for week in cells.chunks(7) {
        lines.push(week.join(" "));
    }

    lines.join("\n")
}
