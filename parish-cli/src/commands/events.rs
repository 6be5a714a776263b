use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::event_filters::EventFilters;
use parish_core::records::ChurchEvent;
use parish_core::store::EntityStore;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, category: &str, price: &str, status: &str) -> Result<()> {
    let filters = EventFilters::parse(category, price, status);
    let lines = event_lines(session.fixtures.events.list_all(), &filters);

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

/// Matching events grouped under a date heading, in store order.
/// Non-default filters are named on the first line.
fn event_lines(events: &[ChurchEvent], filters: &EventFilters) -> Vec<String> {
    let mut lines = Vec::new();
    if !filters.is_default() {
        lines.push(format!("Filtered by {}", filters).dimmed().to_string());
    }

    let matched = filters.apply(events);
    if matched.is_empty() {
        lines.push("No events match your current filters.".dimmed().to_string());
        return lines;
    }
    let mut current_date: Option<String> = None;

    for event in matched {
        let date_label = event
            .date
            .map(|d| match d.local_date() {
                Some(day) => day.format("%a %b %-d, %Y").to_string(),
                None => d.to_string(),
            })
            .unwrap_or_else(|| "No date".to_string());

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(date_label.bold().to_string());
            current_date = Some(date_label);
        }

        lines.push(format!("  {}", event.render()));
        if !event.description.is_empty() {
            lines.push(format!("    {}", event.description.dimmed()));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use parish_core::records::EventStatus;
    use parish_core::store::Fixtures;

    #[test]
    fn default_filters_hide_past_events() {
        let fixtures = Fixtures::seed().unwrap();
        let lines = event_lines(fixtures.events.list_all(), &EventFilters::default());
        let text = lines.join("\n");

        assert!(text.contains("Sunday Service"));
        for past in fixtures.events.list_all().iter().filter(|e| e.status == EventStatus::Past) {
            assert!(!text.contains(&past.name), "{} should be hidden", past.name);
        }
    }

    #[test]
    fn nothing_matching_shows_message() {
        let fixtures = Fixtures::seed().unwrap();
        let filters = EventFilters::parse("all", "paid", "cancelled");
        let lines = event_lines(fixtures.events.list_all(), &filters);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("type: all, price: paid, status: cancelled"));
        assert!(lines[1].contains("No events match your current filters."));
    }

    #[test]
    fn default_filters_have_no_header() {
        let fixtures = Fixtures::seed().unwrap();
        let lines = event_lines(fixtures.events.list_all(), &EventFilters::default());
        assert!(!lines[0].contains("Filtered by"));
    }
}
