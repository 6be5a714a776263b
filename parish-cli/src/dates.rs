use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use parish_core::CalendarMonth;
use parish_core::date_range::parse_date;

/// The host's IANA zone, if it can be detected and is known to chrono-tz.
pub fn host_timezone() -> Option<Tz> {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
}

/// Expand weekday and month abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a day given as `YYYY-MM-DD` or in natural language ("tomorrow", "sat").
///
/// Relative input is resolved against `today`, not the host clock, so it
/// follows the configured time zone.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(input.trim()) {
        return Ok(date);
    }

    // Noon never falls in a DST gap
    let now = today
        .and_hms_opt(12, 0, 0)
        .context("Could not build a reference time")?;

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse_relative_to(expanded, now)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// Parse `YYYY-MM`, defaulting to the month containing `today`.
pub fn parse_month(input: Option<&str>, today: NaiveDate) -> Result<CalendarMonth> {
    match input {
        Some(raw) => CalendarMonth::parse(raw.trim())
            .with_context(|| format!("Expected a month like 2025-04, got \"{}\"", raw)),
        None => Ok(CalendarMonth::containing(today)),
    }
}

/// Parse a look-ahead window like "2weeks" into whole days.
pub fn parse_window_days(input: &str) -> Result<u32> {
    let duration = humantime::parse_duration(input)
        .with_context(|| format!("Could not parse duration: \"{}\"", input))?;
    let days = duration.as_secs() / 86_400;

    u32::try_from(days).context("Duration too large")
}
