use anyhow::Result;
use owo_colors::OwoColorize;
use parish_core::config::ParishConfig;

use crate::dates::host_timezone;

pub fn run(init: bool, timezone: Option<String>, birthday_window: Option<u32>) -> Result<()> {
    let config_path = ParishConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("{} {}", "Config already exists:".dimmed(), config_path.display());
        } else {
            ParishConfig::create_default_config(&config_path)?;
            println!("{} {}", "Created".green(), config_path.display());
        }
    }

    let mut config = ParishConfig::load_from(&config_path)?;

    if timezone.is_some() || birthday_window.is_some() {
        if let Some(name) = &timezone {
            config.set_timezone(name)?;
        }
        if let Some(days) = birthday_window {
            config.birthday_window_days = days;
        }
        config.save(&config_path)?;
        println!("{} {}", "Saved".green(), config_path.display());
    }

    let timezone = match config.timezone()? {
        Some(tz) => tz.name().to_string(),
        None => match host_timezone() {
            Some(tz) => format!("{} (system)", tz.name()),
            None => "UTC".to_string(),
        },
    };

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!(
        "  Data:       {}",
        config
            .data_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in seed data".to_string())
    );

    println!("{}", "Settings".bold());
    println!("  Timezone:   {}", timezone);
    println!("  Birthdays:  next {} days", config.birthday_window_days);

    Ok(())
}
