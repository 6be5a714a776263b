//! Global parish configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ParishError, ParishResult};

fn default_birthday_window_days() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW_DAYS
}

fn is_default_birthday_window_days(days: &u32) -> bool {
    *days == DEFAULT_BIRTHDAY_WINDOW_DAYS
}

/// Configuration at ~/.config/parish/config.toml
///
/// Every key can be overridden with a `PARISH_` environment variable,
/// e.g. `PARISH_TIMEZONE=Europe/Paris`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParishConfig {
    /// Fixture file to read instead of the built-in seed data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// IANA zone that offset timestamps are converted into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(
        default = "default_birthday_window_days",
        skip_serializing_if = "is_default_birthday_window_days"
    )]
    pub birthday_window_days: u32,
}

impl Default for ParishConfig {
    fn default() -> Self {
        ParishConfig {
            data_file: None,
            timezone: None,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }
}

impl ParishConfig {
    pub fn config_path() -> ParishResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ParishError::Config("Could not determine config directory".into()))?
            .join("parish");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> ParishResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> ParishResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("PARISH"))
            .build()
            .map_err(|e| ParishError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ParishError::Config(e.to_string()))
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(|path| {
            let full_path_str = shellexpand::tilde(&path.to_string_lossy()).into_owned();
            PathBuf::from(full_path_str)
        })
    }

    /// The configured zone, if any.
    pub fn timezone(&self) -> ParishResult<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| ParishError::Config(format!("Unknown timezone '{}'", name)))
            })
            .transpose()
    }

    /// Set the time zone, rejecting names chrono-tz doesn't know.
    pub fn set_timezone(&mut self, name: &str) -> ParishResult<()> {
        let previous = self.timezone.replace(name.to_string());
        if let Err(err) = self.timezone() {
            self.timezone = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Save the current config to `path`.
    pub fn save(&self, path: &Path) -> ParishResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ParishError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ParishError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, content)
            .map_err(|e| ParishError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ParishResult<()> {
        let contents = format!(
            "\
# parish configuration

# Fixture file with appointments, events and birthdays (TOML or JSON).
# Uses the built-in sample data when unset.
# data_file = \"~/parish/records.toml\"

# Time zone that timestamps with an offset are converted into.
# Defaults to the system time zone.
# timezone = \"America/New_York\"

# How far ahead `parish birthdays` looks:
# birthday_window_days = {}
",
            DEFAULT_BIRTHDAY_WINDOW_DAYS
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ParishError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ParishError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
