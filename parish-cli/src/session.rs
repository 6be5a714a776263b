use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use parish_core::config::ParishConfig;
use parish_core::store::Fixtures;
use tracing::debug;

use crate::dates::host_timezone;

/// Everything a command needs: settings, records and today's date.
pub struct Session {
    pub config: ParishConfig,
    pub fixtures: Fixtures,
    pub today: NaiveDate,
}

impl Session {
    pub fn load(data: Option<PathBuf>) -> Result<Self> {
        let config = ParishConfig::load()?;
        let tz = config.timezone()?.or_else(host_timezone).unwrap_or(Tz::UTC);

        let fixtures = match data.or_else(|| config.data_path()) {
            Some(path) => Fixtures::load(&path, &tz)
                .with_context(|| format!("Could not load records from {}", path.display()))?,
            None => {
                debug!("no data file configured, using seed data");
                Fixtures::seed()?
            }
        };

        let today = Utc::now().with_timezone(&tz).date_naive();

        Ok(Session {
            config,
            fixtures,
            today,
        })
    }
}
