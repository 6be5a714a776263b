//! Entity stores: the read-only record collections the aggregator borrows.
//!
//! [`FixtureStore`] is the only implementation; it is filled from TOML or JSON
//! fixture files, or from the built-in seed data.

use std::path::Path;
use std::str::FromStr;

use chrono::Datelike;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::aggregate::entities_in_range;
use crate::date_range::DateRange;
use crate::entity::{EntityDate, EntityId, ScopedEntity, Tag};
use crate::error::{ParishError, ParishResult};
use crate::records::{Appointment, Birthday, BirthdayStatus, ChurchEvent};

static SEED_FIXTURES: &str = include_str!("../fixtures/seed.toml");

/// Read access to an ordered collection of entities.
pub trait EntityStore<E: ScopedEntity> {
    fn list_all(&self) -> &[E];

    fn list_by_date_range(&self, range: &DateRange) -> Vec<&E> {
        entities_in_range(self.list_all(), range)
    }
}

/// A store backed by an in-memory list, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureStore<E> {
    entities: Vec<E>,
}

impl<E> FixtureStore<E> {
    pub fn new(entities: Vec<E>) -> Self {
        FixtureStore { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<E> Default for FixtureStore<E> {
    fn default() -> Self {
        FixtureStore::new(Vec::new())
    }
}

impl<E> From<Vec<E>> for FixtureStore<E> {
    fn from(entities: Vec<E>) -> Self {
        FixtureStore::new(entities)
    }
}

impl<E: ScopedEntity> EntityStore<E> for FixtureStore<E> {
    fn list_all(&self) -> &[E] {
        &self.entities
    }
}

/// One store per record type.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub appointments: FixtureStore<Appointment>,
    pub events: FixtureStore<ChurchEvent>,
    pub birthdays: FixtureStore<Birthday>,
}

impl Fixtures {
    /// The built-in sample data.
    pub fn seed() -> ParishResult<Self> {
        Self::from_toml_str(SEED_FIXTURES, &Tz::UTC)
    }

    /// Load a fixture file. `.json` files are read as JSON, anything else as TOML.
    /// Timestamps with an offset are converted into `tz`.
    pub fn load(path: &Path, tz: &Tz) -> ParishResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let fixtures = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content, tz)?,
            _ => Self::from_toml_str(&content, tz)?,
        };

        debug!(
            path = %path.display(),
            appointments = fixtures.appointments.len(),
            events = fixtures.events.len(),
            birthdays = fixtures.birthdays.len(),
            "loaded fixtures"
        );

        Ok(fixtures)
    }

    pub fn from_toml_str(content: &str, tz: &Tz) -> ParishResult<Self> {
        let raw: RawFixtures =
            toml::from_str(content).map_err(|e| ParishError::Fixture(e.to_string()))?;
        raw.into_fixtures(tz)
    }

    pub fn from_json_str(content: &str, tz: &Tz) -> ParishResult<Self> {
        let raw: RawFixtures =
            serde_json::from_str(content).map_err(|e| ParishError::Fixture(e.to_string()))?;
        raw.into_fixtures(tz)
    }
}

// =============================================================================
// Fixture file format
// =============================================================================

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawFixtures {
    appointments: Vec<RawAppointment>,
    events: Vec<RawEvent>,
    birthdays: Vec<RawBirthday>,
}

#[derive(Deserialize)]
struct RawAppointment {
    id: EntityId,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    date: Option<String>,
    #[serde(default)]
    location: String,
    status: String,
    member_name: Option<String>,
    #[serde(default)]
    completed: bool,
}

#[derive(Deserialize)]
struct RawEvent {
    id: EntityId,
    name: String,
    #[serde(default)]
    description: String,
    date: Option<String>,
    time: Option<String>,
    #[serde(default)]
    location: String,
    #[serde(default)]
    confirmed_persons: u32,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    is_paid: bool,
    price: Option<f64>,
    status: String,
}

#[derive(Deserialize)]
struct RawBirthday {
    id: EntityId,
    member_name: String,
    date: Option<String>,
    birth_year: Option<i32>,
    category: String,
    status: Option<String>,
}

impl RawFixtures {
    fn into_fixtures(self, tz: &Tz) -> ParishResult<Fixtures> {
        let appointments = self
            .appointments
            .into_iter()
            .map(|raw| raw.into_appointment(tz))
            .collect::<ParishResult<Vec<_>>>()?;

        let events = self
            .events
            .into_iter()
            .map(|raw| raw.into_event(tz))
            .collect::<ParishResult<Vec<_>>>()?;

        let birthdays = self
            .birthdays
            .into_iter()
            .map(|raw| raw.into_birthday(tz))
            .collect::<ParishResult<Vec<_>>>()?;

        Ok(Fixtures {
            appointments: appointments.into(),
            events: events.into(),
            birthdays: birthdays.into(),
        })
    }
}

impl RawAppointment {
    fn into_appointment(self, tz: &Tz) -> ParishResult<Appointment> {
        let id = self.id;
        let (kind, status, date) = parse_fields(&self.kind, &self.status, self.date.as_deref(), tz)
            .inspect_err(|err| reject("appointment", &id, err))?;

        Ok(Appointment {
            id,
            title: self.title,
            kind,
            date,
            location: self.location,
            status,
            member_name: self.member_name,
            completed: self.completed,
        })
    }
}

impl RawEvent {
    fn into_event(self, tz: &Tz) -> ParishResult<ChurchEvent> {
        let id = self.id;
        let (kind, status, date) = parse_fields(&self.kind, &self.status, self.date.as_deref(), tz)
            .inspect_err(|err| reject("event", &id, err))?;

        Ok(ChurchEvent {
            id,
            name: self.name,
            description: self.description,
            date,
            time: self.time,
            location: self.location,
            confirmed_persons: self.confirmed_persons,
            kind,
            is_paid: self.is_paid,
            price: self.price,
            status,
        })
    }
}

impl RawBirthday {
    fn into_birthday(self, tz: &Tz) -> ParishResult<Birthday> {
        let id = self.id;
        let status = self.status.as_deref().unwrap_or(BirthdayStatus::Active.as_str());
        let (category, status, date) = parse_fields(&self.category, status, self.date.as_deref(), tz)
            .inspect_err(|err| reject("birthday", &id, err))?;

        // A full birth date is kept as an annual date plus the birth year
        let (date, birth_year) = match date {
            Some(date) if !date.is_annual() => {
                let (month, day) = date.month_day();
                let year = date.local_date().map(|d| d.year());
                (Some(EntityDate::Annual { month, day }), self.birth_year.or(year))
            }
            date => (date, self.birth_year),
        };

        Ok(Birthday {
            id,
            member_name: self.member_name,
            date,
            birth_year,
            category,
            status,
        })
    }
}

/// Parse the category, status and date shared by every record type.
fn parse_fields<C, S>(
    category: &str,
    status: &str,
    date: Option<&str>,
    tz: &Tz,
) -> ParishResult<(C, S, Option<EntityDate>)>
where
    C: FromStr<Err = ParishError>,
    S: FromStr<Err = ParishError>,
{
    Ok((category.parse()?, status.parse()?, parse_optional_date(date, tz)?))
}

fn parse_optional_date(raw: Option<&str>, tz: &Tz) -> ParishResult<Option<EntityDate>> {
    raw.map(|s| EntityDate::parse_in(s, tz)).transpose()
}

fn reject(record: &str, id: &EntityId, err: &ParishError) {
    warn!(record, %id, %err, "rejecting fixture record");
}
