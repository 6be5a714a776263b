//! Labels and display hints for closed enumerations.
//!
//! The aggregator never looks at these; they exist so every front-end shows
//! the same label and colour for the same tag.

use std::fmt;
use std::str::FromStr;

use crate::entity::{Filter, Tag};
use crate::error::ParishError;
use crate::records::{
    AppointmentStatus, AppointmentType, BirthdayCategory, BirthdayStatus, EventStatus, EventType,
};

/// How a tag should be emphasised. Front-ends map these onto colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayHint {
    Default,
    Secondary,
    Destructive,
    Outline,
    Confirmed,
    Pending,
    Muted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub label: &'static str,
    pub hint: DisplayHint,
}

const fn info(label: &'static str, hint: DisplayHint) -> TypeInfo {
    TypeInfo { label, hint }
}

/// Lookup from a tag to its label and hint.
pub trait Describe: Tag {
    fn info(&self) -> TypeInfo;
}

impl Describe for AppointmentType {
    fn info(&self) -> TypeInfo {
        match self {
            AppointmentType::Visit => info("Visits", DisplayHint::Default),
            AppointmentType::Prayer => info("Prayers", DisplayHint::Secondary),
            AppointmentType::Worship => info("Worship Services", DisplayHint::Destructive),
            AppointmentType::Social => info("Social Actions", DisplayHint::Outline),
        }
    }
}

impl Describe for AppointmentStatus {
    fn info(&self) -> TypeInfo {
        match self {
            AppointmentStatus::Confirmed => info("Confirmed", DisplayHint::Confirmed),
            AppointmentStatus::Pending => info("Pending", DisplayHint::Pending),
            AppointmentStatus::Cancelled => info("Cancelled", DisplayHint::Destructive),
        }
    }
}

impl Describe for EventType {
    fn info(&self) -> TypeInfo {
        match self {
            EventType::Member => info("Member Events", DisplayHint::Secondary),
            EventType::Community => info("Community Events", DisplayHint::Default),
        }
    }
}

impl Describe for EventStatus {
    fn info(&self) -> TypeInfo {
        match self {
            EventStatus::Upcoming => info("Upcoming", DisplayHint::Confirmed),
            EventStatus::Past => info("Past", DisplayHint::Muted),
            EventStatus::Cancelled => info("Cancelled", DisplayHint::Destructive),
        }
    }
}

impl Describe for BirthdayCategory {
    fn info(&self) -> TypeInfo {
        match self {
            BirthdayCategory::Member => info("Members", DisplayHint::Default),
            BirthdayCategory::Visitor => info("Visitors", DisplayHint::Outline),
        }
    }
}

impl Describe for BirthdayStatus {
    fn info(&self) -> TypeInfo {
        match self {
            BirthdayStatus::Active => info("Active", DisplayHint::Default),
            BirthdayStatus::Archived => info("Archived", DisplayHint::Muted),
        }
    }
}

/// Which store a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    #[default]
    Appointments,
    Events,
    Birthdays,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Appointments => "appointments",
            EntityKind::Events => "events",
            EntityKind::Birthdays => "birthdays",
        }
    }

    /// Singular or plural noun for `count` entities.
    pub fn noun(&self, count: usize) -> &'static str {
        match (self, count) {
            (EntityKind::Appointments, 1) => "appointment",
            (EntityKind::Events, 1) => "event",
            (EntityKind::Birthdays, 1) => "birthday",
            _ => self.as_str(),
        }
    }
}

impl FromStr for EntityKind {
    type Err = ParishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointments" | "appointment" => Ok(EntityKind::Appointments),
            "events" | "event" => Ok(EntityKind::Events),
            "birthdays" | "birthday" => Ok(EntityKind::Birthdays),
            _ => Err(ParishError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Message shown in place of an empty day listing.
pub fn empty_state_message<T: Describe>(kind: EntityKind, filter: &Filter<T>) -> String {
    match filter {
        Filter::Only(tag) => format!("No {} for this date.", tag.info().label.to_lowercase()),
        Filter::All | Filter::Unknown(_) => format!("No {} for this date.", kind),
    }
}
