//! Calendar aggregation for church appointments, events and birthdays.
//!
//! This crate answers "what falls on day D / in month M / matches filter F"
//! over caller-owned record lists. It is stateless: every query borrows its
//! input and returns references into it.
//! - `entity` and `records` define the date-scoped records
//! - `matcher` decides whether a record is on a day, in a month or in a range
//! - `aggregate` filters and counts, `annotator` serves calendar grids
//! - `store` and `config` load fixture data and settings

pub mod aggregate;
pub mod annotator;
pub mod calendar_month;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod display;
pub mod entity;
pub mod error;
pub mod event_filters;
pub mod matcher;
pub mod records;
pub mod store;

pub use calendar_month::CalendarMonth;
pub use date_range::DateRange;
pub use entity::{EntityDate, EntityId, Filter, ScopedEntity, Tag};
pub use error::{ParishError, ParishResult};
