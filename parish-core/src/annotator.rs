//! Per-cell lookups for a calendar grid.
//!
//! Everything is recomputed on each call. Stores hold tens to hundreds of
//! records, so there is nothing worth caching.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::aggregate::{count_per_day_in_month, entities_on_day};
use crate::calendar_month::CalendarMonth;
use crate::entity::ScopedEntity;

pub struct CalendarAnnotator<'a, E> {
    entities: &'a [E],
}

impl<'a, E: ScopedEntity> CalendarAnnotator<'a, E> {
    pub fn new(entities: &'a [E]) -> Self {
        CalendarAnnotator { entities }
    }

    /// Whether the cell for `day` gets a marker.
    pub fn has_entities(&self, day: NaiveDate) -> bool {
        !self.entities_for_day(day).is_empty()
    }

    /// Entities shown in the hover card for `day`, in store order.
    pub fn entities_for_day(&self, day: NaiveDate) -> Vec<&'a E> {
        entities_on_day(self.entities, day)
    }

    /// Badge counts for every day of `month`.
    pub fn month_badges(&self, month: CalendarMonth) -> BTreeMap<u32, usize> {
        count_per_day_in_month(self.entities, month)
    }
}
