//! The combined filter bar of the events page.

use std::fmt;

use tracing::warn;

use crate::aggregate::{filter_by_category, filter_by_status};
use crate::constants::ALL_FILTER;
use crate::entity::Filter;
use crate::records::{ChurchEvent, EventStatus, EventType};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Paid,
    Free,
    Unknown(String),
}

impl PriceFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            ALL_FILTER => PriceFilter::All,
            "paid" => PriceFilter::Paid,
            "free" => PriceFilter::Free,
            _ => PriceFilter::Unknown(raw.to_string()),
        }
    }

    pub fn matches(&self, event: &ChurchEvent) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Paid => event.is_paid,
            PriceFilter::Free => event.is_free(),
            PriceFilter::Unknown(_) => false,
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceFilter::All => write!(f, "{}", ALL_FILTER),
            PriceFilter::Paid => write!(f, "paid"),
            PriceFilter::Free => write!(f, "free"),
            PriceFilter::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// Keep events matching the price filter, in store order.
pub fn filter_by_price<'a, I>(events: I, price: &PriceFilter) -> Vec<&'a ChurchEvent>
where
    I: IntoIterator<Item = &'a ChurchEvent>,
{
    if let PriceFilter::Unknown(raw) = price {
        warn!(field = "price", value = %raw, "unknown filter value, no entities match");
        return Vec::new();
    }

    events.into_iter().filter(|e| price.matches(e)).collect()
}

/// Type, price and status filters applied together.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFilters {
    pub category: Filter<EventType>,
    pub price: PriceFilter,
    pub status: Filter<EventStatus>,
}

impl Default for EventFilters {
    /// Upcoming events of any type and price.
    fn default() -> Self {
        EventFilters {
            category: Filter::All,
            price: PriceFilter::All,
            status: Filter::Only(EventStatus::Upcoming),
        }
    }
}

impl EventFilters {
    pub fn parse(category: &str, price: &str, status: &str) -> Self {
        EventFilters {
            category: Filter::parse(category),
            price: PriceFilter::parse(price),
            status: Filter::parse(status),
        }
    }

    /// Events passing every filter, in store order.
    pub fn apply<'a, I>(&self, events: I) -> Vec<&'a ChurchEvent>
    where
        I: IntoIterator<Item = &'a ChurchEvent>,
    {
        let by_category = filter_by_category(events, &self.category);
        let by_price = filter_by_price(by_category, &self.price);
        filter_by_status(by_price, &self.status)
    }

    pub fn is_default(&self) -> bool {
        *self == EventFilters::default()
    }

}

impl fmt::Display for EventFilters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, price: {}, status: {}",
            self.category, self.price, self.status
        )
    }
}
