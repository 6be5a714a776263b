use crate::entity::{EntityDate, EntityId, ScopedEntity};

closed_enum! {
    /// Who an event is aimed at.
    EventType, UnknownCategory {
        Member => "member",
        Community => "community",
    }
}

closed_enum! {
    EventStatus, UnknownStatus {
        Upcoming => "upcoming",
        Past => "past",
        Cancelled => "cancelled",
    }
}

/// A church event (service, retreat, outreach, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct ChurchEvent {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub date: Option<EntityDate>,
    /// Free-text time label, e.g. "10:00 AM - 12:00 PM" or "All Day"
    pub time: Option<String>,
    pub location: String,
    pub confirmed_persons: u32,
    pub kind: EventType,
    pub is_paid: bool,
    pub price: Option<f64>,
    pub status: EventStatus,
}

impl ChurchEvent {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        kind: EventType,
        date: EntityDate,
        status: EventStatus,
    ) -> Self {
        ChurchEvent {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            date: Some(date),
            time: None,
            location: String::new(),
            confirmed_persons: 0,
            kind,
            is_paid: false,
            price: None,
            status,
        }
    }

    pub fn is_free(&self) -> bool {
        !self.is_paid
    }
}

impl ScopedEntity for ChurchEvent {
    type Category = EventType;
    type Status = EventStatus;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn date(&self) -> Option<&EntityDate> {
        self.date.as_ref()
    }

    fn category(&self) -> EventType {
        self.kind
    }

    fn status(&self) -> EventStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&str> {
        Some(self.location.as_str()).filter(|l| !l.is_empty())
    }
}
