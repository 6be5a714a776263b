use crate::entity::{EntityDate, EntityId, ScopedEntity};

closed_enum! {
    /// What an appointment is for.
    AppointmentType, UnknownCategory {
        Visit => "visit",
        Prayer => "prayer",
        Worship => "worship",
        Social => "social",
    }
}

closed_enum! {
    AppointmentStatus, UnknownStatus {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
    }
}

/// A pastoral appointment (home visit, prayer meeting, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: EntityId,
    pub title: String,
    pub kind: AppointmentType,
    pub date: Option<EntityDate>,
    pub location: String,
    pub status: AppointmentStatus,
    /// Who asked for the appointment
    pub member_name: Option<String>,
    pub completed: bool,
}

impl Appointment {
    pub fn new(
        id: impl Into<EntityId>,
        title: impl Into<String>,
        kind: AppointmentType,
        date: EntityDate,
        status: AppointmentStatus,
    ) -> Self {
        Appointment {
            id: id.into(),
            title: title.into(),
            kind,
            date: Some(date),
            location: String::new(),
            status,
            member_name: None,
            completed: false,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Name shown in the "requested by" column.
    pub fn requested_by(&self) -> &str {
        self.member_name.as_deref().unwrap_or("Unknown")
    }
}

impl ScopedEntity for Appointment {
    type Category = AppointmentType;
    type Status = AppointmentStatus;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn date(&self) -> Option<&EntityDate> {
        self.date.as_ref()
    }

    fn category(&self) -> AppointmentType {
        self.kind
    }

    fn status(&self) -> AppointmentStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn location(&self) -> Option<&str> {
        Some(self.location.as_str()).filter(|l| !l.is_empty())
    }
}
