use chrono::{Datelike, NaiveDate};

use crate::entity::{EntityDate, EntityId, ScopedEntity};

closed_enum! {
    BirthdayCategory, UnknownCategory {
        Member => "member",
        Visitor => "visitor",
    }
}

closed_enum! {
    BirthdayStatus, UnknownStatus {
        Active => "active",
        Archived => "archived",
    }
}

/// A member's birthday. The date is annual: it recurs every year.
#[derive(Debug, Clone, PartialEq)]
pub struct Birthday {
    pub id: EntityId,
    pub member_name: String,
    pub date: Option<EntityDate>,
    pub birth_year: Option<i32>,
    pub category: BirthdayCategory,
    pub status: BirthdayStatus,
}

impl Birthday {
    pub fn new(id: impl Into<EntityId>, member_name: impl Into<String>, month: u32, day: u32) -> Self {
        Birthday {
            id: id.into(),
            member_name: member_name.into(),
            date: Some(EntityDate::Annual { month, day }),
            birth_year: None,
            category: BirthdayCategory::Member,
            status: BirthdayStatus::Active,
        }
    }

    /// Age reached on `on`, if the birth year is known.
    pub fn age_on(&self, on: NaiveDate) -> Option<i32> {
        self.birth_year.map(|year| on.year() - year)
    }
}

impl ScopedEntity for Birthday {
    type Category = BirthdayCategory;
    type Status = BirthdayStatus;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn date(&self) -> Option<&EntityDate> {
        self.date.as_ref()
    }

    fn category(&self) -> BirthdayCategory {
        self.category
    }

    fn status(&self) -> BirthdayStatus {
        self.status
    }

    fn title(&self) -> &str {
        &self.member_name
    }
}
