//! Concrete record types: appointments, church events and birthdays.

/// Declare a closed enumeration usable as a category or status tag.
///
/// `$unknown` names the `ParishError` variant returned by `FromStr` for an
/// out-of-range value.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $unknown:ident {
            $($variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::entity::Tag for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ParishError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::entity::Tag>::from_tag(s)
                    .ok_or_else(|| $crate::error::ParishError::$unknown(s.to_string()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", <Self as $crate::entity::Tag>::as_str(self))
            }
        }
    };
}

mod appointment;
mod birthday;
mod church_event;

pub use appointment::{Appointment, AppointmentStatus, AppointmentType};
pub use birthday::{Birthday, BirthdayCategory, BirthdayStatus};
pub use church_event::{ChurchEvent, EventStatus, EventType};
