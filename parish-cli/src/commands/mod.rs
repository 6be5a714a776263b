pub mod birthdays;
pub mod config;
pub mod day;
pub mod events;
pub mod month;
pub mod pending;
pub mod range;
