//! Error types for parish.

use thiserror::Error;

use crate::entity::EntityId;

/// Errors that can occur in parish operations.
#[derive(Error, Debug)]
pub enum ParishError {
    #[error("Entity {0} has no date")]
    InvalidEntity(EntityId),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown entity kind '{0}'. Expected appointments, events or birthdays")]
    UnknownKind(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for parish operations.
pub type ParishResult<T> = Result<T, ParishError>;
