//! Error types for agenda.

use thiserror::Error;

use crate::event::Field;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Missing {0}. Date, time and description are all required")]
    MissingField(Field),

    #[error("Invalid date '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Use HH:MM (24h)")]
    InvalidTime(String),

    #[error("Could not load events: {0}")]
    Load(String),

    #[error("Could not save events: {0}")]
    Persist(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AgendaError {
    fn from(err: serde_json::Error) -> Self {
        AgendaError::Serialization(err.to_string())
    }
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
