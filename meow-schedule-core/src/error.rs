//! Error types for meow-schedule.

use thiserror::Error;

/// Errors that can occur in meow-schedule operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Form(#[from] FormError),

    #[error("Date out of range: the calendar cannot move that far from {0}")]
    DateOutOfRange(chrono::NaiveDate),
}

/// Input rejected by the form layer before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Notes are required")]
    MissingNotes,

    #[error("Tag name is required")]
    MissingTagName,
}

/// Result type alias for meow-schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
