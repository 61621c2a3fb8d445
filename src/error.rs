//! Error types for habitscope

use thiserror::Error;

/// Main error type for the habitscope library
#[derive(Error, Debug)]
pub enum Error {
    /// Date range is invalid (end precedes start, or a required date is missing)
    #[error("invalid date range: {0}")]
    InvalidRange(String),

    /// Habit identifier did not resolve
    #[error("habit not found: {0}")]
    HabitNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for habitscope
pub type Result<T> = std::result::Result<T, Error>;
