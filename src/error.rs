//! Error types for the team roster store

use rusqlite::ErrorCode;
use std::fmt;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, RosterError>;

/// A single failed field rule, carrying the message exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Validation failed: {}", join_messages(.errors))]
    Validation { errors: Vec<FieldError> },

    #[error("Constraint violation: {message}")]
    Constraint { message: String },

    #[error("Migration {migration} failed: {message}")]
    Migration { migration: String, message: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{entity} has no identifier; it must be saved before it can be updated")]
    MissingId { entity: &'static str },

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RosterError {
    /// Messages of every failed field rule, empty for other variants.
    pub fn validation_messages(&self) -> Vec<&str> {
        match self {
            RosterError::Validation { errors } => {
                errors.iter().map(|e| e.message.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn is_constraint(&self) -> bool {
        matches!(self, RosterError::Constraint { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, RosterError::Validation { .. })
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<rusqlite::Error> for RosterError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == ErrorCode::ConstraintViolation =>
            {
                RosterError::Constraint {
                    message: message.unwrap_or_else(|| code.to_string()),
                }
            }
            other => RosterError::Database(other),
        }
    }
}
