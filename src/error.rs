//! Error types for the streaming catalog CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StreamError>;

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid date or time '{value}': expected {expected}")]
    InvalidDate { value: String, expected: &'static str },

    #[error("Invalid subscription '{value}': expected free, monthly or yearly")]
    InvalidSubscription { value: String },

    #[error("Invalid quality '{value}': expected 480p, 720p or 1080p")]
    InvalidQuality { value: String },

    #[error("Invalid device '{value}': expected mobile or desktop")]
    InvalidDevice { value: String },

    #[error("Genre must not be empty")]
    EmptyGenre,

    #[error("Could not determine a data directory; set {env_var} or pass --db")]
    MissingDataDir { env_var: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for StreamError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<rusqlite::Error>() {
            Ok(db_err) => return StreamError::Database(db_err),
            Err(err) => err,
        };
        match err.downcast::<csv::Error>() {
            Ok(csv_err) => StreamError::Csv(csv_err),
            Err(err) => StreamError::Storage {
                message: format!("{:#}", err),
            },
        }
    }
}
