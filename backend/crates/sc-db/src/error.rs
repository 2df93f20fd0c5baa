use sc_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection to {url} failed: {message} {location}")]
    Connection {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid project request: {source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Invalid stored record: {message} {location}")]
    InvalidRecord {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
