use sc_core::FormErrors;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a submission did not go through
#[derive(Error, Debug)]
pub enum ClientError {
    /// Could not reach the server, or it did not answer in time
    #[error("Request failed: {source} {location}")]
    Transport {
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with an error body
    #[error("Server rejected request ({status} {code}): {message} {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// The server answered with something that is not JSON
    #[error("Unreadable response: {source} {location}")]
    Decode {
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// The form failed validation; nothing was sent
    #[error("Form has {count} invalid field(s) {location}", count = .errors.len())]
    InvalidForm {
        errors: FormErrors,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn invalid_form(errors: FormErrors) -> Self {
        ClientError::InvalidForm {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::Transport {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::Decode {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
