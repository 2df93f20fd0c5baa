use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// Startup configuration failures. Each one aborts the server.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [server] setting: {message} {location}")]
    InvalidServer {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid [database] setting: {message} {location}")]
    InvalidDatabase {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot locate config directory: {message} {location}")]
    ConfigDir {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub(crate) fn server(message: impl Into<String>) -> Self {
        ConfigError::InvalidServer {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn database(message: impl Into<String>) -> Self {
        ConfigError::InvalidDatabase {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn config_dir(source: std::io::Error) -> Self {
        ConfigError::ConfigDir {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
