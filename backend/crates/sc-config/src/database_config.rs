use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS,
    MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string for the project request store
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_DATABASE_URL),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.url.starts_with("sqlite:") {
            return Err(ConfigError::database(format!(
                "database.url must be a sqlite: connection string, got {}",
                self.redacted_url()
            )));
        }

        if self.max_connections < MIN_MAX_CONNECTIONS || self.max_connections > MAX_MAX_CONNECTIONS
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }

    /// Connection string with any `user:password@` credentials elided.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };

        match rest.split_once('@') {
            Some((_, host)) => format!("{}://***@{}", scheme, host),
            None => self.url.clone(),
        }
    }
}
