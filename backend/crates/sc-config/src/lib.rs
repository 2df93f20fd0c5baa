mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "SC_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sciencecraft";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

/// Local store used when `SC_DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite://sciencecraft.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
