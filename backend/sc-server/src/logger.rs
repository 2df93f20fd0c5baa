use crate::error::{Result as ServerErrorResult, ServerError};

use sc_config::LogLevel;

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Install the global logger.
///
/// Output goes to `log_file` when set, otherwise stdout. `colored` only
/// applies to stdout.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref log_path) => {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
                    message: format!("Failed to create log directory {}: {}", parent.display(), e),
                })?;
            }

            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

            Dispatch::new().format(plain_line).chain(file)
        }
        None if colored => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} - {}] {} [{}]",
                        humantime::format_rfc3339_millis(SystemTime::now()),
                        colors.color(record.level()),
                        message,
                        record.target(),
                    ))
                })
                .chain(std::io::stdout())
        }
        // systemd / docker capture
        None => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    Ok(())
}

fn plain_line(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "[{} - {}] {} [{}]",
        humantime::format_rfc3339_millis(SystemTime::now()),
        record.level(),
        message,
        record.target(),
    ))
}
