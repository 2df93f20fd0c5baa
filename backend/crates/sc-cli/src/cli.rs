use crate::commands::Commands;

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "sciencecraft")]
#[command(about = "Submit ScienceCraft project requests")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "SC_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
