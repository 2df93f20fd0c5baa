//! sc-cli library
//!
//! Exports the HTTP client and argument types for the `sciencecraft` binary
//! and for tests.

pub mod cli;
pub(crate) mod client;
pub mod commands;


pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::{Commands, FormArgs};
