//! sciencecraft - ScienceCraft project request CLI
//!
//! # Examples
//!
//! ```bash
//! # Check a request without sending it
//! sciencecraft validate --name Asha --email asha@example.com ...
//!
//! # Send it
//! sciencecraft submit --name Asha --email asha@example.com \
//!     --phone 9876543210 --project-name "Solar Tracker" \
//!     --category Electronics --deadline 2025-03-01 \
//!     --description "Arduino-based dual-axis solar tracker"
//! ```

use sc_cli::{Cli, Client, ClientError, Commands};
use sc_core::{KNOWN_CATEGORIES, ProjectRequestForm, validate_form};

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;
    let timeout = cli.timeout();

    match cli.command {
        Commands::Categories => print_json(&KNOWN_CATEGORIES, pretty),

        Commands::Validate(args) => {
            let errors = validate_form(&ProjectRequestForm::from(args));
            let code = print_json(&errors, pretty);
            if errors.is_empty() { code } else { ExitCode::FAILURE }
        }

        Commands::Submit(args) => {
            let client = match Client::new(&cli.server, timeout) {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };

            match client
                .submit_project_request(&ProjectRequestForm::from(args))
                .await
            {
                Ok(value) => print_json(&value, pretty),
                Err(ClientError::InvalidForm { errors, .. }) => {
                    eprintln!("The form has errors; nothing was sent.");
                    print_json(&errors, pretty);
                    ExitCode::FAILURE
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
