//! Quillpad settings doctor
//!
//! Command-line interface for resolving and inspecting the pad server's
//! runtime settings. A fatal resolution error (malformed settings file,
//! malformed typed environment value) terminates with a non-zero status.

use clap::Parser;
use quillpad_settings::cli::{Cli, Commands};
use quillpad_settings::logging::{self, LoggingConfig};
use quillpad_settings::settings;
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();

    // Bootstrap logging so warnings emitted during resolution are visible;
    // resolution re-applies the final logconfig and loglevel itself.
    if let Err(e) = logging::apply(&LoggingConfig::default(), "info") {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    let settings = match settings::resolve(&cli.root, cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Check => {
            println!(
                "Settings OK: {} listening on {}:{} ({} backend, abiword: {})",
                settings.title,
                settings.ip,
                settings.port,
                settings.db_type,
                settings.abiword_available(),
            );
        }
        Commands::Show => {
            let mut effective = match serde_json::to_value(&settings) {
                Ok(value) => value,
                Err(e) => {
                    error!("Failed to serialize settings: {e}");
                    process::exit(1);
                }
            };
            settings::redact(&mut effective);
            match serde_json::to_string_pretty(&effective) {
                Ok(rendered) => println!("{rendered}"),
                Err(e) => {
                    error!("Failed to render settings: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
