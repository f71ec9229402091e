//! CLI parse: clap types for the settings doctor. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quillpad settings doctor
#[derive(Parser)]
#[command(name = "quillpad-settings")]
#[command(about = "Resolve, validate and inspect Quillpad runtime settings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Installation root the settings file is resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Settings file path, relative to the root (default: settings.json)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full resolution pipeline and report the outcome
    Check,
    /// Print the effective configuration as pretty JSON, secrets redacted
    Show,
}
