//! Logging System
//!
//! Structured logging implementation using the `tracing` crate, configured
//! from the resolved `logconfig` and `loglevel` settings. The first call to
//! [`apply`] installs the global subscriber; every later call swaps the
//! level filter in place so that a changed `loglevel` in a reloaded
//! settings file takes effect without a restart. Format and output are
//! fixed once the subscriber is installed and require a restart to change.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Logging configuration, the `logconfig` setting.
///
/// The level lives in the separate `loglevel` setting so that operators can
/// change verbosity without restating the appender configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format, terminal outputs only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stdout".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("var/quillpad.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
        }
    }
}

/// Handle for swapping the level filter after the subscriber is installed.
static RELOAD_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Apply logging configuration.
///
/// Runs once per settings resolution, including reloads. The first
/// successful call installs the global subscriber and remembers a reload
/// handle; subsequent calls only swap the level filter. If another
/// subscriber is already installed (as in test harnesses), the call is a
/// no-op apart from validation.
pub fn apply(config: &LoggingConfig, level: &str) -> Result<(), SettingsError> {
    if config.format != "json" && config.format != "text" {
        return Err(SettingsError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            config.format
        )));
    }
    if !matches!(config.output.as_str(), "stdout" | "stderr" | "file") {
        return Err(SettingsError::Logging(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', or 'file')",
            config.output
        )));
    }

    let filter = build_filter(level)?;

    if let Some(handle) = RELOAD_HANDLE.get() {
        return handle
            .reload(filter)
            .map_err(|e| SettingsError::Logging(e.to_string()));
    }

    let (filter_layer, handle) = reload::Layer::new(filter);
    let writer = resolve_writer(config)?;
    let registry = Registry::default().with(filter_layer);

    let installed = if config.format == "json" {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init()
            .is_ok()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && config.output != "file")
                    .with_writer(writer),
            )
            .try_init()
            .is_ok()
    };

    if installed {
        let _ = RELOAD_HANDLE.set(handle);
    }

    Ok(())
}

/// Build the level filter. `QUILLPAD_LOG` takes precedence over the
/// resolved `loglevel` setting and accepts full directive syntax.
fn build_filter(level: &str) -> Result<EnvFilter, SettingsError> {
    if let Ok(filter) = EnvFilter::try_from_env("QUILLPAD_LOG") {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| SettingsError::Logging(format!("Invalid log level '{level}': {e}")))
}

fn resolve_writer(config: &LoggingConfig) -> Result<BoxMakeWriter, SettingsError> {
    match config.output.as_str() {
        "stdout" => Ok(BoxMakeWriter::new(std::io::stdout)),
        "stderr" => Ok(BoxMakeWriter::new(std::io::stderr)),
        _ => {
            if let Some(parent) = config.file.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        SettingsError::Logging(format!("Failed to create log directory: {e}"))
                    })?;
                }
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file)
                .map_err(|e| {
                    SettingsError::Logging(format!(
                        "Failed to open log file {:?}: {e}",
                        config.file
                    ))
                })?;
            Ok(BoxMakeWriter::new(Arc::new(file)))
        }
    }
}
