//! Error types for the Quillpad settings subsystem.
//!
//! Only unrecoverable conditions are errors. Recoverable conditions (a
//! missing settings file, an unknown key, a naming-convention violation)
//! are surfaced as warning-level log output and never block resolution.

use thiserror::Error;

/// Fatal settings-resolution errors.
///
/// The library never terminates the process; callers decide whether a
/// variant aborts startup. The `quillpad-settings` binary logs the error
/// and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be parsed.
    #[error("There was an error processing the settings file at {path}: {message}")]
    Parse {
        /// Path to the settings file that failed to parse.
        path: String,
        /// Underlying parse failure description.
        message: String,
    },

    /// The merged configuration does not match the declared schema.
    #[error("Merged settings do not match the declared schema: {0}")]
    Schema(String),

    /// `DATABASE_URL` is present but cannot be decomposed.
    #[error("DATABASE_URL is set but malformed: {0}")]
    DatabaseUrl(String),

    /// A typed environment variable holds a value that does not parse.
    #[error("Environment variable '{var}': {message}")]
    Env {
        /// Name of the environment variable.
        var: String,
        /// Parse failure description.
        message: String,
    },

    /// The logging collaborator rejected the configuration.
    #[error("Logging configuration error: {0}")]
    Logging(String),
}
