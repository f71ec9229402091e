//! Quillpad: Runtime Settings Resolution
//!
//! Resolves the pad server's configuration from compiled-in defaults, an
//! optional `settings.json` file (JSON with comments), and environment
//! variables, then publishes it as process-wide state with a whole-pipeline
//! reload capability.

pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;
