//! Restricted settings parser.
//!
//! The settings file is strict JSON extended with `//` line comments and
//! `/* */` block comments. Comments are stripped by a string-aware scanner
//! that keeps line positions intact, then the remainder is handed to
//! `serde_json`, so downstream code only ever sees plain scalars, arrays
//! and maps. Unquoted keys and trailing commas are not accepted.

use crate::error::SettingsError;
use crate::settings::SettingsMap;
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Settings files larger than this fail resolution outright.
const MAX_SETTINGS_FILE_SIZE: usize = 1_048_576;

/// Read the settings file.
///
/// A missing or unreadable file is not fatal: warn and let resolution
/// continue with defaults only. An implausibly large file is fatal.
pub fn read_settings(path: &Path) -> Result<Option<String>, SettingsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "No settings file found. Continuing using defaults and/or environment"
            );
            return Ok(None);
        }
    };

    if contents.len() > MAX_SETTINGS_FILE_SIZE {
        return Err(SettingsError::Parse {
            path: path.display().to_string(),
            message: format!(
                "file is {} bytes, exceeding the {} byte limit",
                contents.len(),
                MAX_SETTINGS_FILE_SIZE
            ),
        });
    }

    Ok(Some(contents))
}

/// Parse the file contents into a plain key-value map.
///
/// Any parse failure, including a non-object top level, is fatal: a broken
/// settings file must never run with a half-applied configuration.
pub fn parse_overrides(contents: &str, path: &Path) -> Result<SettingsMap, SettingsError> {
    let stripped = strip_comments(contents);

    let value: Value = serde_json::from_str(&stripped).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(SettingsError::Parse {
            path: path.display().to_string(),
            message: format!("expected a top-level object, got {}", value_kind(&other)),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Blank out comments, leaving everything else byte-for-byte in place.
///
/// Comments are replaced with spaces and newlines inside block comments are
/// kept, so line numbers in parse errors still point at the original file.
/// Comment markers inside string literals are left alone.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    out.push_str("  ");
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                        out.push(' ');
                    }
                }
                Some('*') => {
                    chars.next();
                    out.push_str("  ");
                    let mut prev = '\0';
                    while let Some(next) = chars.next() {
                        out.push(if next == '\n' { '\n' } else { ' ' });
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}
