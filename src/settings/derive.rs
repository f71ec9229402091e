//! Post-merge derivation: side effects and gap filling that depend on the
//! fully merged configuration.
//!
//! Runs in a fixed order: re-apply logging, fill a missing session secret,
//! then advisory checks. Derivation never overwrites an operator-supplied
//! value.

use crate::error::SettingsError;
use crate::logging;
use crate::settings::defaults::EMBEDDED_DB_TYPE;
use crate::settings::Settings;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::warn;

/// Length of a generated session secret.
pub const SESSION_KEY_LEN: usize = 32;

pub fn finalize(settings: &mut Settings) -> Result<(), SettingsError> {
    // Re-run on every reload so a changed loglevel takes effect.
    logging::apply(&settings.logconfig, &settings.loglevel)?;

    if settings.session_key.as_deref().map_or(true, str::is_empty) {
        settings.session_key = Some(random_session_key());
        warn!(
            "No sessionKey is set; generated an ephemeral one. Pin a sessionKey in the \
             settings file so users can reconnect after a restart"
        );
    }

    if settings.db_type == EMBEDDED_DB_TYPE {
        warn!(
            "The embedded sled store is in use. This is fine for testing but not \
             recommended for production"
        );
    }

    Ok(())
}

fn random_session_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_KEY_LEN)
        .map(char::from)
        .collect()
}
