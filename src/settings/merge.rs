//! Merge & Validate: apply parsed overrides onto the Defaults Table.
//!
//! Two independent checks run per key. The naming convention check is
//! advisory and never blocks a merge. The membership check gates: a key is
//! accepted when it exists in the Defaults Table (case-sensitive) or when
//! it carries the reserved plugin prefix; anything else is dropped with a
//! warning. Accepted values replace the default wholesale, nested
//! structures included.

use crate::settings::SettingsMap;
use tracing::warn;

/// Keys under this prefix belong to optional plugins and bypass the
/// membership check.
pub const PLUGIN_PREFIX: &str = "qp_";

pub fn apply_overrides(table: &mut SettingsMap, overrides: SettingsMap) {
    for (key, value) in overrides {
        if !key
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
        {
            warn!(key = %key, "Settings should start with a lowercase character");
        }

        if table.contains_key(&key) || key.starts_with(PLUGIN_PREFIX) {
            table.insert(key, value);
        } else {
            warn!(
                key = %key,
                "Unknown setting. This setting doesn't exist or it was removed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> SettingsMap {
        overrides(json!({
            "title": "Quillpad",
            "port": 9001,
            "dbSettings": { "filename": "var/quillpad.sled" },
        }))
    }

    fn overrides(doc: serde_json::Value) -> SettingsMap {
        doc.as_object().cloned().unwrap()
    }

    #[test]
    fn test_known_key_overwrites_default() {
        let mut table = table();
        apply_overrides(&mut table, overrides(json!({"port": 8042})));
        assert_eq!(table["port"], json!(8042));
    }

    #[test]
    fn test_unknown_key_is_discarded() {
        let mut table = table();
        apply_overrides(&mut table, overrides(json!({"colour": "mauve"})));
        assert!(!table.contains_key("colour"));
    }

    #[test]
    fn test_plugin_prefixed_key_is_accepted() {
        let mut table = table();
        apply_overrides(&mut table, overrides(json!({"qp_chat": {"enabled": true}})));
        assert_eq!(table["qp_chat"], json!({"enabled": true}));
    }

    #[test]
    fn test_naming_check_does_not_block_known_keys() {
        // A convention-violating key that still passes membership (as a
        // legacy key registered by the host would) merges normally.
        let mut table = table();
        table.insert("Legacy_Toggle".to_string(), json!(false));

        apply_overrides(&mut table, overrides(json!({"Legacy_Toggle": true})));
        assert_eq!(table["Legacy_Toggle"], json!(true));
    }

    #[test]
    fn test_uppercase_unknown_key_is_still_discarded() {
        let mut table = table();
        apply_overrides(&mut table, overrides(json!({"Colour": "mauve"})));
        assert!(!table.contains_key("Colour"));
    }

    #[test]
    fn test_nested_structure_replaces_wholesale() {
        let mut table = table();
        apply_overrides(
            &mut table,
            overrides(json!({"dbSettings": {"host": "db.internal"}})),
        );
        assert_eq!(table["dbSettings"], json!({"host": "db.internal"}));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let mut table = table();
        apply_overrides(&mut table, overrides(json!({"Port": 1})));
        assert_eq!(table["port"], json!(9001));
        assert!(!table.contains_key("Port"));
    }
}
