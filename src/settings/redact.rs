//! Secret redaction for displayed configuration.

use serde_json::Value;

/// Key fragments that mark a value as secret-bearing.
const SECRET_KEYS: &[&str] = &["password", "secret", "key", "token", "credential"];

/// Replace secret-bearing scalar values with a placeholder, recursively.
/// Container values are descended into so per-user passwords inside the
/// credential map are caught too.
pub fn redact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (field, val) in map.iter_mut() {
                let lower = field.to_ascii_lowercase();
                let secret = SECRET_KEYS.iter().any(|s| lower.contains(s));
                if secret && !val.is_object() && !val.is_array() && !val.is_null() {
                    *val = Value::String("[REDACTED]".to_string());
                } else {
                    redact(val);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                redact(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_key_is_redacted() {
        let mut value = json!({"sessionKey": "s3cret", "title": "Quillpad"});
        redact(&mut value);
        assert_eq!(value["sessionKey"], json!("[REDACTED]"));
        assert_eq!(value["title"], json!("Quillpad"));
    }

    #[test]
    fn test_nested_passwords_are_redacted() {
        let mut value = json!({
            "dbSettings": {"password": "hunter2", "host": "db.internal"},
            "users": {"admin": {"password": "hunter2", "is_admin": true}},
        });
        redact(&mut value);
        assert_eq!(value["dbSettings"]["password"], json!("[REDACTED]"));
        assert_eq!(value["dbSettings"]["host"], json!("db.internal"));
        assert_eq!(value["users"]["admin"]["password"], json!("[REDACTED]"));
        assert_eq!(value["users"]["admin"]["is_admin"], json!(true));
    }

    #[test]
    fn test_null_values_stay_null() {
        let mut value = json!({"sessionKey": null});
        redact(&mut value);
        assert!(value["sessionKey"].is_null());
    }
}
