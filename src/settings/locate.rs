//! File Locator: where the settings file lives.

use std::path::{Path, PathBuf};

/// Default settings filename, relative to the installation root.
pub const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings-file path. Pure function of its inputs; no I/O.
pub fn settings_path(root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(p) => root.join(p),
        None => root.join(SETTINGS_FILENAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filename() {
        let path = settings_path(Path::new("/opt/quillpad"), None);
        assert_eq!(path, PathBuf::from("/opt/quillpad/settings.json"));
    }

    #[test]
    fn test_override_is_relative_to_root() {
        let path = settings_path(Path::new("/opt/quillpad"), Some(Path::new("staging.json")));
        assert_eq!(path, PathBuf::from("/opt/quillpad/staging.json"));
    }

    #[test]
    fn test_absolute_override_wins_over_root() {
        let path = settings_path(Path::new("/opt/quillpad"), Some(Path::new("/etc/pads.json")));
        assert_eq!(path, PathBuf::from("/etc/pads.json"));
    }
}
