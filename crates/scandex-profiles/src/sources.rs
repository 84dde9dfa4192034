//! Data-source reading.
//!
//! Missing or unreadable sources degrade to `None` — the engine then loads
//! an empty roster or a neutral chart rather than failing.

use std::fs;

use tracing::warn;

use crate::builtin::packaged_text;
use crate::profile::SourceRef;

/// Read a source's full text, or `None` when unavailable.
pub fn read_source(source: &SourceRef) -> Option<String> {
    match source {
        SourceRef::Packaged(name) => match packaged_text(name) {
            Some(text) => Some(text.to_string()),
            None => {
                warn!(asset = %name, "unknown packaged asset");
                None
            }
        },
        SourceRef::File(path) => match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(path = %path.display(), %err, "source file unreadable");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_packaged_source() {
        let text = read_source(&SourceRef::Packaged("vanilla_roster".to_string()));
        assert!(text.is_some_and(|t| t.contains("Pikachu")));
    }

    #[test]
    fn test_unknown_asset_is_none() {
        assert!(read_source(&SourceRef::Packaged("nope".to_string())).is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = PathBuf::from("/definitely/not/here.csv");
        assert!(read_source(&SourceRef::File(path)).is_none());
    }
}
