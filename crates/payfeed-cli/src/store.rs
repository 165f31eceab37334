//! File-backed key-value store.
//!
//! Implements the ledger's persistence port over a directory: each key
//! becomes one JSON file. Keys are sanitized to a flat file name so a key
//! like `ledger/run-1` cannot escape the root directory.

use std::fs;
use std::path::PathBuf;

use payfeed_ledger::KeyValueStore;

pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        if let Some(parent) = path.parent()
            && let Err(error) = fs::create_dir_all(parent)
        {
            tracing::warn!(path = %parent.display(), %error, "store directory not created");
            return;
        }
        if let Err(error) = fs::write(&path, value) {
            tracing::warn!(path = %path.display(), %error, "store entry not written");
        }
    }

    fn delete(&mut self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = DirStore::new(dir.path());
        assert!(store.get("ledger").is_none());
        store.set("ledger", "{}");
        assert_eq!(store.get("ledger").as_deref(), Some("{}"));
        store.delete("ledger");
        assert!(store.get("ledger").is_none());
    }

    #[test]
    fn keys_cannot_escape_the_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = DirStore::new(dir.path());
        store.set("../escape", "{}");
        assert!(dir.path().join("___escape.json").exists());
    }
}
