//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] that keeps every key in a single JSON
//! object on disk. It is used on native targets (tests, tooling, a future
//! desktop shell) to retain the session across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.json       # {"token": "...", "user": "{...}"}
//! ```
//!
//! ## Platform data directories
//!
//! [`FileStore::default_location`] uses [`dirs::data_dir()`]:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/devfolio/` |
//! | Linux | `~/.local/share/devfolio/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\devfolio\` |
//!
//! I/O errors are logged and otherwise swallowed: an unwritable data directory
//! degrades to "not logged in after restart", never to a crash.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::vault::KeyValueStore;

const FILE_NAME: &str = "session.json";

/// Filesystem-backed KeyValueStore for native targets.
#[derive(Debug)]
pub struct FileStore {
    base: PathBuf,
    // Serialises read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self {
            base,
            lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/devfolio`, or `./devfolio` when the platform has no data dir.
    pub fn default_location() -> Self {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("devfolio");
        Self::new(base)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(self.path()) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable {}: {e}", self.path().display());
            BTreeMap::new()
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {e}", self.base.display());
            return;
        }
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialise session file: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(self.path(), raw) {
            tracing::warn!("Failed to write {}: {e}", self.path().display());
        }
    }

    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut entries = self.read_all();
        f(&mut entries);
        if entries.is_empty() {
            let _ = std::fs::remove_file(self.path());
        } else {
            self.write_all(&entries);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        });
    }

    fn remove(&self, key: &str) {
        self.update(|entries| {
            entries.remove(key);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::{PersistedSession, SessionVault};

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "devfolio_test_{tag}_{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = temp_dir("reopen");

        let vault = SessionVault::new(FileStore::new(dir.clone()));
        vault.save("tok-1", &"ada".to_string()).unwrap();

        // Re-open from the same directory
        let reopened = SessionVault::new(FileStore::new(dir.clone()));
        assert_eq!(
            reopened.load::<String>(),
            PersistedSession::Restored {
                token: "tok-1".to_string(),
                user: "ada".to_string(),
            }
        );

        reopened.clear();
        assert!(!dir.join(FILE_NAME).exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_garbage_file_reads_as_empty() {
        let dir = temp_dir("garbage");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(FILE_NAME), "not json at all").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
