//! Durable session storage capability.
//!
//! DESIGN
//! ======
//! Persistence is injected as a trait object so the same session logic runs
//! in contexts with and without durable storage. Where nothing durable
//! exists, [`NoopStorage`] stands in and persistence is skipped without
//! error. Implementations absorb their own failures; the session store
//! treats every operation as best-effort and never sees an error.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key-value storage for session fields.
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// Storage for contexts with nothing durable: reads find nothing, writes
/// are discarded.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStorage;

impl SessionStorage for NoopStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

/// In-process storage backed by a map. Survives nothing; used for tests
/// and single-run sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// File-backed storage: one file per key under a root directory.
///
/// The native counterpart of browser local storage — a session written here
/// survives process restarts. I/O failures are logged and swallowed.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `root`. The directory is created lazily on the
    /// first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(error) = std::fs::create_dir_all(&self.root) {
            tracing::warn!(error = %error, root = %self.root.display(), "session storage root unavailable");
            return;
        }
        if let Err(error) = std::fs::write(self.key_path(key), value) {
            tracing::warn!(error = %error, key, "session storage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(error) = std::fs::remove_file(self.key_path(key)) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %error, key, "session storage remove failed");
            }
        }
    }
}
