//! Durable storage boundary for the board's persisted maps.
//!
//! The board persists exactly two named entries, [`ASSIGNMENTS_ENTRY`] and
//! [`COMPLETION_ENTRY`], each a JSON-encoded mapping from task description to
//! value.  Absence of either entry is a valid, expected initial state.
//!
//! [`FileStorage`] keeps one `<entry>.json` file per entry in the platform
//! config directory; [`MemoryStorage`] backs tests and ephemeral sessions.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage entry name for the assignment map.
pub const ASSIGNMENTS_ENTRY: &str = "assignments";
/// Storage entry name for the completion map.
pub const COMPLETION_ENTRY: &str = "taskCompletion";

// ---------------------------------------------------------------------------
// Storage trait
// ---------------------------------------------------------------------------

/// Narrow key/value contract over durable client-side storage.
///
/// Reads return `None` for absent entries.  Writes and removes are
/// best-effort: a failed disk write is logged, never propagated — the
/// in-memory board state remains the source of truth for the session.
pub trait Storage: Send + Sync {
    /// Read the raw string value of an entry, or `None` when absent.
    fn read(&self, entry: &str) -> Option<String>;

    /// Write the raw string value of an entry.
    fn write(&self, entry: &str, value: &str);

    /// Remove an entry entirely.
    fn remove(&self, entry: &str);
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// File-backed [`Storage`]: each entry lives in `<dir>/<entry>.json`.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`; the directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn entry_path(&self, entry: &str) -> PathBuf {
        self.dir.join(format!("{entry}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, entry: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(entry)).ok()
    }

    fn write(&self, entry: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            log::warn!("storage: could not create {}: {e}", self.dir.display());
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(entry), value) {
            log::warn!("storage: could not write entry {entry:?}: {e}");
        }
    }

    fn remove(&self, entry: &str) {
        let path = self.entry_path(entry);
        if path.exists() {
            if let Err(e) = std::fs::remove_file(&path) {
                log::warn!("storage: could not remove entry {entry:?}: {e}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// In-memory [`Storage`] — nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, entry: &str) -> Option<String> {
        self.entries.lock().unwrap().get(entry).cloned()
    }

    fn write(&self, entry: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.to_string(), value.to_string());
    }

    fn remove(&self, entry: &str) {
        self.entries.lock().unwrap().remove(entry);
    }
}

// ---------------------------------------------------------------------------
// Map (de)serialization helpers
// ---------------------------------------------------------------------------

/// Read a JSON-encoded map from storage.
///
/// Absent **or malformed** entries default to an empty map — a corrupt file
/// must never crash a board load.  Malformed content is logged at warn and
/// recovered silently; the user never sees it.
pub fn read_map<V: serde::de::DeserializeOwned>(
    storage: &dyn Storage,
    entry: &str,
) -> HashMap<String, V> {
    match storage.read(entry) {
        None => HashMap::new(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                log::warn!("storage: malformed entry {entry:?} ({e}); defaulting to empty");
                HashMap::new()
            }
        },
    }
}

/// Write a map to storage as JSON.  Serialization of a string-keyed map
/// cannot fail in practice; an error is logged and the write skipped.
pub fn write_map<V: serde::Serialize>(
    storage: &dyn Storage,
    entry: &str,
    map: &HashMap<String, V>,
) {
    match serde_json::to_string(map) {
        Ok(raw) => storage.write(entry, &raw),
        Err(e) => log::warn!("storage: could not serialize entry {entry:?}: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
