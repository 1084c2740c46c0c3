//! # Session Store
//!
//! Where the bearer token lives between calls and between runs.
//!
//! The store is passed to [`ApiClient`](crate::services::api::ApiClient)
//! explicitly; nothing reads the token from ambient global state. At most one
//! token is held per store, under [`TOKEN_STORAGE_KEY`].
//!
//! Store operations never fail from the caller's point of view, matching
//! browser local storage: a [`FileSessionStore`] that cannot write to disk
//! logs the failure and keeps serving the in-memory value.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "forexking_token";

/// Get/set/clear access to the persisted bearer token.
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// Replace the stored token.
    fn set_token(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

/// Process-local store, lost on exit.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.lock().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.lock() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.lock().take();
    }
}

/// Durable store backed by a small JSON key/value file.
///
/// Other keys already present in the file are preserved.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Session file is corrupt, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read session file");
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        if let Err(e) = write_entries(&self.path, entries) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to persist session file");
        }
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.entries.lock().get(TOKEN_STORAGE_KEY).cloned()
    }

    fn set_token(&self, token: &str) {
        let mut entries = self.entries.lock();
        entries.insert(TOKEN_STORAGE_KEY.to_string(), token.to_string());
        self.persist(&entries);
    }

    fn clear(&self) {
        let mut entries = self.entries.lock();
        if entries.remove(TOKEN_STORAGE_KEY).is_some() {
            self.persist(&entries);
        }
    }
}
