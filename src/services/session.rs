//! Persistent session state: the bearer token and the signed-in user record.
//!
//! Storage is injected behind [`SessionStorage`] so the console can keep its
//! session in a file between runs, or purely in memory.

use crate::models::{AuthResponse, User};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const TOKEN_KEY: &str = "admin_token";
pub const USER_KEY: &str = "admin_user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to write session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode session file: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to encode user record: {0}")]
    User(#[from] serde_json::Error),
}

/// Key/value store backing a [`Session`].
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// TOML file of string entries. The whole file is rewritten on every change.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Load the file at `path`. A missing, unreadable or corrupt file opens
    /// as an empty store.
    pub fn open(path: &Path) -> Self {
        let entries = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring unreadable session file {}: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Could not read session file {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };

        Self {
            path: path.to_path_buf(),
            entries: Mutex::new(entries),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };

        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(io_err(e)),
                _ => Ok(()),
            };
        }

        let content = toml::to_string(entries)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        write_private(&self.path, content.as_bytes()).map_err(io_err)?;

        Ok(())
    }
}

/// Write `content` to a file readable only by its owner. The mode is set
/// before any content lands, including when the file already exists.
#[cfg(unix)]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(content)
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, content)
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// Shared handle on the stored session. Clones see the same storage.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl Session {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn open(path: &Path) -> Self {
        Self::new(FileStorage::open(path))
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// The saved user record. A record that no longer parses reads as absent.
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::debug!("Stored user record is not valid JSON: {}", e);
                None
            }
        }
    }

    pub fn has_saved_user(&self) -> bool {
        self.storage.get(USER_KEY).is_some()
    }

    /// Save token and user together. If the user record cannot be written the
    /// token is removed again, so storage never holds one without the other.
    pub fn store(&self, auth: &AuthResponse) -> Result<(), SessionError> {
        let user = serde_json::to_string(&auth.user)?;
        self.storage.set(TOKEN_KEY, &auth.token)?;
        if let Err(e) = self.storage.set(USER_KEY, &user) {
            if let Err(cleanup) = self.storage.remove(TOKEN_KEY) {
                tracing::warn!("Failed to roll back stored token: {}", cleanup);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Remove both token and user. Each key is attempted even if the first
    /// removal fails.
    pub fn clear(&self) -> Result<(), SessionError> {
        let token = self.storage.remove(TOKEN_KEY);
        let user = self.storage.remove(USER_KEY);
        token.and(user)
    }
}
