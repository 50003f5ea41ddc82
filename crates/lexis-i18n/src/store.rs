//! Persistent locale preference storage
//!
//! The chosen locale survives restarts through a tiny get/put key-value
//! store. The schema is a single string under the `"locale"` key.

use async_trait::async_trait;
use lexis_common::{LexisError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Key under which the selected locale preference is stored
pub const LOCALE_PREFERENCE_KEY: &str = "locale";

/// Get/put store for the locale preference
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a stored value
    async fn get(&self, key: &str) -> Result<Option<String>>;
    /// Write a value, replacing any previous one
    async fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and hosts without persistence
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file-backed store, written atomically via a temp file and rename
///
/// The cookie-jar stand-in for desktop hosts: a small JSON object mapping
/// keys to strings. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<HashMap<String, String>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => {
                return Err(LexisError::store_with_source(
                    format!("failed to read preference file {}", self.path.display()),
                    err,
                ));
            }
        };

        serde_json::from_slice(&raw).map_err(|err| {
            LexisError::store_with_source(
                format!("preference file {} is not valid JSON", self.path.display()),
                err,
            )
        })
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_entries().await?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());

        let payload = serde_json::to_vec_pretty(&entries)?;
        let tmp_path = self.path.with_extension("tmp");
        tokio::fs::write(&tmp_path, &payload).await.map_err(|err| {
            LexisError::store_with_source(
                format!("failed to write preference file {}", tmp_path.display()),
                err,
            )
        })?;
        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|err| {
            LexisError::store_with_source(
                format!("failed to replace preference file {}", self.path.display()),
                err,
            )
        })?;

        Ok(())
    }
}
