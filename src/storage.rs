//! JSON-file persistence under the platform data directory. Stands in for
//! the browser localStorage of a client app: best effort, no durability
//! guarantees.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::names;
use crate::utils;

/// A cached value with its write timestamp, for TTL checks.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Storage rooted at the platform-local data directory, falling back to
    /// the current directory when none is known.
    pub fn new() -> Self {
        let dir = dirs::data_local_dir()
            .map(|d| d.join(names::APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    pub fn save<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(self.path(filename), json)?;
        tracing::debug!("saved {filename}");
        Ok(())
    }

    /// Load `filename`, or `None` when it does not exist.
    pub fn load<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.path(filename);
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Load `filename`, falling back to `T::default()` when the file is
    /// missing or unreadable.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, filename: &str) -> T {
        match self.load(filename) {
            Ok(Some(data)) => data,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!("failed to load {filename}: {e}; using defaults");
                T::default()
            }
        }
    }

    pub fn remove(&self, filename: &str) -> Result<()> {
        let path = self.path(filename);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    // ----- TTL cache -----

    pub fn cache_set<T: Serialize>(&self, filename: &str, data: &T) -> Result<()> {
        self.save(
            filename,
            &CacheEntry {
                data,
                timestamp: utils::epoch_millis(),
            },
        )
    }

    /// Cached value if it is younger than `ttl_ms`; expired entries are
    /// removed.
    pub fn cache_get<T: DeserializeOwned>(&self, filename: &str, ttl_ms: u64) -> Option<T> {
        let entry: CacheEntry<T> = self.load(filename).ok().flatten()?;
        if utils::epoch_millis().saturating_sub(entry.timestamp) < ttl_ms {
            Some(entry.data)
        } else {
            tracing::debug!("cache expired: {filename}");
            let _ = self.remove(filename);
            None
        }
    }

    /// Cached value regardless of age, as an offline fallback.
    pub fn cache_get_stale<T: DeserializeOwned>(&self, filename: &str) -> Option<T> {
        let entry: CacheEntry<T> = self.load(filename).ok().flatten()?;
        Some(entry.data)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
