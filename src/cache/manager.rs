//! Cache manager for persisting the movie list to disk
//!
//! Provides a `CacheManager` that stores serializable data as a plain JSON file
//! and judges freshness from the file's modification time.

use chrono::{DateTime, Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of reading from cache, including metadata about cache freshness
#[derive(Debug)]
pub struct CachedData<T> {
    /// The cached data
    pub data: T,
    /// When the cache file was last written
    pub modified_at: DateTime<Utc>,
    /// Whether the cache file is older than the freshness window
    pub is_expired: bool,
}

/// Manages reading and writing a single cache file
///
/// The file holds the cached document as-is, with no wrapper. Freshness is
/// `now - mtime < ttl`; a modification time in the future counts as fresh.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Location of the cache file
    path: PathBuf,
    /// How long a written file stays fresh
    ttl: Duration,
}

impl CacheManager {
    /// Creates a new CacheManager for the given file and TTL in hours
    ///
    /// TTLs too large for a `Duration` are clamped to the maximum.
    pub fn new(path: impl Into<PathBuf>, ttl_hours: u64) -> Self {
        let ttl = i64::try_from(ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::MAX);

        Self {
            path: path.into(),
            ttl,
        }
    }

    /// Returns the path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the modification time of the cache file, if it exists
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        Some(DateTime::<Utc>::from(modified))
    }

    /// Whether a file modified at `modified_at` is expired as of `now`
    pub fn is_expired_at(&self, modified_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let age = (now - modified_at).max(Duration::zero());
        age >= self.ttl
    }

    /// Whether the cache file exists and is within the freshness window
    pub fn is_fresh(&self) -> bool {
        match self.modified_at() {
            Some(modified_at) => !self.is_expired_at(modified_at, Utc::now()),
            None => false,
        }
    }

    /// Writes data to the cache file, replacing any previous content
    ///
    /// Parent directories are created as needed.
    pub fn write<T: Serialize + ?Sized>(&self, data: &T) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        fs::write(&self.path, json)
    }

    /// Reads data from the cache file
    ///
    /// Returns `None` if the file doesn't exist or cannot be parsed. Expired
    /// files are still returned, with `is_expired = true`.
    pub fn read<T: DeserializeOwned>(&self) -> Option<CachedData<T>> {
        let modified_at = self.modified_at()?;
        let content = fs::read_to_string(&self.path).ok()?;
        let data: T = serde_json::from_str(&content).ok()?;

        Some(CachedData {
            data,
            modified_at,
            is_expired: self.is_expired_at(modified_at, Utc::now()),
        })
    }
}
