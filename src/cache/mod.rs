//! Cache module for storing the movie catalog on disk
//!
//! This module provides a cache manager that persists a single JSON document to
//! a fixed path. Freshness comes from the file's modification time compared
//! against a TTL, so the file itself carries no metadata.

mod manager;

pub use manager::{CacheManager, CachedData};
