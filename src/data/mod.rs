//! Core data models for the TCM movie catalog
//!
//! This module contains the movie record as served by the TCM web service,
//! the fixed genre vocabulary, and the client that fetches and caches the list.

pub mod catalog;
pub mod genres;

pub use catalog::{CatalogClient, CatalogError};
pub use genres::{is_tcm_genre, sorted_genres, TCM_GENRES};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single title from the TCM catalog
///
/// Only the fields the listing needs are typed. Everything else the service
/// sends is kept in `extra` so the cache file mirrors the upstream payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Year of release
    #[serde(rename = "releaseYear")]
    pub release_year: i32,
    /// Title of the movie
    pub name: String,
    /// Genre tags; the service sends `null` or omits the field for some titles
    #[serde(rename = "tvGenresArr", default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    /// Short synopsis, possibly missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Remaining upstream fields, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    /// Creates a movie with no genres, description or extra fields
    pub fn new(release_year: i32, name: impl Into<String>) -> Self {
        Self {
            release_year,
            name: name.into(),
            genres: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Sets the genre tags
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Genre tags, empty when the service sent none
    pub fn genres(&self) -> &[String] {
        self.genres.as_deref().unwrap_or_default()
    }

    /// Description, empty when the service sent none
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
