//! TCM catalog client
//!
//! Fetches the latest titles from the TCM web service and keeps a copy in a
//! local cache file that is reused for 24 hours.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Movie;
use crate::cache::CacheManager;

/// Endpoint serving the latest TCM titles
pub const TCM_MOVIES_URL: &str = "https://tcmws.tcm.com/tcmws/latest/250";

/// Cache file name, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "tcm-movies.json";

/// Cache TTL in hours
pub const CACHE_TTL_HOURS: u64 = 24;

/// Errors that can occur when loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Cache file could not be written
    #[error("Cache error: {0}")]
    Cache(#[from] std::io::Error),
}

/// Response envelope from the TCM web service
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    tcm: TcmPayload,
}

#[derive(Debug, Deserialize)]
struct TcmPayload {
    titles: Vec<Movie>,
}

/// Client for the TCM catalog, backed by a single cache file
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Cache manager for the title list
    cache: CacheManager,
    /// Catalog endpoint (allows override for testing)
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for the TCM endpoint using the given cache
    pub fn new(cache: CacheManager) -> Self {
        Self {
            http_client: Client::new(),
            cache,
            base_url: TCM_MOVIES_URL.to_string(),
        }
    }

    /// Points the client at a different catalog endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the cache backing this client
    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    /// Loads the movie list, from cache when fresh and from the service otherwise
    ///
    /// # Behavior
    /// - A cache file younger than the TTL is returned as-is, with no request
    /// - A missing, stale or unreadable cache triggers exactly one request
    /// - The fetched list overwrites the cache file
    /// - Request failures propagate; there is no fallback to stale data
    pub async fn load_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        match self.cache.read::<Vec<Movie>>() {
            Some(cached) if !cached.is_expired => {
                tracing::debug!(
                    "Using cached movie list from {} (modified {})",
                    self.cache.path().display(),
                    cached.modified_at
                );
                return Ok(cached.data);
            }
            Some(_) => {
                tracing::debug!("Cached movie list at {} is stale", self.cache.path().display());
            }
            None if self.cache.is_fresh() => {
                tracing::warn!(
                    "Ignoring unreadable cache file {}",
                    self.cache.path().display()
                );
            }
            None => {
                tracing::debug!("No cached movie list at {}", self.cache.path().display());
            }
        }

        tracing::info!("Downloading movies list...");
        let movies = self.fetch_movies().await?;
        self.cache.write(&movies)?;
        tracing::debug!(
            "Cached {} titles to {}",
            movies.len(),
            self.cache.path().display()
        );

        Ok(movies)
    }

    /// Fetches the movie list directly from the service, bypassing the cache
    pub async fn fetch_movies(&self) -> Result<Vec<Movie>, CatalogError> {
        tracing::debug!("Making API request to: {}", self.base_url);

        let response = self
            .http_client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;

        parse_catalog(&text)
    }
}

/// Parses a catalog response body into the list of titles
pub fn parse_catalog(body: &str) -> Result<Vec<Movie>, CatalogError> {
    let response: CatalogResponse = serde_json::from_str(body)?;
    Ok(response.tcm.titles)
}
