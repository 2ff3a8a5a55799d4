//! PokeAPI Client Module
//!
//! HTTP client that consults the response cache before going to the network.
//! The cache lock is released before any request is sent, so it is never held
//! across a network call.

use tracing::debug;

use crate::cache::{Cache, CacheStats};
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == Poke Client ==
/// Cache-backed client for the PokeAPI.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    cache: Cache,
    base_url: String,
}

impl PokeClient {
    // == Constructor ==
    /// Creates a client over an existing cache and API base URL.
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            cache,
            base_url,
        }
    }

    // == Fetch Bytes ==
    /// Returns the raw response body for `url`, from cache when possible.
    ///
    /// On a miss, performs the GET, rejects non-success statuses, stores the
    /// body under the full URL, and returns it.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            println!("Cache hit!");
            debug!("cache hit for {}", url);
            return Ok(body);
        }

        println!("Cache miss!");
        debug!("cache miss for {}, fetching", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    // == Location Areas ==
    /// Fetches one page of the location-area listing.
    ///
    /// `page_url` is a cursor from a previous page; `None` requests the first
    /// page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area", self.base_url),
        };

        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a single location area with its encounters.
    pub async fn get_location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Pokemon ==
    /// Fetches a Pokemon by name.
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Cache Stats ==
    /// Snapshot of the underlying cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}
