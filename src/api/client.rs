//! PokeAPI HTTP client
//!
//! Every GET goes through the shared timed cache: a hit skips the network,
//! a successful miss stores the raw body under its URL.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// PokeAPI client backed by the process-wide response cache.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    cache: TimedCache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` that caches into `cache`.
    pub fn new(cache: TimedCache, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from configuration.
    pub fn from_config(config: &Config, cache: TimedCache) -> Result<Self> {
        Self::new(cache, config.base_url.clone(), config.http_timeout())
    }

    /// Root URL every resource path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The cache this client reads through.
    pub fn cache(&self) -> &TimedCache {
        &self.cache
    }

    /// URL of the first location-area page.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Returns the body at `url`, from the cache when present.
    ///
    /// Non-success responses are returned as [`PokedexError::Status`] and
    /// are not cached.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url) {
            debug!("cache hit");
            return Ok(body);
        }

        debug!("cache miss, requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a location-area page, the first one when `url` is None.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        match url {
            Some(url) => self.get_json(url).await,
            None => self.get_json(&self.first_location_page_url()).await,
        }
    }

    /// Fetches one location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.get_json(&url).await
    }

    /// Fetches one Pokemon by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.get_json(&url).await
    }
}
