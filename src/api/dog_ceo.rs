//! dog.ceo API client for sub-breed listings
//!
//! Uses blocking reqwest. Every failure, including transport and decoding
//! errors, is reported as [`BreedNotFound`].

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::{BreedNotFound, Result, DEFAULT_NOT_FOUND_MESSAGE};
use crate::fetcher::{normalize_breed, BreedFetcher};

/// dog.ceo response for `/breed/{breed}/list`
#[derive(Debug, Deserialize)]
pub struct BreedListResponse {
    /// "success" or "error"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<ApiMessage>,
}

/// The `message` field is a list of sub-breeds on success and a text on failure
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum ApiMessage {
    List(Vec<String>),
    Text(String),
    Other(serde_json::Value),
}

impl BreedListResponse {
    fn is_success(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("success"))
    }
}

/// Breed fetcher backed by the dog.ceo HTTP API
#[derive(Debug)]
pub struct DogApiBreedFetcher {
    client: Client,
    config: ApiConfig,
}

impl DogApiBreedFetcher {
    /// Creates a fetcher for the public dog.ceo API.
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a fetcher with a custom base URL, timeout or user agent.
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        log::debug!(
            "Creating dog.ceo client for {} (timeout {:?})",
            config.base_url,
            config.timeout
        );
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| BreedNotFound::new(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn fetch(&self, breed: &str, normalized: &str) -> Result<Vec<String>> {
        let url = self.config.sub_breeds_url(normalized);
        log::info!("Fetching sub-breeds from dog.ceo: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BreedNotFound::fetch_failed(breed, e))?;

        let http_success = response.status().is_success();
        log::debug!("dog.ceo responded with {}", response.status());

        let body = response
            .text()
            .map_err(|e| BreedNotFound::fetch_failed(breed, e))?;

        parse_sub_breeds(breed, http_success, &body)
    }
}

impl BreedFetcher for DogApiBreedFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let normalized = normalize_breed(breed);
        if normalized.is_empty() {
            return Err(BreedNotFound::empty_breed());
        }
        // Dot segments would be resolved away by the URL parser
        if normalized == "." || normalized == ".." {
            return Err(BreedNotFound::default());
        }

        let result = self.fetch(breed, &normalized);
        if let Err(e) = &result {
            log::warn!("Sub-breed lookup for '{}' failed: {}", breed, e);
        }
        result
    }

    fn name(&self) -> &str {
        "dog.ceo"
    }
}

/// Interpret a dog.ceo response body.
///
/// A lookup succeeds only when the HTTP status is 2xx and the body's `status`
/// is "success" (any case). `breed` is the caller's original argument and is
/// only used in error messages.
pub(crate) fn parse_sub_breeds(breed: &str, http_success: bool, body: &str) -> Result<Vec<String>> {
    let parsed: BreedListResponse =
        serde_json::from_str(body).map_err(|e| BreedNotFound::fetch_failed(breed, e))?;

    if !http_success || !parsed.is_success() {
        let message = match parsed.message {
            Some(ApiMessage::Text(text)) => text,
            _ => DEFAULT_NOT_FOUND_MESSAGE.to_string(),
        };
        return Err(BreedNotFound::new(message));
    }

    match parsed.message {
        Some(ApiMessage::List(sub_breeds)) => Ok(sub_breeds),
        _ => Err(BreedNotFound::fetch_failed(
            breed,
            "response message is not a list of sub-breeds",
        )),
    }
}

#[cfg(test)]
#[path = "dog_ceo_tests.rs"]
mod tests;
