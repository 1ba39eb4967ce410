//! dog.ceo API client for fetching sub-breed lists
//!
//! Fetches the sub-breeds of a breed from the public dog.ceo API. All
//! failure modes (transport errors, non-success HTTP statuses, malformed
//! bodies, API-level error statuses) are reported as `BreedNotFoundError`
//! to satisfy the `BreedProvider` contract.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{BreedNotFoundError, BreedProvider};

/// Base URL for the dog.ceo breed API
const DOG_API_BASE_URL: &str = "https://dog.ceo/api/breed";

/// Response from the dog.ceo list endpoint
///
/// On success `message` holds the array of sub-breed names; on error the
/// API reuses the field for a human-readable string, so it stays a raw
/// value until the status has been checked.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    #[serde(default)]
    message: Value,
}

/// Client for fetching sub-breed lists from the dog.ceo API
#[derive(Debug, Clone)]
pub struct DogApiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl DogApiClient {
    /// Creates a new DogApiClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: DOG_API_BASE_URL.to_string(),
        }
    }

    /// Creates a new DogApiClient with a custom base URL (for testing)
    #[cfg(test)]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    /// Fetches the sub-breeds of `breed` from the API
    ///
    /// # Arguments
    /// * `breed` - The breed to fetch sub-breeds for, as it appears in
    ///   dog.ceo paths (lowercase)
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Sub-breed names in the order the API lists them
    /// * `Err(BreedNotFoundError)` - If the breed is unknown or the request
    ///   fails for any reason
    pub async fn fetch_sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFoundError> {
        let url = format!("{}/{}/list", self.base_url, breed);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| BreedNotFoundError::with_reason(breed, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BreedNotFoundError::with_reason(
                breed,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let body: ApiResponse = response.json().await.map_err(|e| {
            BreedNotFoundError::with_reason(breed, format!("malformed response: {}", e))
        })?;

        self.parse_response(breed, body)
    }

    /// Maps a decoded API response to the ordered sub-breed list
    fn parse_response(
        &self,
        breed: &str,
        response: ApiResponse,
    ) -> Result<Vec<String>, BreedNotFoundError> {
        if !response.status.eq_ignore_ascii_case("success") {
            // dog.ceo reports unknown breeds as {"status":"error","message":"..."}
            let api_message = match response.message {
                Value::String(text) => text,
                _ => "unknown API error".to_string(),
            };
            return Err(BreedNotFoundError::with_reason(breed, api_message));
        }

        match response.message {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(name) => Ok(name),
                    other => Err(BreedNotFoundError::with_reason(
                        breed,
                        format!("unexpected entry in sub-breed list: {}", other),
                    )),
                })
                .collect(),
            other => Err(BreedNotFoundError::with_reason(
                breed,
                format!("unexpected message payload: {}", other),
            )),
        }
    }
}

impl Default for DogApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BreedProvider for DogApiClient {
    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>, BreedNotFoundError> {
        self.fetch_sub_breeds(breed).await
    }
}
