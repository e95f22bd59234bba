//! Immich HTTP client
//!
//! Handles communication with the Immich server API.
//! See: https://immich.app/docs/api
//!
//! Every request carries the API key in the `x-api-key` header. The key is
//! installed as a default header on the client at construction, so no call
//! site ever touches request headers. Connect and total round-trip timeouts
//! are bounded; a poll cycle can never hang on a dead server longer than
//! the total timeout.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};

use super::dto::Album;

/// Header Immich expects the API key in.
const API_KEY_HEADER: &str = "x-api-key";

/// TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total timeout including connection, redirects and body read.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Immich API client
pub struct ImmichClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// Errors from fetching remote album state.
///
/// Any of these aborts the poll cycle that produced it; there is no
/// partial-result path.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ImmichClient {
    /// Create a new client for the given server.
    ///
    /// `host` is the API base, e.g. `https://photos.example.com/api`.
    /// Panics if `api_key` is not a valid header value; construction
    /// happens once at startup.
    pub fn new(api_key: &str, host: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(api_key).expect("API key is not a valid header value");
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: host.into(),
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(api_key: &str, base_url: impl Into<String>) -> Self {
        Self::new(api_key, base_url)
    }

    /// Fetch every album visible to the configured API key.
    ///
    /// Returns the full list or an error; never a truncated list.
    pub async fn all_albums(&self) -> Result<Vec<Album>, FetchError> {
        let url = format!("{}/albums", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Keep a short body excerpt for the log, Immich puts the reason there
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        response
            .json::<Vec<Album>>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }
}
