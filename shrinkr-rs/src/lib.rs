//! # shrinkr-rs
//!
//! A Rust client library for the shrinkr URL shortener API.
//!
//! This crate provides the wire types shared with the server and a small client
//! to create shortened URLs and read their click statistics.
//!
//! ## Example
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), shrinkr_rs::ShrinkrApiError> {
//! use shrinkr_rs::ShrinkrApi;
//!
//! let api = ShrinkrApi::new("http://localhost:8080");
//! let created = api.create_short_url("https://example.com/very/long/url", None).await?;
//! println!("Shortened URL: {}", created.short_url);
//!
//! let stats = api.stats(&created.short_code).await?;
//! println!("Clicks so far: {}", stats.click_count);
//! # Ok(())
//! # }
//! ```
//!

use chrono::{DateTime, Utc};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request payload for creating a shortened URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    /// The original URL to be shortened.
    pub long_url: String,
    /// Optional point in time after which the link stops redirecting.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response from the API after creating a shortened URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedLinkResponse {
    /// The short code identifying the link.
    pub short_code: String,
    /// The complete shortened URL.
    pub short_url: String,
    /// The original URL that was shortened.
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreatedLinkResponse {
    /// Creates a new `CreatedLinkResponse`, building the shortened URL from
    /// `prefix` (e.g. `https://shrin.kr`) and the short code.
    pub fn new(
        short_code: String,
        prefix: &str,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        let short_url = format!("{}/{}", prefix.trim_end_matches('/'), short_code);
        Self {
            short_code,
            short_url,
            long_url,
            created_at,
            expires_at,
        }
    }
}

/// Click statistics of a single shortened URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkStatsResponse {
    pub short_code: String,
    pub long_url: String,
    /// Number of successful redirects recorded so far.
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// A client for interacting with a shrinkr server.
#[derive(Clone)]
pub struct ShrinkrApi {
    url: String,
    client: reqwest::Client,
}

/// Errors that can occur when interacting with the shrinkr API.
#[derive(Debug, Error)]
pub enum ShrinkrApiError {
    /// An error occurred during API configuration (e.g., invalid URL parsing).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    /// An error occurred while sending the HTTP request or receiving the response.
    #[error("Request error: {0}")]
    RequestError(String),
    /// The server answered with a non-success status.
    #[error("Unexpected status: {0}")]
    StatusError(StatusCode),
    /// An error occurred while deserializing the API response.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl ShrinkrApi {
    /// Creates a new client talking to the server at `url`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shrinkr_rs::ShrinkrApi;
    ///
    /// let api = ShrinkrApi::new("http://localhost:8080");
    /// ```
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ShrinkrApiError> {
        Url::parse(&format!("{}/{}", self.url, path))
            .map_err(|e| ShrinkrApiError::ConfigurationError(e.to_string()))
    }

    /// Creates a shortened URL.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API endpoint URL is invalid (`ConfigurationError`)
    /// - The HTTP request fails (`RequestError`)
    /// - The server rejects the URL (`StatusError`)
    /// - The response cannot be deserialized (`DeserializationError`)
    pub async fn create_short_url(
        &self,
        long_url: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<CreatedLinkResponse, ShrinkrApiError> {
        let resp = self
            .client
            .post(self.endpoint("shorten")?)
            .json(&CreateLinkRequest {
                long_url: long_url.to_string(),
                expires_at,
            })
            .send()
            .await
            .map_err(|e| ShrinkrApiError::RequestError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ShrinkrApiError::StatusError(resp.status()));
        }

        resp.json::<CreatedLinkResponse>()
            .await
            .map_err(|e| ShrinkrApiError::DeserializationError(e.to_string()))
    }

    /// Fetches click statistics for `short_code`.
    pub async fn stats(&self, short_code: &str) -> Result<LinkStatsResponse, ShrinkrApiError> {
        let resp = self
            .client
            .get(self.endpoint(&format!("stats/{short_code}"))?)
            .send()
            .await
            .map_err(|e| ShrinkrApiError::RequestError(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ShrinkrApiError::StatusError(resp.status()));
        }

        resp.json::<LinkStatsResponse>()
            .await
            .map_err(|e| ShrinkrApiError::DeserializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_joins_prefix() {
        let now = Utc::now();
        let res = CreatedLinkResponse::new(
            "0000001".to_string(),
            "http://localhost:8080/",
            "https://example.com".to_string(),
            now,
            None,
        );

        assert_eq!(&res.short_url, "http://localhost:8080/0000001");
    }

    #[test]
    fn test_request_expiry_is_optional() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"long_url":"https://example.com"}"#).unwrap();

        assert_eq!(&req.long_url, "https://example.com");
        assert!(req.expires_at.is_none());
    }
}
