//! HTTP backend for the YouTube Data API v3
//!
//! Provides the API-key configuration and a reqwest client that serves
//! single pages to the paginator. No retries: a failed request is
//! reported to the caller as-is.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, YtInfoError};
use crate::paginator::PagedSearch;
use crate::types::{Page, PageRequest};

/// Default Data API endpoint
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Environment variable holding the developer API key
pub const API_KEY_VAR: &str = "YT_DEV_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "YT_API_BASE_URL";

const USER_AGENT: &str = concat!("ytinfo/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Developer API key sent as the `key` query parameter
    pub api_key: String,
    /// API root without trailing slash (default: [`DEFAULT_BASE_URL`])
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Configuration for `api_key` with default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Point the client at another API root (e.g. a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Read the configuration from the process environment
    ///
    /// A `.env` file in the working directory or one of its parents is
    /// loaded first; variables already set in the environment win.
    ///
    /// # Errors
    /// - `MissingApiKey` if `YT_DEV_KEY` is unset or blank
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the configuration from a dotenv file without touching the
    /// process environment
    ///
    /// Variables set in the process environment take precedence over the
    /// file, as with [`ClientConfig::from_env`].
    ///
    /// # Errors
    /// - `ConfigError` if the file cannot be read or parsed
    /// - `MissingApiKey` if neither source provides `YT_DEV_KEY`
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_env_file_with(path.as_ref(), |name| env::var(name).ok())
    }

    fn from_env_file_with<F>(path: &Path, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = dotenvy::from_path_iter(path)
            .and_then(|entries| entries.collect::<std::result::Result<HashMap<_, _>, _>>())
            .map_err(|e| YtInfoError::ConfigError(format!("{}: {}", path.display(), e)))?;

        Self::from_lookup(|name| env_lookup(name).or_else(|| file_vars.get(name).cloned()))
    }

    /// Read the configuration through an arbitrary variable lookup
    ///
    /// `YT_DEV_KEY` is required; `YT_API_BASE_URL` is optional.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| YtInfoError::MissingApiKey(format!("{} is not set", API_KEY_VAR)))?;

        let config = Self::new(api_key);
        Ok(match lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty()) {
            Some(base_url) => config.with_base_url(base_url.trim()),
            None => config,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    code: u16,
    message: String,
}

/// Data API client serving pages over HTTPS
///
/// Each call to [`PagedSearch::fetch_page`] is a single GET; the cursor
/// handling lives in the paginator.
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Create a client from explicit configuration
    ///
    /// # Errors
    /// - `HttpError` if the underlying HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(YtInfoError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Create a client configured from `YT_DEV_KEY`
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into `ApiError`
    ///
    /// Uses the Google error envelope when the body carries one, otherwise
    /// the raw body text.
    async fn error_from_response(response: reqwest::Response) -> YtInfoError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => YtInfoError::ApiError {
                code: envelope.error.code,
                message: envelope.error.message,
            },
            Err(_) => YtInfoError::ApiError {
                code: status.as_u16(),
                message: body,
            },
        }
    }
}

impl PagedSearch for YouTubeClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page> {
        let url = format!("{}/{}", self.base_url, request.endpoint.path());
        debug!(%url, page_token = ?request.page_token, "YouTube API request");

        let response = self
            .client
            .get(&url)
            .query(&request.query_params())
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(YtInfoError::HttpError)?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response.text().await.map_err(YtInfoError::HttpError)?;
        serde_json::from_str(&body).map_err(|e| YtInfoError::InvalidResponse(e.to_string()))
    }
}
