//! Error types for the YouTube search client
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all ytinfo operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum YtInfoError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("YouTube API error {code}: {message}")]
    ApiError { code: u16, message: String },

    /// Response body was not a page of results
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// No API key could be found in the configuration source
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// A configuration file could not be read
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid channel or playlist ID provided
    #[error("Invalid ID: {0}")]
    InvalidId(String),
}

impl Serialize for YtInfoError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for ytinfo operations
pub type Result<T> = std::result::Result<T, YtInfoError>;
