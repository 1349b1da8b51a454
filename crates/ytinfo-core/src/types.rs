//! Core data types for the YouTube search client
//!
//! Contains the query, request and page structures shared by the
//! paginator, the HTTP backend and the history store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest page the Data API will return for a single request
pub const MAX_PAGE_SIZE: u32 = 50;

/// Opaque result record, kept exactly as the API returned it
pub type Item = serde_json::Map<String, serde_json::Value>;

/// One completed aggregation of all pages for a single search
pub type ResultSet = Vec<Item>;

/// Result ordering accepted by the search endpoint
///
/// Serialized with the API's own spelling (`videoCount`, `viewCount`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Order {
    Date,
    Rating,
    Relevance,
    Title,
    VideoCount,
    ViewCount,
}

impl Order {
    /// Query-string value for this ordering
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Date => "date",
            Order::Rating => "rating",
            Order::Relevance => "relevance",
            Order::Title => "title",
            Order::VideoCount => "videoCount",
            Order::ViewCount => "viewCount",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword search as issued by the caller
///
/// Defaults mirror the API helper this crate replaces: up to 50 results,
/// relevance order, `snippet` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query, also the key under which results are recorded
    pub query: String,

    /// Result ordering hint
    pub order: Order,

    /// Comma-separated response parts (e.g. "snippet" or "snippet,id")
    pub part: String,

    /// Result cap, `None` to walk every page
    pub max_results: Option<u32>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            order: Order::Relevance,
            part: "snippet".to_string(),
            max_results: Some(MAX_PAGE_SIZE),
        }
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn part(mut self, part: impl Into<String>) -> Self {
        self.part = part.into();
        self
    }

    pub fn max_results(mut self, max_results: Option<u32>) -> Self {
        self.max_results = max_results;
        self
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<String> for SearchQuery {
    fn from(query: String) -> Self {
        Self::new(query)
    }
}

/// Which listing a page request targets, with its filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Keyword search restricted to videos
    SearchVideos { query: String },
    /// Keyword search restricted to channels
    SearchChannels { query: String },
    /// Videos uploaded by one channel
    ChannelUploads { channel_id: String },
    /// Entries of one playlist
    PlaylistItems { playlist_id: String },
}

impl Endpoint {
    /// API resource path, relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::PlaylistItems { .. } => "playlistItems",
            _ => "search",
        }
    }

    /// Whether the endpoint accepts an `order` parameter
    pub fn supports_order(&self) -> bool {
        !matches!(self, Endpoint::PlaylistItems { .. })
    }
}

/// A single page request handed to a [`PagedSearch`](crate::PagedSearch) backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub endpoint: Endpoint,
    pub order: Order,
    pub part: String,
    /// Requested page size, never above [`MAX_PAGE_SIZE`]
    pub max_results: u32,
    /// Cursor from the previous page, `None` for the first page
    pub page_token: Option<String>,
}

impl PageRequest {
    /// Renders the request as API query parameters
    ///
    /// The API key is not included; the backend adds its own credentials.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(7);

        match &self.endpoint {
            Endpoint::SearchVideos { query } => {
                params.push(("q", query.clone()));
                params.push(("type", "video".to_string()));
            }
            Endpoint::SearchChannels { query } => {
                params.push(("q", query.clone()));
                params.push(("type", "channel".to_string()));
            }
            Endpoint::ChannelUploads { channel_id } => {
                params.push(("channelId", channel_id.clone()));
                params.push(("type", "video".to_string()));
            }
            Endpoint::PlaylistItems { playlist_id } => {
                params.push(("playlistId", playlist_id.clone()));
            }
        }

        if self.endpoint.supports_order() {
            params.push(("order", self.order.as_str().to_string()));
        }
        params.push(("part", self.part.clone()));
        params.push(("maxResults", self.max_results.to_string()));

        if let Some(token) = &self.page_token {
            params.push(("pageToken", token.clone()));
        }

        params
    }
}

/// One page of results as returned by the API
///
/// Only `items` and `nextPageToken` are read; every other field of the
/// response envelope is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Page {
    pub items: Vec<Item>,

    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
}

impl Page {
    /// Cursor for the following page; an empty token counts as absent
    pub fn next_cursor(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}
