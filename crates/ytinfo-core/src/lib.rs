//! YouTube Search Helper Core Library
//!
//! Provides an async API for paginated YouTube Data API searches and for
//! pulling canonical IDs out of YouTube URLs.
//!
//! # Overview
//!
//! This crate provides:
//! - A cursor paginator that walks `nextPageToken` to the end of a listing
//!   or to a result cap
//! - Keyword video/channel search with a per-query history of result sets
//! - Channel upload and playlist listings
//! - Video, playlist and channel ID extraction from bare IDs or URLs
//!
//! # Example
//!
//! ```no_run
//! use ytinfo_core::{ClientConfig, Order, Result, YtInfo, extract_id};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut yt = YtInfo::with_config(ClientConfig::new("my-api-key"))?;
//!
//!     // Keyword search, recorded under the query text
//!     yt.search_videos("rust async").await?;
//!     for set in yt.video_search_results("rust async") {
//!         println!("{} results", set.len());
//!     }
//!
//!     // Every upload of a channel given by URL
//!     if let Some(channel_id) = extract_id("https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw") {
//!         let videos = yt
//!             .list_videos_from_channel(&channel_id, None, Order::Date, "snippet")
//!             .await?;
//!         println!("{} uploads", videos.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pagination
//!
//! The Data API returns at most 50 items per page. [`fetch_all`] keeps
//! requesting pages until the cursor runs out or the cap is reached; see
//! [`PagingPolicy`] for how the cap is accounted.

mod client;
mod error;
mod history;
pub mod ids;
mod paginator;
mod types;
pub mod url;
mod ytinfo;

#[cfg(test)]
mod test_support;

// Re-export client types
pub use client::{API_KEY_VAR, BASE_URL_VAR, ClientConfig, DEFAULT_BASE_URL, YouTubeClient};

// Re-export error types
pub use error::{Result, YtInfoError};

// Re-export history
pub use history::SearchHistory;

// Re-export ID extraction
pub use ids::{
    ChannelIdPolicy, IdExtractor, ResourceId, ResourceKind, extract_id, extract_resource_id,
};

// Re-export pagination
pub use paginator::{PagedSearch, PagingPolicy, fetch_all};

// Re-export main search API
pub use ytinfo::YtInfo;

// Re-export data types
pub use types::{Endpoint, Item, MAX_PAGE_SIZE, Order, Page, PageRequest, ResultSet, SearchQuery};

// Re-export URL helper functions for convenience
pub use url::{build_channel_url, build_playlist_url, build_search_url, build_video_url};
