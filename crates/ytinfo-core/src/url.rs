//! URL helper functions for youtube.com
//!
//! Provides functions for building canonical video, playlist, channel and
//! search-results URLs.

const BASE_URL: &str = "https://www.youtube.com";

/// Builds the watch page URL for a video ID
///
/// # Example
/// ```
/// use ytinfo_core::url::build_video_url;
/// let url = build_video_url("dQw4w9WgXcQ");
/// assert_eq!(url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
/// ```
pub fn build_video_url(id: &str) -> String {
    format!("{}/watch?v={}", BASE_URL, id)
}

/// Builds the playlist page URL for a playlist ID
///
/// # Example
/// ```
/// use ytinfo_core::url::build_playlist_url;
/// let url = build_playlist_url("PLv3TTBr1W_9tppikBxAE_G6qjWdBljBHJ");
/// assert_eq!(url, "https://www.youtube.com/playlist?list=PLv3TTBr1W_9tppikBxAE_G6qjWdBljBHJ");
/// ```
pub fn build_playlist_url(id: &str) -> String {
    format!("{}/playlist?list={}", BASE_URL, id)
}

/// Builds the channel page URL for a channel ID
pub fn build_channel_url(id: &str) -> String {
    format!("{}/channel/{}", BASE_URL, id)
}

/// Builds the search results page URL for a query
///
/// URL encodes the query.
///
/// # Example
/// ```
/// use ytinfo_core::url::build_search_url;
/// let url = build_search_url("rust async");
/// assert_eq!(url, "https://www.youtube.com/results?search_query=rust%20async");
/// ```
pub fn build_search_url(query: &str) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/results?search_query={}", BASE_URL, encoded)
}
