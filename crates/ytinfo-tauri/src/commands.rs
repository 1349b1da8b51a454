//! Tauri commands for the ytinfo search helper
//!
//! Thin wrappers over `YtInfo`; defaults match the library's own.

use tauri::State;
use ytinfo_core::{Item, Order, ResourceId, ResultSet, SearchQuery};

use crate::YtInfoState;

const DEFAULT_PART: &str = "snippet";

/// Assemble a keyword search from optional frontend arguments
///
/// `max_results` stays at the library default of 50 when omitted.
pub(crate) fn build_query(
    query: String,
    max_results: Option<u32>,
    order: Option<Order>,
    part: Option<String>,
) -> SearchQuery {
    let mut search = SearchQuery::new(query)
        .order(order.unwrap_or(Order::Relevance))
        .part(part.unwrap_or_else(|| DEFAULT_PART.to_string()));
    if max_results.is_some() {
        search = search.max_results(max_results);
    }
    search
}

/// Search for videos and record the results under the query text
///
/// # Errors
/// Returns error message as String if the search fails
#[tauri::command]
pub async fn search_videos(
    state: State<'_, YtInfoState>,
    query: String,
    max_results: Option<u32>,
    order: Option<Order>,
    part: Option<String>,
) -> Result<(), String> {
    let mut ytinfo = state.ytinfo.lock().await;
    ytinfo
        .search_videos(build_query(query, max_results, order, part))
        .await
        .map_err(|e| e.to_string())
}

/// Search for channels and record the results under the query text
///
/// # Errors
/// Returns error message as String if the search fails
#[tauri::command]
pub async fn search_channels(
    state: State<'_, YtInfoState>,
    query: String,
    max_results: Option<u32>,
    order: Option<Order>,
    part: Option<String>,
) -> Result<(), String> {
    let mut ytinfo = state.ytinfo.lock().await;
    ytinfo
        .search_channels(build_query(query, max_results, order, part))
        .await
        .map_err(|e| e.to_string())
}

/// List videos uploaded by a channel, newest first unless `order` is given
///
/// Omitting `max_results` lists every upload.
#[tauri::command]
pub async fn list_videos_from_channel(
    state: State<'_, YtInfoState>,
    channel_id: String,
    max_results: Option<u32>,
    order: Option<Order>,
    part: Option<String>,
) -> Result<Vec<Item>, String> {
    let ytinfo = state.ytinfo.lock().await;
    ytinfo
        .list_videos_from_channel(
            &channel_id,
            max_results,
            order.unwrap_or(Order::Date),
            part.as_deref().unwrap_or(DEFAULT_PART),
        )
        .await
        .map_err(|e| e.to_string())
}

/// List the entries of a playlist
///
/// Omitting `max_results` lists every entry.
#[tauri::command]
pub async fn list_videos_from_playlist(
    state: State<'_, YtInfoState>,
    playlist_id: String,
    max_results: Option<u32>,
    part: Option<String>,
) -> Result<Vec<Item>, String> {
    let ytinfo = state.ytinfo.lock().await;
    ytinfo
        .list_videos_from_playlist(
            &playlist_id,
            max_results,
            part.as_deref().unwrap_or(DEFAULT_PART),
        )
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_video_search_queries(
    state: State<'_, YtInfoState>,
) -> Result<Vec<String>, String> {
    let ytinfo = state.ytinfo.lock().await;
    Ok(ytinfo.video_search_queries().to_vec())
}

/// Every recorded result set for `query`, empty if never searched
#[tauri::command]
pub async fn get_video_search_results(
    state: State<'_, YtInfoState>,
    query: String,
) -> Result<Vec<ResultSet>, String> {
    let ytinfo = state.ytinfo.lock().await;
    Ok(ytinfo.video_search_results(&query).to_vec())
}

#[tauri::command]
pub async fn get_channel_search_queries(
    state: State<'_, YtInfoState>,
) -> Result<Vec<String>, String> {
    let ytinfo = state.ytinfo.lock().await;
    Ok(ytinfo.channel_search_queries().to_vec())
}

/// Every recorded channel result set for `query`, empty if never searched
#[tauri::command]
pub async fn get_channel_search_results(
    state: State<'_, YtInfoState>,
    query: String,
) -> Result<Vec<ResultSet>, String> {
    let ytinfo = state.ytinfo.lock().await;
    Ok(ytinfo.channel_search_results(&query).to_vec())
}

/// Extract a video, playlist or channel ID from pasted text
///
/// Uses the plugin's channel ID policy. Returns null when nothing
/// recognizable is found.
#[tauri::command]
pub async fn extract_id(
    state: State<'_, YtInfoState>,
    text: String,
) -> Result<Option<ResourceId>, String> {
    let ytinfo = state.ytinfo.lock().await;
    Ok(ytinfo.extract_id(&text))
}
