//! YouTube Search Tauri Integration
//!
//! Provides Tauri plugin for frontend integration with the ytinfo search
//! helper.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application. The API key is read from
//! the `YT_DEV_KEY` environment variable (or a `.env` file) when the plugin
//! is set up:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(ytinfo_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Search for videos, then read back every result set for the query
//! await invoke('plugin:ytinfo|search_videos', { query: 'rust async', maxResults: 25 });
//! const sets = await invoke('plugin:ytinfo|get_video_search_results', { query: 'rust async' });
//!
//! // Resolve an ID from a pasted URL
//! const id = await invoke('plugin:ytinfo|extract_id', { text: 'https://youtu.be/dQw4w9WgXcQ' });
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use ytinfo_core::{ClientConfig, YtInfo};

mod commands;

/// Thread-safe wrapper for YtInfo
///
/// Uses Arc<Mutex<>> because searches record into the instance's history
/// and commands may run concurrently.
pub struct YtInfoState {
    pub(crate) ytinfo: Arc<Mutex<YtInfo>>,
}

impl YtInfoState {
    /// Create a new YtInfoState from explicit client configuration
    ///
    /// # Errors
    /// Returns error string if client initialization fails
    pub fn new(config: ClientConfig) -> Result<Self, String> {
        let ytinfo = YtInfo::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self::from_ytinfo(ytinfo))
    }

    /// Wrap an already configured instance
    pub fn from_ytinfo(ytinfo: YtInfo) -> Self {
        Self {
            ytinfo: Arc::new(Mutex::new(ytinfo)),
        }
    }
}

/// Initialize the ytinfo plugin
///
/// # Returns
/// A configured TauriPlugin ready to be registered with the Tauri application
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_channel_id_policy(ChannelIdPolicy::default())
}

/// Initialize the ytinfo plugin with the channel ID shape `extract_id`
/// should accept
pub fn init_with_channel_id_policy<R: Runtime>(
    channel_id_policy: ChannelIdPolicy,
) -> TauriPlugin<R> {
    Builder::new("ytinfo")
        .invoke_handler(tauri::generate_handler![
            commands::search_videos,
            commands::search_channels,
            commands::list_videos_from_channel,
            commands::list_videos_from_playlist,
            commands::get_video_search_queries,
            commands::get_video_search_results,
            commands::get_channel_search_queries,
            commands::get_channel_search_results,
            commands::extract_id
        ])
        .setup(move |app, _api| {
            let config = ClientConfig::from_env().map_err(|e| e.to_string())?;
            let ytinfo = YtInfo::with_config(config)
                .map_err(|e| e.to_string())?
                .with_channel_id_policy(channel_id_policy);
            app.manage(YtInfoState::from_ytinfo(ytinfo));
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use ytinfo_core::{ChannelIdPolicy, Item, Order, ResourceId, ResultSet};
