//! Main search API
//!
//! Combines a paged backend with the paginator and keeps a history of
//! every keyword search made through the instance.

use tracing::info;

use crate::client::{ClientConfig, YouTubeClient};
use crate::error::{Result, YtInfoError};
use crate::history::SearchHistory;
use crate::ids::{ChannelIdPolicy, IdExtractor, ResourceId};
use crate::paginator::{PagedSearch, PagingPolicy, fetch_all};
use crate::types::{Endpoint, Item, Order, ResultSet, SearchQuery};

/// Main search API for the YouTube Data API
///
/// Keyword searches are recorded per query text and can be read back later;
/// channel and playlist listings are returned directly.
///
/// Search methods take `&mut self`. Share an instance across threads
/// behind a mutex.
pub struct YtInfo<S = YouTubeClient> {
    backend: S,
    policy: PagingPolicy,
    channel_id_policy: ChannelIdPolicy,
    video_searches: SearchHistory,
    channel_searches: SearchHistory,
}

impl YtInfo<YouTubeClient> {
    /// Create an instance talking to the Data API with `config`
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(YouTubeClient::with_config(config)?))
    }

    /// Create an instance configured from the `YT_DEV_KEY` environment variable
    /// or a `.env` file
    ///
    /// # Errors
    /// - `MissingApiKey` if the variable is unset
    /// - `HttpError` if HTTP client initialization fails
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }
}

impl<S: PagedSearch> YtInfo<S> {
    /// Wrap an arbitrary paged backend
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            policy: PagingPolicy::default(),
            channel_id_policy: ChannelIdPolicy::default(),
            video_searches: SearchHistory::new(),
            channel_searches: SearchHistory::new(),
        }
    }

    /// Choose how result caps end pagination
    pub fn with_policy(mut self, policy: PagingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> PagingPolicy {
        self.policy
    }

    /// Choose which channel ID shape [`YtInfo::extract_id`] accepts
    pub fn with_channel_id_policy(mut self, channel_id_policy: ChannelIdPolicy) -> Self {
        self.channel_id_policy = channel_id_policy;
        self
    }

    pub fn channel_id_policy(&self) -> ChannelIdPolicy {
        self.channel_id_policy
    }

    /// Extract a video, playlist or channel ID from `text` using this
    /// instance's channel ID policy
    pub fn extract_id(&self, text: &str) -> Option<ResourceId> {
        IdExtractor::shared(self.channel_id_policy).extract_resource(text)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Search for videos and record the result set under the query text
    ///
    /// # Arguments
    /// * `query` - Query text, or a [`SearchQuery`] with order, part and cap
    ///
    /// # Errors
    /// Any backend error; nothing is recorded in that case
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> ytinfo_core::Result<()> {
    /// use ytinfo_core::{Order, SearchQuery, YtInfo};
    /// let mut yt = YtInfo::from_env()?;
    /// yt.search_videos("rust async").await?;
    /// yt.search_videos(SearchQuery::new("rust async").order(Order::ViewCount)).await?;
    /// assert_eq!(yt.video_search_results("rust async").len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_videos(&mut self, query: impl Into<SearchQuery>) -> Result<()> {
        let query = query.into();
        let endpoint = Endpoint::SearchVideos {
            query: query.query.clone(),
        };
        let results = self.run_search(endpoint, &query).await?;

        info!(query = %query.query, count = results.len(), "Recorded video search");
        self.video_searches.record(&query.query, results);
        Ok(())
    }

    /// Search for channels and record the result set under the query text
    ///
    /// # Errors
    /// Any backend error; nothing is recorded in that case
    pub async fn search_channels(&mut self, query: impl Into<SearchQuery>) -> Result<()> {
        let query = query.into();
        let endpoint = Endpoint::SearchChannels {
            query: query.query.clone(),
        };
        let results = self.run_search(endpoint, &query).await?;

        info!(query = %query.query, count = results.len(), "Recorded channel search");
        self.channel_searches.record(&query.query, results);
        Ok(())
    }

    async fn run_search(&self, endpoint: Endpoint, query: &SearchQuery) -> Result<ResultSet> {
        fetch_all(
            &self.backend,
            endpoint,
            query.order,
            &query.part,
            query.max_results,
            self.policy,
        )
        .await
    }

    /// List videos uploaded by a channel
    ///
    /// # Arguments
    /// * `channel_id` - Channel ID (e.g., "UC_x5XG1OV2P6uZZ5FSM9Ttw")
    /// * `max_results` - Result cap, `None` for every video
    /// * `order` - Result ordering, [`Order::Date`] is the usual choice
    /// * `part` - Response parts, usually "snippet"
    ///
    /// # Errors
    /// - `InvalidId` if channel_id is empty or whitespace only
    /// - any backend error
    pub async fn list_videos_from_channel(
        &self,
        channel_id: &str,
        max_results: Option<u32>,
        order: Order,
        part: &str,
    ) -> Result<Vec<Item>> {
        let channel_id = channel_id.trim();
        if channel_id.is_empty() {
            return Err(YtInfoError::InvalidId(
                "Channel ID cannot be empty".to_string(),
            ));
        }

        let endpoint = Endpoint::ChannelUploads {
            channel_id: channel_id.to_string(),
        };
        fetch_all(&self.backend, endpoint, order, part, max_results, self.policy).await
    }

    /// List the entries of a playlist
    ///
    /// # Arguments
    /// * `playlist_id` - Playlist ID (e.g., "PLv3TTBr1W_9tppikBxAE_G6qjWdBljBHJ")
    /// * `max_results` - Result cap, `None` for every entry
    /// * `part` - Response parts, usually "snippet"
    ///
    /// # Errors
    /// - `InvalidId` if playlist_id is empty or whitespace only
    /// - any backend error
    pub async fn list_videos_from_playlist(
        &self,
        playlist_id: &str,
        max_results: Option<u32>,
        part: &str,
    ) -> Result<Vec<Item>> {
        let playlist_id = playlist_id.trim();
        if playlist_id.is_empty() {
            return Err(YtInfoError::InvalidId(
                "Playlist ID cannot be empty".to_string(),
            ));
        }

        let endpoint = Endpoint::PlaylistItems {
            playlist_id: playlist_id.to_string(),
        };
        // playlistItems takes no order; the value is never sent
        fetch_all(
            &self.backend,
            endpoint,
            Order::Relevance,
            part,
            max_results,
            self.policy,
        )
        .await
    }

    /// Query texts of every video search, in first-searched order
    pub fn video_search_queries(&self) -> &[String] {
        self.video_searches.queries()
    }

    /// Result sets of every video search for `query`, oldest first
    ///
    /// Empty when `query` was never searched.
    pub fn video_search_results(&self, query: &str) -> &[ResultSet] {
        self.video_searches.results(query)
    }

    /// Query texts of every channel search, in first-searched order
    pub fn channel_search_queries(&self) -> &[String] {
        self.channel_searches.queries()
    }

    /// Result sets of every channel search for `query`, oldest first
    ///
    /// Empty when `query` was never searched.
    pub fn channel_search_results(&self, query: &str) -> &[ResultSet] {
        self.channel_searches.results(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedBackend, page};

    fn ytinfo(pages: Vec<crate::types::Page>) -> YtInfo<ScriptedBackend> {
        YtInfo::new(ScriptedBackend::new(pages))
    }

    #[test]
    fn test_with_config_creation() {
        let yt = YtInfo::with_config(ClientConfig::new("secret"));
        assert!(yt.is_ok());
    }

    #[tokio::test]
    async fn test_search_videos_records_history() {
        let mut yt = ytinfo(vec![page(2, None)]);

        yt.search_videos("test query").await.unwrap();

        assert_eq!(yt.video_search_queries(), ["test query".to_string()]);
        let sets = yt.video_search_results("test query");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 2);

        let requests = yt.backend().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].endpoint,
            Endpoint::SearchVideos {
                query: "test query".to_string()
            }
        );
        assert_eq!(requests[0].order, Order::Relevance);
        assert_eq!(requests[0].part, "snippet");
        assert_eq!(requests[0].max_results, 50);
        assert_eq!(requests[0].page_token, None);
    }

    #[tokio::test]
    async fn test_repeated_search_appends() {
        let mut yt = ytinfo(vec![page(2, None), page(1, None)]);

        yt.search_videos("x").await.unwrap();
        yt.search_videos("x").await.unwrap();

        let sets = yt.video_search_results("x");
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].len(), 2);
        assert_eq!(sets[1].len(), 1);
        assert_eq!(yt.video_search_queries().len(), 1);
    }

    #[tokio::test]
    async fn test_multiple_searches() {
        let mut yt = ytinfo(vec![page(2, None), page(2, None)]);

        yt.search_videos("query 1").await.unwrap();
        yt.search_videos("query 2").await.unwrap();

        assert_eq!(
            yt.video_search_queries(),
            ["query 1".to_string(), "query 2".to_string()]
        );
    }

    #[test]
    fn test_never_searched_is_empty() {
        let yt = ytinfo(Vec::new());
        assert!(yt.video_search_results("never-searched").is_empty());
        assert!(yt.channel_search_results("never-searched").is_empty());
        assert!(yt.video_search_queries().is_empty());
    }

    #[tokio::test]
    async fn test_search_channels_uses_own_history() {
        let mut yt = ytinfo(vec![page(3, None)]);

        yt.search_channels(SearchQuery::new("rust").order(Order::VideoCount))
            .await
            .unwrap();

        assert_eq!(yt.channel_search_queries(), ["rust".to_string()]);
        assert_eq!(yt.channel_search_results("rust")[0].len(), 3);
        assert!(yt.video_search_results("rust").is_empty());

        let request = &yt.backend().requests()[0];
        assert_eq!(
            request.endpoint,
            Endpoint::SearchChannels {
                query: "rust".to_string()
            }
        );
        assert_eq!(request.order, Order::VideoCount);
    }

    #[tokio::test]
    async fn test_failed_search_records_nothing() {
        let mut yt = YtInfo::new(ScriptedBackend::with_results(vec![Err(
            YtInfoError::ApiError {
                code: 403,
                message: "quotaExceeded".to_string(),
            },
        )]));

        let result = yt.search_videos("x").await;

        assert!(matches!(result, Err(YtInfoError::ApiError { code: 403, .. })));
        assert!(yt.video_search_queries().is_empty());
    }

    #[tokio::test]
    async fn test_search_cap_spans_pages() {
        let mut yt = ytinfo(vec![page(50, Some("p2")), page(50, Some("p3"))]);

        yt.search_videos(SearchQuery::new("x").max_results(Some(60)))
            .await
            .unwrap();

        assert_eq!(yt.video_search_results("x")[0].len(), 60);
        let sizes: Vec<_> = yt.backend().requests().iter().map(|r| r.max_results).collect();
        assert_eq!(sizes, vec![50, 10]);
    }

    #[tokio::test]
    async fn test_list_videos_from_channel_truncates() {
        let yt = ytinfo(vec![page(2, None)]);

        let videos = yt
            .list_videos_from_channel("UC_x5XG1OV2P6uZZ5FSM9Ttw", Some(1), Order::Date, "snippet")
            .await
            .unwrap();

        assert_eq!(videos.len(), 1);
        let request = &yt.backend().requests()[0];
        assert_eq!(request.max_results, 1);
        assert_eq!(request.order, Order::Date);
    }

    #[tokio::test]
    async fn test_list_videos_from_channel_without_cap_walks_all_pages() {
        let yt = ytinfo(vec![page(50, Some("p2")), page(20, None)]);

        let videos = yt
            .list_videos_from_channel("UC_x5XG1OV2P6uZZ5FSM9Ttw", None, Order::Date, "snippet")
            .await
            .unwrap();

        assert_eq!(videos.len(), 70);
        assert!(yt.video_search_queries().is_empty());
    }

    #[tokio::test]
    async fn test_list_videos_from_channel_budget_policy() {
        let yt = ytinfo(vec![page(2, Some("p2")), page(2, None)])
            .with_policy(PagingPolicy::BudgetDecrement);

        let videos = yt
            .list_videos_from_channel("UC_x5XG1OV2P6uZZ5FSM9Ttw", Some(4), Order::Date, "snippet")
            .await
            .unwrap();

        assert_eq!(yt.policy(), PagingPolicy::BudgetDecrement);
        assert_eq!(videos.len(), 2);
        assert_eq!(yt.backend().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_list_videos_from_channel_empty_id() {
        let yt = ytinfo(Vec::new());
        let result = yt
            .list_videos_from_channel("   ", None, Order::Date, "snippet")
            .await;
        match result {
            Err(YtInfoError::InvalidId(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidId error"),
        }
        assert!(yt.backend().requests().is_empty());
    }

    #[tokio::test]
    async fn test_list_videos_from_playlist() {
        let yt = ytinfo(vec![page(50, Some("p2")), page(50, Some("p3")), page(5, None)]);

        let entries = yt
            .list_videos_from_playlist("PLv3TTBr1W_9tppikBxAE_G6qjWdBljBHJ", None, "snippet")
            .await
            .unwrap();

        assert_eq!(entries.len(), 105);
        let requests = yt.backend().requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(
            requests[0].endpoint,
            Endpoint::PlaylistItems {
                playlist_id: "PLv3TTBr1W_9tppikBxAE_G6qjWdBljBHJ".to_string()
            }
        );
        assert_eq!(requests[2].page_token.as_deref(), Some("p3"));
    }

    #[tokio::test]
    async fn test_list_videos_from_playlist_empty_id() {
        let yt = ytinfo(Vec::new());
        let result = yt.list_videos_from_playlist("", Some(10), "snippet").await;
        assert!(matches!(result, Err(YtInfoError::InvalidId(_))));
    }

    #[tokio::test]
    async fn test_backend_reused_across_calls() {
        let mut yt = ytinfo(vec![page(1, None)]);
        yt.search_videos("first").await.unwrap();

        yt.backend().push(vec![page(4, None)]);
        yt.search_channels("second").await.unwrap();

        assert_eq!(yt.channel_search_results("second")[0].len(), 4);
        assert_eq!(yt.backend().requests().len(), 2);
    }

    #[test]
    fn test_extract_id_follows_channel_id_policy() {
        let bare = "AB_x5XG1OV2P6uZZ5FSM9Ttw";

        let yt = ytinfo(Vec::new());
        assert_eq!(yt.channel_id_policy(), ChannelIdPolicy::UcPrefixed);
        assert_eq!(yt.extract_id(bare), None);

        let yt = ytinfo(Vec::new()).with_channel_id_policy(ChannelIdPolicy::Bare24);
        let resource = yt.extract_id(bare).unwrap();
        assert_eq!(resource.kind, crate::ids::ResourceKind::Channel);
        assert_eq!(resource.id, bare);
        assert!(yt.backend().requests().is_empty());
    }
}
