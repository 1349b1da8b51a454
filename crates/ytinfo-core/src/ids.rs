//! Resource ID extraction from free-form text and URLs
//!
//! Recognizes bare video, playlist and channel IDs as well as IDs embedded
//! in watch, short-link, playlist and channel URLs.
//!
//! # Precedence
//!
//! A trimmed input that is itself a bare ID wins first, checked video →
//! playlist → channel. Otherwise the embedded URL forms are searched in the
//! same order and the first match is returned.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::url::{build_channel_url, build_playlist_url, build_video_url};

/// Which resource an ID refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Video,
    Playlist,
    Channel,
}

/// A canonical ID together with the kind of resource it names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub kind: ResourceKind,
    pub id: String,
}

impl ResourceId {
    /// Canonical youtube.com URL for this resource
    pub fn url(&self) -> String {
        match self.kind {
            ResourceKind::Video => build_video_url(&self.id),
            ResourceKind::Playlist => build_playlist_url(&self.id),
            ResourceKind::Channel => build_channel_url(&self.id),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Shape accepted for channel IDs
///
/// Channel IDs have been matched both as `UC` plus 22 characters and as any
/// 24 characters of the ID alphabet. The prefixed form is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChannelIdPolicy {
    /// `UC` followed by 22 ID characters
    #[default]
    UcPrefixed,
    /// Any 24 ID characters
    Bare24,
}

impl ChannelIdPolicy {
    fn pattern(&self) -> &'static str {
        match self {
            ChannelIdPolicy::UcPrefixed => r"UC[0-9A-Za-z_-]{22}",
            ChannelIdPolicy::Bare24 => r"[0-9A-Za-z_-]{24}",
        }
    }
}

/// Whitespace plus the ASCII file, group, record and unit separators
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

const VIDEO_ID: &str = r"[0-9A-Za-z_-]{11}";
const PLAYLIST_ID: &str = r"[0-9A-Za-z_-]{34}";

static UC_PREFIXED: LazyLock<IdExtractor> =
    LazyLock::new(|| IdExtractor::new(ChannelIdPolicy::UcPrefixed));
static BARE_24: LazyLock<IdExtractor> =
    LazyLock::new(|| IdExtractor::new(ChannelIdPolicy::Bare24));

/// Ordered set of ID recognizers for one channel-ID policy
#[derive(Debug)]
pub struct IdExtractor {
    policy: ChannelIdPolicy,
    direct: [(ResourceKind, Regex); 3],
    embedded: [(ResourceKind, Regex); 3],
}

impl IdExtractor {
    /// Compile the recognizers for `policy`
    ///
    /// Prefer [`IdExtractor::shared`] unless a private instance is needed.
    pub fn new(policy: ChannelIdPolicy) -> Self {
        let channel_id = policy.pattern();
        let compile = |pattern: String| Regex::new(&pattern).expect("ID pattern should compile");

        Self {
            policy,
            direct: [
                (ResourceKind::Video, compile(format!("^{VIDEO_ID}$"))),
                (ResourceKind::Playlist, compile(format!("^{PLAYLIST_ID}$"))),
                (ResourceKind::Channel, compile(format!("^{channel_id}$"))),
            ],
            embedded: [
                (
                    ResourceKind::Video,
                    compile(format!(r"(?:v=|/)({VIDEO_ID})(?:[?&]|$)")),
                ),
                (
                    ResourceKind::Playlist,
                    compile(format!(r"list=({PLAYLIST_ID})(?:[?&]|$)")),
                ),
                (
                    ResourceKind::Channel,
                    compile(format!(r"channel/({channel_id})(?:[?&/]|$)")),
                ),
            ],
        }
    }

    /// Process-wide extractor for `policy`, compiled on first use
    pub fn shared(policy: ChannelIdPolicy) -> &'static IdExtractor {
        match policy {
            ChannelIdPolicy::UcPrefixed => &*UC_PREFIXED,
            ChannelIdPolicy::Bare24 => &*BARE_24,
        }
    }

    pub fn policy(&self) -> ChannelIdPolicy {
        self.policy
    }

    /// Extract the best-matching ID from `text`, tagged with its kind
    ///
    /// Never fails: any input without a recognizable ID yields `None`.
    pub fn extract_resource(&self, text: &str) -> Option<ResourceId> {
        let text = text.trim_matches(is_blank);

        let direct = self
            .direct
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(kind, _)| ResourceId {
                kind: *kind,
                id: text.to_string(),
            });
        if direct.is_some() {
            return direct;
        }

        self.embedded.iter().find_map(|(kind, re)| {
            let caps = re.captures(text)?;
            Some(ResourceId {
                kind: *kind,
                id: caps.get(1)?.as_str().to_string(),
            })
        })
    }

    /// Extract the best-matching ID from `text`
    pub fn extract(&self, text: &str) -> Option<String> {
        self.extract_resource(text).map(|resource| resource.id)
    }
}

impl Default for IdExtractor {
    fn default() -> Self {
        Self::new(ChannelIdPolicy::default())
    }
}

/// Extract a video, playlist or channel ID from a bare ID or URL
///
/// Uses the `UC`-prefixed channel ID shape.
///
/// # Example
/// ```
/// use ytinfo_core::extract_id;
/// assert_eq!(extract_id("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
/// assert_eq!(extract_id("https://example.com"), None);
/// ```
pub fn extract_id(text: &str) -> Option<String> {
    IdExtractor::shared(ChannelIdPolicy::default()).extract(text)
}

/// Like [`extract_id`], but also reports which kind of resource matched
///
/// # Example
/// ```
/// use ytinfo_core::{ResourceKind, extract_resource_id};
/// let resource = extract_resource_id("https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw").unwrap();
/// assert_eq!(resource.kind, ResourceKind::Channel);
/// assert_eq!(resource.id, "UC_x5XG1OV2P6uZZ5FSM9Ttw");
/// ```
pub fn extract_resource_id(text: &str) -> Option<ResourceId> {
    IdExtractor::shared(ChannelIdPolicy::default()).extract_resource(text)
}
