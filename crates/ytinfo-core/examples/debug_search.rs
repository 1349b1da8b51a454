//! Debug script to exercise search and listings against the live API
//!
//! Run with: YT_DEV_KEY=... cargo run --example debug_search -p ytinfo-core -- "query"
//! Set RUST_LOG=ytinfo_core=debug to see each page request.

use tracing_subscriber::EnvFilter;
use ytinfo_core::{Order, SearchQuery, YtInfo, extract_resource_id};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rust programming".to_string());

    let mut yt = YtInfo::from_env()?;

    println!("Searching videos for '{}' (up to 75 results)...\n", query);
    yt.search_videos(SearchQuery::new(query.as_str()).max_results(Some(75)))
        .await?;

    let results = &yt.video_search_results(&query)[0];
    println!("Found {} results:\n", results.len());

    for (i, item) in results.iter().take(5).enumerate() {
        let snippet = item.get("snippet").cloned().unwrap_or_default();
        let title = snippet["title"].as_str().unwrap_or("<no title>");
        let channel_id = snippet["channelId"].as_str().unwrap_or("");
        println!("{}. {}", i + 1, title);
        println!("   Channel: {}", channel_id);
        if let Some(video_id) = item.get("id").and_then(|id| id["videoId"].as_str())
            && let Some(resource) = extract_resource_id(video_id)
        {
            println!("   URL: {}", resource.url());
        }
        println!();
    }

    // List recent uploads of the first result's channel
    let Some(channel_id) = results
        .first()
        .and_then(|item| item.get("snippet"))
        .and_then(|snippet| snippet["channelId"].as_str())
    else {
        println!("No channel to list");
        return Ok(());
    };

    println!("Listing latest uploads of {}...\n", channel_id);
    let uploads = yt
        .list_videos_from_channel(channel_id, Some(10), Order::Date, "snippet")
        .await?;

    for item in &uploads {
        let title = item
            .get("snippet")
            .and_then(|snippet| snippet["title"].as_str())
            .unwrap_or("<no title>");
        println!("- {}", title);
    }

    Ok(())
}
