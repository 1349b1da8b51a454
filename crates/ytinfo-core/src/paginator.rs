//! Cursor pagination over the Data API list endpoints
//!
//! Walks `nextPageToken` cursors until the listing is exhausted or the
//! caller's result cap is reached, accumulating items in API order.

use std::future::Future;

use tracing::debug;

use crate::error::Result;
use crate::types::{Endpoint, Item, MAX_PAGE_SIZE, Order, Page, PageRequest};

/// Capability to fetch a single page from a paged listing
///
/// Implemented by [`YouTubeClient`](crate::YouTubeClient) over HTTP; tests
/// substitute a scripted in-memory backend.
pub trait PagedSearch: Send + Sync {
    /// Fetch the page described by `request`
    fn fetch_page(&self, request: &PageRequest) -> impl Future<Output = Result<Page>> + Send;
}

/// How pagination decides that a result cap has been satisfied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PagingPolicy {
    /// Stop once the accumulated item count reaches the cap
    #[default]
    ItemCount,

    /// Subtract a full page from the cap after every request, however many
    /// items the page held, and stop once the budget is spent. Fetches at
    /// most `ceil(cap / 50)` pages.
    BudgetDecrement,
}

/// Fetch every page of `endpoint`, or enough pages to cover `max_results`
///
/// The first request carries no cursor; each following request carries the
/// previous page's `nextPageToken`. When `max_results` is set the result is
/// truncated to that many items.
///
/// # Errors
/// Any backend error is returned as-is and items from earlier pages are
/// dropped.
pub async fn fetch_all<S: PagedSearch>(
    backend: &S,
    endpoint: Endpoint,
    order: Order,
    part: &str,
    max_results: Option<u32>,
    policy: PagingPolicy,
) -> Result<Vec<Item>> {
    let page_size = i64::from(MAX_PAGE_SIZE);
    let mut items: Vec<Item> = Vec::new();
    let mut budget = max_results.map_or(page_size, i64::from);
    let mut request = PageRequest {
        endpoint,
        order,
        part: part.to_string(),
        max_results: MAX_PAGE_SIZE,
        page_token: None,
    };

    loop {
        request.max_results = match (max_results, policy) {
            (None, _) => MAX_PAGE_SIZE,
            (Some(_), PagingPolicy::BudgetDecrement) => budget.clamp(0, page_size) as u32,
            (Some(cap), PagingPolicy::ItemCount) => {
                cap.saturating_sub(items.len() as u32).min(MAX_PAGE_SIZE)
            }
        };

        debug!(
            endpoint = request.endpoint.path(),
            page_size = request.max_results,
            has_cursor = request.page_token.is_some(),
            "Requesting page"
        );

        let page = backend.fetch_page(&request).await?;
        let next_cursor = page.next_cursor().map(str::to_string);
        items.extend(page.items);

        let cap_reached = match max_results {
            None => false,
            Some(cap) => {
                items.truncate(cap as usize);
                budget -= page_size;
                match policy {
                    PagingPolicy::BudgetDecrement => budget <= 0,
                    PagingPolicy::ItemCount => items.len() >= cap as usize,
                }
            }
        };

        match next_cursor {
            Some(cursor) if !cap_reached => request.page_token = Some(cursor),
            Some(_) => {
                debug!(collected = items.len(), "Result cap reached");
                break;
            }
            None => {
                debug!(collected = items.len(), "Listing exhausted");
                break;
            }
        }
    }

    Ok(items)
}
