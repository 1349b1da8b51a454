//! In-memory paged backend for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::json;

use crate::error::Result;
use crate::paginator::PagedSearch;
use crate::types::{Item, Page, PageRequest};

/// Serves pre-scripted pages in order and records every request it sees
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<Result<Page>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedBackend {
    pub fn new(pages: Vec<Page>) -> Self {
        Self::with_results(pages.into_iter().map(Ok).collect())
    }

    pub fn with_results(responses: Vec<Result<Page>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue more pages behind whatever is still scripted
    pub fn push(&self, pages: Vec<Page>) {
        self.responses
            .lock()
            .unwrap()
            .extend(pages.into_iter().map(Ok));
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl PagedSearch for ScriptedBackend {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("backend script exhausted")
    }
}

/// Items `{"id": start}` .. `{"id": start + count - 1}`
pub fn items(start: usize, count: usize) -> Vec<Item> {
    (start..start + count)
        .map(|i| match json!({ "id": i }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        })
        .collect()
}

/// A page of `count` items with an optional cursor
pub fn page(count: usize, next_page_token: Option<&str>) -> Page {
    Page {
        items: items(0, count),
        next_page_token: next_page_token.map(str::to_string),
    }
}
