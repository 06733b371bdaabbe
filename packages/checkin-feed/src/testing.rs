//! Test doubles for the feed pipeline.
//!
//! `MockFeedSource` stands in for the XRPC transport: queue up pages or
//! errors, optionally add latency to hold a fetch in flight, and assert
//! on how many remote calls were made.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use bsky_client::Session;

use crate::error::FetchError;
use crate::source::FeedSource;

/// In-memory feed source with a queue of canned outcomes.
///
/// Each fetch consumes the next queued outcome; an empty queue yields an
/// empty page.
#[derive(Default)]
pub struct MockFeedSource {
    responses: Mutex<VecDeque<Result<Vec<Value>, FetchError>>>,
    calls: AtomicUsize,
    latency: Option<Duration>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page of raw feed entries.
    pub fn with_page(self, entries: Vec<Value>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(entries));
        self
    }

    /// Queue a fetch failure.
    pub fn with_error(self, err: FetchError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Delay each fetch, keeping it observably in flight.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of fetches issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_timeline(&self, _session: &Session) -> Result<Vec<Value>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Session fixture for tests.
pub fn test_session() -> Session {
    Session {
        service: "https://bsky.social".to_string(),
        did: "did:plc:test".to_string(),
        handle: "tester.bsky.social".to_string(),
        access_jwt: "jwt-test-token".to_string(),
    }
}
