//! Observable feed fetch state machine.
//!
//! `FeedStore` is the single writer of `FeedFetchState`; consumers read
//! snapshots or subscribe to the watch channel. One fetch may be in
//! flight at a time — a re-invocation while loading is ignored, so two
//! remote calls never race against the same observable state.
//!
//! ```text
//! Idle ──fetch──► Loading ──success──► Loaded(posts)
//!                    │
//!                    └────failure────► Failed(error)
//! Loaded | Failed ──fetch──► Loading      (retry / refresh)
//! ```

use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use bsky_client::Session;

use crate::error::FetchError;
use crate::post::{normalize_feed, FeedPost};
use crate::source::FeedSource;

/// The three-state (plus idle) view the presentation layer renders from.
///
/// `Failed` carries no post data; a consumer treats it as "no usable
/// content" even when an earlier `Loaded` existed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedFetchState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<FeedPost>),
    Failed(FetchError),
}

/// Owns the feed state and the one-fetch-at-a-time discipline.
pub struct FeedStore<S> {
    source: S,
    state_tx: watch::Sender<FeedFetchState>,
    in_flight: Mutex<()>,
}

impl<S: FeedSource> FeedStore<S> {
    pub fn new(source: S) -> Self {
        let (state_tx, _) = watch::channel(FeedFetchState::Idle);
        Self {
            source,
            state_tx,
            in_flight: Mutex::new(()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FeedFetchState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to state transitions. Every received value is a
    /// complete state; readers never observe a torn posts/error pair.
    pub fn subscribe(&self) -> watch::Receiver<FeedFetchState> {
        self.state_tx.subscribe()
    }

    /// Fetch the global check-in feed and publish the outcome.
    ///
    /// With no session this is a silent no-op: no network call, state
    /// unchanged — whether a session exists is the caller's concern. A
    /// call while a fetch is already in flight is ignored. Cancellation
    /// at the network boundary restores the pre-fetch state, so the
    /// machine never sticks in `Loading`.
    pub async fn fetch_global_feed(&self, session: Option<&Session>, cancel: &CancellationToken) {
        let Some(session) = session else {
            debug!("no session; skipping feed fetch");
            return;
        };

        // Duplicate calls while loading are dropped, not queued.
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("feed fetch already in flight; ignoring");
            return;
        };

        let previous = self.state_tx.borrow().clone();
        self.state_tx.send_replace(FeedFetchState::Loading);

        let result = tokio::select! {
            result = self.source.fetch_timeline(session) => result,
            _ = cancel.cancelled() => {
                debug!("feed fetch canceled; restoring previous state");
                self.state_tx.send_replace(previous);
                return;
            }
        };

        match result {
            Ok(entries) => {
                let posts = normalize_feed(&entries);
                debug!(
                    fetched = entries.len(),
                    kept = posts.len(),
                    "feed fetch complete"
                );
                self.state_tx.send_replace(FeedFetchState::Loaded(posts));
            }
            Err(err) => {
                warn!(error = %err, "feed fetch failed");
                self.state_tx.send_replace(FeedFetchState::Failed(err));
            }
        }
    }
}
