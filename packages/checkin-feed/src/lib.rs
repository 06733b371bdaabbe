//! Check-in feed retrieval and normalization pipeline.
//!
//! The core behind the feed screen of a check-in client on the AT
//! Protocol: fetch one page of the timeline, normalize heterogeneous
//! entries into [`FeedPost`] values (extracting embedded check-in
//! records where present), and publish the result through an observable
//! loading / failed / loaded state.
//!
//! Structure:
//! - [`location`] — the address/coordinate union and its display label
//! - [`record`] — check-in extraction from an embed payload
//! - [`post`] — domain post model and the per-entry normalizer
//! - [`source`] — transport seam ([`FeedSource`]) and the XRPC-backed
//!   implementation
//! - [`store`] — the observable fetch state machine
//! - [`testing`] — mock feed source for consumers' tests
//!
//! # Example
//!
//! ```rust,ignore
//! use checkin_feed::{BskyFeedSource, FeedStore};
//! use bsky_client::BskyClient;
//! use tokio_util::sync::CancellationToken;
//!
//! let store = FeedStore::new(BskyFeedSource::new(BskyClient::new("https://bsky.social")));
//! let mut states = store.subscribe();
//!
//! let cancel = CancellationToken::new();
//! store.fetch_global_feed(Some(&session), &cancel).await;
//!
//! if let checkin_feed::FeedFetchState::Loaded(posts) = store.state() {
//!     for post in &posts {
//!         if let Some(checkin) = &post.checkin {
//!             println!("{} @ {}", post.author.handle, checkin.location_label());
//!         }
//!     }
//! }
//! ```

pub mod error;
pub mod location;
pub mod post;
pub mod record;
pub mod source;
pub mod store;
pub mod testing;

pub use error::FetchError;
pub use location::{display_label, CheckinLocation};
pub use post::{normalize_entry, normalize_feed, Author, FeedPost, PostRecord};
pub use record::{CheckinRecord, CHECKIN_RECORD_TYPE};
pub use source::{BskyFeedSource, FeedSource};
pub use store::{FeedFetchState, FeedStore};
