//! Domain feed post model and the raw-entry normalizer.
//!
//! One remote feed entry maps to at most one `FeedPost`. Entries missing
//! required structure (author handle, post text, timestamp) are dropped
//! with a log line; the rest of the page is unaffected. A bad or absent
//! check-in embed never drops the post itself.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use bsky_client::FeedViewPost;

use crate::record::CheckinRecord;

/// Post author, fresh per fetch. Identity is the handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub handle: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

/// The generic social-post payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    /// Raw post text; may contain markup the view layer formats.
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A normalized feed post, optionally carrying a check-in.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedPost {
    /// The post's AT URI; unique within one fetched snapshot.
    pub id: String,
    pub author: Author,
    pub record: PostRecord,
    pub checkin: Option<CheckinRecord>,
}

/// Required fields of the generic post record.
///
/// A timestamp that fails RFC 3339 parsing fails the whole struct, which
/// counts as a structurally absent required field.
#[derive(Debug, Deserialize)]
struct RecordFields {
    text: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

/// Normalize one raw feed entry. `None` means the entry was dropped.
pub fn normalize_entry(entry: &Value) -> Option<FeedPost> {
    let view: FeedViewPost = match serde_json::from_value(entry.clone()) {
        Ok(view) => view,
        Err(err) => {
            warn!(error = %err, "dropping malformed feed entry");
            return None;
        }
    };

    let fields: RecordFields = match serde_json::from_value(view.post.record.clone()) {
        Ok(fields) => fields,
        Err(err) => {
            warn!(uri = %view.post.uri, error = %err, "dropping entry with malformed post record");
            return None;
        }
    };

    Some(FeedPost {
        id: view.post.uri,
        author: Author {
            handle: view.post.author.handle,
            display_name: view.post.author.display_name,
            avatar: view.post.author.avatar,
        },
        record: PostRecord {
            text: fields.text,
            created_at: fields.created_at,
        },
        checkin: CheckinRecord::from_embed(view.post.embed.as_ref()),
    })
}

/// Normalize a page of raw feed entries, preserving server order.
pub fn normalize_feed(entries: &[Value]) -> Vec<FeedPost> {
    entries.iter().filter_map(normalize_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(uri: &str, handle: &str, text: &str) -> Value {
        json!({
            "post": {
                "uri": uri,
                "cid": "bafyreia",
                "author": { "did": "did:plc:abc", "handle": handle },
                "record": { "text": text, "createdAt": "2025-06-10T18:00:00Z" }
            }
        })
    }

    #[test]
    fn well_formed_entry_normalizes() {
        let post = normalize_entry(&entry("at://a/1", "alex.bsky.social", "hi")).unwrap();
        assert_eq!(post.id, "at://a/1");
        assert_eq!(post.author.handle, "alex.bsky.social");
        assert_eq!(post.record.text, "hi");
        assert_eq!(post.checkin, None);
    }

    #[test]
    fn missing_author_drops_entry() {
        let raw = json!({
            "post": {
                "uri": "at://a/1",
                "cid": "bafyreia",
                "record": { "text": "hi", "createdAt": "2025-06-10T18:00:00Z" }
            }
        });
        assert_eq!(normalize_entry(&raw), None);
    }

    #[test]
    fn missing_text_drops_entry() {
        let raw = json!({
            "post": {
                "uri": "at://a/1",
                "cid": "bafyreia",
                "author": { "did": "did:plc:abc", "handle": "alex.bsky.social" },
                "record": { "createdAt": "2025-06-10T18:00:00Z" }
            }
        });
        assert_eq!(normalize_entry(&raw), None);
    }

    #[test]
    fn unparseable_timestamp_drops_entry() {
        let raw = json!({
            "post": {
                "uri": "at://a/1",
                "cid": "bafyreia",
                "author": { "did": "did:plc:abc", "handle": "alex.bsky.social" },
                "record": { "text": "hi", "createdAt": "last tuesday" }
            }
        });
        assert_eq!(normalize_entry(&raw), None);
    }

    #[test]
    fn checkin_embed_is_attached() {
        let mut raw = entry("at://a/1", "alex.bsky.social", "at the cafe");
        raw["post"]["embed"] = json!({
            "$type": "community.lexicon.checkin.record",
            "locations": [
                {
                    "$type": "community.lexicon.location.address",
                    "name": "Mercury Cafe",
                    "locality": "Denver"
                }
            ]
        });

        let post = normalize_entry(&raw).unwrap();
        let checkin = post.checkin.expect("checkin should decode");
        assert_eq!(checkin.location_label(), "Mercury Cafe, Denver");
    }

    #[test]
    fn unrelated_embed_keeps_post_without_checkin() {
        let mut raw = entry("at://a/1", "alex.bsky.social", "pics");
        raw["post"]["embed"] = json!({ "$type": "app.bsky.embed.images#view", "images": [] });

        let post = normalize_entry(&raw).unwrap();
        assert_eq!(post.checkin, None);
    }

    #[test]
    fn malformed_entries_drop_without_breaking_order() {
        let entries = vec![
            entry("at://a/1", "alex.bsky.social", "one"),
            json!({ "post": { "uri": "at://a/2" } }),
            entry("at://a/3", "sam.bsky.social", "three"),
            json!("not even an object"),
            entry("at://a/5", "kai.bsky.social", "five"),
        ];

        let posts = normalize_feed(&entries);
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["at://a/1", "at://a/3", "at://a/5"]);
    }
}
