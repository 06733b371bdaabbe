use chrono::{DateTime, Utc};
use serde::Deserialize;

/// An authenticated session against a PDS, produced by the login flow.
///
/// The client treats this as opaque credentials: it never validates or
/// refreshes the token. `service` is the PDS base URL the session was
/// created against.
#[derive(Debug, Clone)]
pub struct Session {
    pub service: String,
    pub did: String,
    pub handle: String,
    pub access_jwt: String,
}

/// Response envelope for `app.bsky.feed.getTimeline`.
///
/// Feed entries are kept as raw JSON values; the remote mixes record
/// types in one array and individual entries may be malformed, so
/// decoding happens per entry downstream rather than failing the whole
/// page here. `cursor` is present on the wire but unused (only the
/// first page is fetched).
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineResponse {
    pub feed: Vec<serde_json::Value>,
    pub cursor: Option<String>,
}

/// One timeline entry: a post plus hydration context we ignore.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedViewPost {
    pub post: PostView,
}

/// Hydrated view of a single post.
#[derive(Debug, Clone, Deserialize)]
pub struct PostView {
    pub uri: String,
    pub cid: String,
    pub author: AuthorView,
    /// The post record itself. Lexicon-polymorphic, so left untyped.
    pub record: serde_json::Value,
    /// Optional embed view (images, quoted records, ...).
    pub embed: Option<serde_json::Value>,
    #[serde(rename = "indexedAt")]
    pub indexed_at: Option<DateTime<Utc>>,
}

/// Author profile as hydrated into a post view.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorView {
    pub did: String,
    pub handle: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timeline_response_decodes_feed_and_cursor() {
        let payload = json!({
            "feed": [
                { "post": { "uri": "at://did:plc:abc/app.bsky.feed.post/1" } },
                { "post": { "uri": "at://did:plc:abc/app.bsky.feed.post/2" } }
            ],
            "cursor": "1718000000000::bafy"
        });

        let resp: TimelineResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(resp.feed.len(), 2);
        assert_eq!(resp.cursor.as_deref(), Some("1718000000000::bafy"));
    }

    #[test]
    fn timeline_response_tolerates_missing_cursor() {
        let resp: TimelineResponse = serde_json::from_value(json!({ "feed": [] })).unwrap();
        assert!(resp.feed.is_empty());
        assert!(resp.cursor.is_none());
    }

    #[test]
    fn feed_view_post_decodes_author_and_record() {
        let payload = json!({
            "post": {
                "uri": "at://did:plc:abc/app.bsky.feed.post/3k2",
                "cid": "bafyreia",
                "author": {
                    "did": "did:plc:abc",
                    "handle": "climber.bsky.social",
                    "displayName": "Alex",
                    "avatar": "https://cdn.example/avatar.jpg"
                },
                "record": { "text": "hello", "createdAt": "2025-06-10T18:00:00Z" },
                "indexedAt": "2025-06-10T18:00:05Z"
            }
        });

        let entry: FeedViewPost = serde_json::from_value(payload).unwrap();
        assert_eq!(entry.post.author.handle, "climber.bsky.social");
        assert_eq!(entry.post.author.display_name.as_deref(), Some("Alex"));
        assert!(entry.post.embed.is_none());
        assert_eq!(entry.post.record["text"], "hello");
    }

    #[test]
    fn author_view_requires_handle() {
        let payload = json!({ "did": "did:plc:abc", "displayName": "Alex" });
        assert!(serde_json::from_value::<AuthorView>(payload).is_err());
    }
}
