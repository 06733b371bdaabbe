//! Check-in record extraction from a post's embed payload.
//!
//! Most feed posts carry no check-in at all, so "not a check-in" is the
//! common, non-error outcome here. The decoder only commits to a
//! `CheckinRecord` when the embed's `$type` discriminator matches, and
//! individual location entries that fail to decode are skipped instead
//! of discarding the record.

use serde_json::Value;
use tracing::debug;

use crate::location::CheckinLocation;

/// Lexicon type for a check-in record.
pub const CHECKIN_RECORD_TYPE: &str = "community.lexicon.checkin.record";

/// Embed view wrapper `getTimeline` hydrates quoted records into.
const RECORD_VIEW_TYPE: &str = "app.bsky.embed.record#view";

/// Structured check-in payload attached to a post.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckinRecord {
    pub locations: Vec<CheckinLocation>,
}

impl CheckinRecord {
    /// Decode a check-in from a post's embed, if one is present.
    ///
    /// Accepts both the bare record and the `app.bsky.embed.record#view`
    /// wrapper the timeline hydrates it into. Returns `None` for absent
    /// embeds, other record types, and shapes that are not objects; none
    /// of those are errors.
    pub fn from_embed(embed: Option<&Value>) -> Option<Self> {
        let record = checkin_value(embed?)?;

        let locations = match record.get("locations") {
            Some(Value::Array(entries)) => decode_locations(entries),
            // A check-in with no location list is still a check-in.
            _ => Vec::new(),
        };

        Some(Self { locations })
    }

    /// Short display string for this check-in's locations.
    pub fn location_label(&self) -> String {
        crate::location::display_label(&self.locations)
    }
}

/// Find the check-in record object inside an embed value, unwrapping the
/// record-view envelope when present.
fn checkin_value(embed: &Value) -> Option<&Value> {
    let candidate = match embed.get("$type").and_then(Value::as_str) {
        Some(RECORD_VIEW_TYPE) => embed.get("record")?.get("value")?,
        _ => embed,
    };

    match candidate.get("$type").and_then(Value::as_str) {
        Some(CHECKIN_RECORD_TYPE) => Some(candidate),
        _ => None,
    }
}

fn decode_locations(entries: &[Value]) -> Vec<CheckinLocation> {
    entries
        .iter()
        .filter_map(|entry| match serde_json::from_value(entry.clone()) {
            Ok(location) => Some(location),
            Err(err) => {
                debug!(error = %err, "skipping malformed check-in location");
                None
            }
        })
        .collect()
}
