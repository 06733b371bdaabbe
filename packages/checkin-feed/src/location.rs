//! Location data attached to a check-in.
//!
//! A check-in carries an ordered list of locations, each either a
//! street-address style entry or a raw coordinate. The lexicon encodes
//! the union with a `$type` discriminator; an entry is exactly one of
//! the two shapes.

use serde::{Deserialize, Serialize};

/// Marker prefix used for the coordinate and fallback labels.
const PIN: &str = "\u{1F4CD}";

/// One location entry of a check-in record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CheckinLocation {
    #[serde(rename = "community.lexicon.location.address")]
    Address {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        street: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locality: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        country: Option<String>,
        #[serde(default, rename = "postalCode", skip_serializing_if = "Option::is_none")]
        postal_code: Option<String>,
    },
    #[serde(rename = "community.lexicon.location.geo")]
    Geo { latitude: f64, longitude: f64 },
}

/// Render a location list to a short display string.
///
/// Address content wins over coordinates regardless of position: the
/// first address with a non-empty `name`/`locality` label is used as-is.
/// An address whose descriptive fields are all empty is skipped rather
/// than producing an empty label. Only when no address yields content
/// does the first coordinate entry (and finally a bare pin) apply.
pub fn display_label(locations: &[CheckinLocation]) -> String {
    for location in locations {
        if let CheckinLocation::Address { name, locality, .. } = location {
            let label = [name, locality]
                .into_iter()
                .filter_map(|part| part.as_deref())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            if !label.is_empty() {
                return label;
            }
        }
    }

    for location in locations {
        if let CheckinLocation::Geo {
            latitude,
            longitude,
        } = location
        {
            return format!("{PIN} {latitude}, {longitude}");
        }
    }

    format!("{PIN} Location")
}
