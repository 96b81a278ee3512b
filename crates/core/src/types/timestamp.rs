//! Serde helpers for point-in-time fields.
//!
//! Timestamps go over the wire as RFC 3339 UTC strings with millisecond
//! precision and a `Z` suffix, e.g. `2030-01-01T00:00:00.000Z`.
//!
//! ```rust,ignore
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "tickoff_core::types::timestamp")]
//!     at: DateTime<Utc>,
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Format a timestamp in the wire representation.
#[must_use]
pub fn format(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize a timestamp in the wire representation.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(at))
}

/// Deserialize a timestamp from any RFC 3339 string.
///
/// # Errors
///
/// Fails if the value is not a string or not valid RFC 3339.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
