//! Deadline input parsing.
//!
//! Clients send deadlines either as a string or as milliseconds since the
//! Unix epoch. Accepted string forms:
//!
//! - RFC 3339 (`2030-01-01T09:30:00Z`, `2030-01-01T09:30:00.000+02:00`)
//! - Date and time without offset, read as UTC (`2030-01-01T09:30`, `2030-01-01T09:30:00`)
//! - Plain date, read as midnight UTC (`2030-01-01`)

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Date-time layouts without an offset, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Errors that can occur when parsing a deadline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeadlineError {
    /// The string is not in any accepted date format.
    #[error("unrecognized deadline format: {0:?}")]
    Unrecognized(String),
    /// The epoch offset does not fit in the supported date range.
    #[error("deadline out of range: {0} ms")]
    OutOfRange(i64),
}

/// A deadline as received from a client, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DeadlineInput {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// A date or date-time string.
    Text(String),
}

impl DeadlineInput {
    /// Whether this input stands for "no deadline given": a blank string or
    /// an epoch offset of zero.
    ///
    /// Partial updates keep the current deadline for such input.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Millis(ms) => *ms == 0,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Parse the input into a UTC point in time.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineError::Unrecognized`] for strings in no accepted
    /// format and [`DeadlineError::OutOfRange`] for unrepresentable epoch
    /// offsets.
    pub fn parse(&self) -> Result<DateTime<Utc>, DeadlineError> {
        match self {
            Self::Millis(ms) => {
                DateTime::from_timestamp_millis(*ms).ok_or(DeadlineError::OutOfRange(*ms))
            }
            Self::Text(text) => parse_text(text),
        }
    }
}

impl From<&str> for DeadlineInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<i64> for DeadlineInput {
    fn from(ms: i64) -> Self {
        Self::Millis(ms)
    }
}

fn parse_text(text: &str) -> Result<DateTime<Utc>, DeadlineError> {
    let trimmed = text.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(at.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DeadlineError::Unrecognized(text.to_owned()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_plain_date_is_midnight_utc() {
        let parsed = DeadlineInput::from("2030-01-01").parse().unwrap();
        assert_eq!(parsed, utc(2030, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let parsed = DeadlineInput::from("2030-01-01T12:00:00+02:00").parse().unwrap();
        assert_eq!(parsed, utc(2030, 1, 1, 10, 0, 0));
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        assert_eq!(
            DeadlineInput::from("2030-06-15T08:30").parse().unwrap(),
            utc(2030, 6, 15, 8, 30, 0)
        );
        assert_eq!(
            DeadlineInput::from("2030-06-15T08:30:45.250").parse().unwrap(),
            utc(2030, 6, 15, 8, 30, 45) + chrono::Duration::milliseconds(250)
        );
    }

    #[test]
    fn test_epoch_millis() {
        let parsed = DeadlineInput::from(1_893_456_000_000_i64).parse().unwrap();
        assert_eq!(parsed, utc(2030, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_epoch_millis_out_of_range() {
        assert_eq!(
            DeadlineInput::from(i64::MAX).parse(),
            Err(DeadlineError::OutOfRange(i64::MAX))
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            DeadlineInput::from("next tuesday").parse(),
            Err(DeadlineError::Unrecognized(_))
        ));
        assert!(matches!(
            DeadlineInput::from("2030-13-45").parse(),
            Err(DeadlineError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_is_unset() {
        assert!(DeadlineInput::from("").is_unset());
        assert!(DeadlineInput::from("   ").is_unset());
        assert!(DeadlineInput::from(0_i64).is_unset());
        assert!(!DeadlineInput::from("2030-01-01").is_unset());
        assert!(!DeadlineInput::from(1_i64).is_unset());
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let number: DeadlineInput = serde_json::from_str("1893456000000").unwrap();
        assert_eq!(number, DeadlineInput::Millis(1_893_456_000_000));

        let text: DeadlineInput = serde_json::from_str("\"2030-01-01\"").unwrap();
        assert_eq!(text, DeadlineInput::Text("2030-01-01".to_string()));
    }
}
