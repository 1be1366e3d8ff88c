//! Datetime formatting and Serde helpers.
//!
//! The host displays `last_updated` in RFC 850 form
//! (`Monday, 02-Jan-06 15:04:05 UTC`):
//! - Serialization: `DateTime<Utc>` -> RFC 850 string
//! - Deserialization: RFC 850 string, RFC 3339 string or Unix timestamp -> `DateTime<Utc>`

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// chrono format string for RFC 850 timestamps in UTC.
const RFC850_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S UTC";

/// Formats a timestamp as RFC 850.
pub fn format_rfc850(dt: DateTime<Utc>) -> String {
    dt.format(RFC850_FORMAT).to_string()
}

/// Parses an RFC 850 timestamp, falling back to RFC 3339.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, RFC850_FORMAT)
        .map(|naive| naive.and_utc())
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
        })
}

/// `Option<DateTime<Utc>>` serializer/deserializer in RFC 850 form.
pub mod rfc850_option {
    use super::{format_rfc850, parse_timestamp, parse_unix_timestamp, DateTime, Deserialize, Deserializer, Utc};
    use serde::Serializer;

    /// Serializes `Option<DateTime<Utc>>` as RFC 850 or `null`.
    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_some(&format_rfc850(*dt)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `Option<DateTime<Utc>>` from RFC 850, RFC 3339, Unix timestamp, or `null`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OptionalTimestamp {
            String(String),
            I64(i64),
        }

        match Option::<OptionalTimestamp>::deserialize(deserializer)? {
            Some(OptionalTimestamp::String(s)) => parse_timestamp(&s)
                .map(Some)
                .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s:?}"))),
            Some(OptionalTimestamp::I64(ts)) => parse_unix_timestamp(ts)
                .map(Some)
                .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
            None => Ok(None),
        }
    }
}

/// Parses a Unix timestamp with second/millisecond auto-detection.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Values larger than 10^11 are interpreted as milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
