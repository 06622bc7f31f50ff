//! Shared data shapes for the changelog page.
//!
//! `RawEntry` is the record exactly as the backend transmits it;
//! [`Entry`] is the same record after the loader has rendered its
//! markdown and parsed its timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Changelog record as transmitted by the backend.
///
/// Timestamps stay as wire strings here; parsing them is an explicit
/// step with an inspectable failure, see [`parse_timestamp`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub id: String,
    pub text: String, // Markdown 文本
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Changelog record enriched for rendering.
///
/// `html` is derived from `text` at load time and never persisted.
/// The value is immutable once constructed and lives for one page
/// render only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: String,
    pub text: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub html: String,
}

/// A wire timestamp that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}")]
pub struct InvalidTimestamp {
    pub value: String,
}

/// Parse an RFC 3339 wire timestamp, normalizing any offset to UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, InvalidTimestamp> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| InvalidTimestamp {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn parse_timestamp_reads_utc_midnight() {
        let parsed = parse_timestamp("2024-01-01T00:00:00Z").expect("should parse");
        let expected = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_timestamp_normalizes_offset_to_utc() {
        let parsed = parse_timestamp("2024-06-15T10:30:00+02:00").expect("should parse");
        let expected = Utc
            .with_ymd_and_hms(2024, 6, 15, 8, 30, 0)
            .single()
            .expect("valid date");
        assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_timestamp_rejects_garbage_and_keeps_value() {
        let err = parse_timestamp("yesterday-ish").expect_err("should fail");
        assert_eq!(err.value, "yesterday-ish");
    }

    #[test]
    fn raw_entry_keeps_empty_tags_as_empty_sequence() {
        let json = r##"{
            "id": "entry-1",
            "text": "# Hello",
            "tags": [],
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        }"##;
        let entry: RawEntry = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(entry.tags, Vec::<String>::new());
    }
}
