//! SQLite implementations of the storage traits, plus the column codecs
//! they share.

pub mod activity_repository;
pub mod child_repository;
pub mod feedback_repository;

pub use activity_repository::ActivityRepository;
pub use child_repository::ChildRepository;
pub use feedback_repository::FeedbackRepository;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// Fixed-width RFC 3339 so that text ordering matches time ordering
pub(crate) fn encode_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(crate) fn decode_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid timestamp in column {}: {}", column, value))?;
    Ok(parsed.with_timezone(&Utc))
}

pub(crate) fn encode_list<T: Serialize>(values: &[T]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

pub(crate) fn decode_list<T: DeserializeOwned>(column: &str, value: &str) -> Result<Vec<T>> {
    serde_json::from_str(value).with_context(|| format!("Invalid JSON list in column {}", column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::Intelligence;

    #[test]
    fn test_timestamp_encoding_is_sortable() {
        let earlier = Utc.with_ymd_and_hms(2025, 1, 9, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap();

        let earlier_text = encode_timestamp(&earlier);
        let later_text = encode_timestamp(&later);

        assert_eq!(earlier_text, "2025-01-09T08:00:00.000000000Z");
        assert!(earlier_text < later_text);
        assert_eq!(decode_timestamp("created_at", &later_text).unwrap(), later);
    }

    #[test]
    fn test_intelligence_list_column_uses_wire_names() {
        let encoded =
            encode_list(&[Intelligence::LogicalMathematical, Intelligence::Musical]).unwrap();
        assert_eq!(encoded, "[\"Logical-Mathematical\",\"Musical\"]");

        let decoded: Vec<Intelligence> = decode_list("intelligences", &encoded).unwrap();
        assert_eq!(decoded, vec![Intelligence::LogicalMathematical, Intelligence::Musical]);
    }

    #[test]
    fn test_decode_list_rejects_garbage() {
        assert!(decode_list::<String>("skills", "not json").is_err());
        assert!(decode_timestamp("created_at", "yesterday").is_err());
    }
}
