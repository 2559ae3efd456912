//! Forgiving readers for persisted fields. Snapshots written by the browser
//! build store UTC instants with an offset and `""` for "no mood"; both must
//! load without discarding the rest of the snapshot.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

/// Naive ISO wall-clock time as-is, or RFC 3339 with an offset converted to
/// local wall-clock time.
pub fn parse_local_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

pub(crate) fn local_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_local_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Any value that is not a UUID string reads as no reference.
pub(crate) fn weak_uuid<'de, D>(deserializer: D) -> Result<Option<Uuid>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(parsed
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_naive_timestamp_kept_as_is() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 12)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 250)
            .unwrap();
        assert_eq!(parse_local_timestamp("2024-04-12T10:00:00.250"), Some(expected));
    }

    #[test]
    fn test_offset_timestamp_converted_to_local() {
        let expected = DateTime::parse_from_rfc3339("2024-04-12T10:00:00.000Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_local_timestamp("2024-04-12T10:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_garbage_timestamp_rejected() {
        assert_eq!(parse_local_timestamp("yesterday"), None);
        assert_eq!(parse_local_timestamp(""), None);
    }
}
