//! Platform timestamp handling.
//!
//! WordPress and WooCommerce emit site-local times without an offset
//! (`2024-03-01T09:30:00`). Anything unparseable maps to `None`.

use chrono::{DateTime, NaiveDateTime};
use serde::Serializer;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde helper for `Option<NaiveDateTime>` fields rendered in [`TIMESTAMP_FORMAT`].
pub fn serialize_optional<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(ts) => serializer.collect_str(&ts.format(TIMESTAMP_FORMAT)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_platform_format() {
        let ts = parse_timestamp("2024-03-01T09:30:00").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01T09:30:00");
    }

    #[test]
    fn test_parses_rfc3339() {
        let ts = parse_timestamp("2024-03-01T09:30:00+02:00").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01T09:30:00");
    }

    #[test]
    fn test_garbage_is_none() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2024-13-45T99:00:00").is_none());
    }
}
