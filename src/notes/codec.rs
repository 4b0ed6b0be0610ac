//! # Backing Format Codec
//!
//! The store is persisted as a JSON object, and JSON has neither a timestamp
//! type nor integer object keys. Two conventions bridge the gap, and files
//! written by earlier releases depend on both:
//!
//! - **Tagged timestamps**: a timestamp is written as the string
//!   `datetime_` followed by an ISO-8601 local time
//!   (`2024-01-01T12:00:00.123456`). On load, a string carrying the tag is
//!   decoded; if the remainder is not a valid timestamp the raw string is
//!   kept as-is instead of failing.
//! - **Digit keys**: object keys consisting only of ASCII digits are read
//!   back as integers. Anything else passes through unchanged.
//!
//! Both rules are heuristics with no escape mechanism. A key that happens to
//! be all digits is reinterpreted. The tag is only applied to the record's
//! time fields; note text that starts with `datetime_` stays text.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Prefix marking a string as an encoded timestamp.
pub const TIMESTAMP_TAG: &str = "datetime_";

const ISO_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// ISO-8601 rendering with microseconds only when they are non-zero.
pub fn format_iso(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format(ISO_SECONDS).to_string()
    } else {
        ts.format(ISO_MICROS).to_string()
    }
}

/// Parses the ISO-8601 shapes the encoder (and earlier writers) produce:
/// `T` or space separated date-time with optional fraction, or a bare date.
pub fn parse_iso(raw: &str) -> Option<NaiveDateTime> {
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn encode_timestamp(ts: &NaiveDateTime) -> String {
    format!("{}{}", TIMESTAMP_TAG, format_iso(ts))
}

/// Returns `None` when the tag is absent or the remainder does not parse.
pub fn decode_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.strip_prefix(TIMESTAMP_TAG).and_then(parse_iso)
}

/// A JSON object key after digit-key reinterpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKey {
    Id(u64),
    Name(String),
}

pub fn decode_key(raw: &str) -> StoreKey {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(id) = raw.parse() {
            return StoreKey::Id(id);
        }
    }
    StoreKey::Name(raw.to_string())
}

/// True for a non-empty string made only of ASCII digits.
pub fn is_digits(raw: &str) -> bool {
    matches!(decode_key(raw), StoreKey::Id(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        parse_iso(s).unwrap()
    }

    #[test]
    fn encodes_with_tag_and_micros() {
        let t = ts("2024-03-05T10:11:12.000250");
        assert_eq!(encode_timestamp(&t), "datetime_2024-03-05T10:11:12.000250");
    }

    #[test]
    fn omits_fraction_on_whole_seconds() {
        let t = ts("2024-03-05T10:11:12");
        assert_eq!(encode_timestamp(&t), "datetime_2024-03-05T10:11:12");
    }

    #[test]
    fn decodes_tagged_strings() {
        let t = decode_timestamp("datetime_2024-03-05T10:11:12.5").unwrap();
        assert_eq!(format_iso(&t), "2024-03-05T10:11:12.500000");
    }

    #[test]
    fn decodes_bare_date() {
        let t = decode_timestamp("datetime_2024-03-05").unwrap();
        assert_eq!(format_iso(&t), "2024-03-05T00:00:00");
    }

    #[test]
    fn rejects_untagged_or_malformed() {
        assert!(decode_timestamp("2024-03-05T10:11:12").is_none());
        assert!(decode_timestamp("datetime_yesterday").is_none());
        assert!(decode_timestamp("Datetime_2024-03-05").is_none());
    }

    #[test]
    fn digit_keys_become_ids() {
        assert_eq!(decode_key("42"), StoreKey::Id(42));
        assert_eq!(decode_key("007"), StoreKey::Id(7));
        assert_eq!(decode_key("-1"), StoreKey::Name("-1".into()));
        assert_eq!(decode_key("1a"), StoreKey::Name("1a".into()));
        assert_eq!(decode_key(""), StoreKey::Name(String::new()));
    }

    #[test]
    fn is_digits_matches_ids_only() {
        assert!(is_digits("0"));
        assert!(!is_digits(" 1"));
        assert!(!is_digits("+1"));
    }
}
