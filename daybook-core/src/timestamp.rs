//! Wire formats for store-assigned timestamps and optional calendar dates.
//!
//! The record store stamps `createdAt` as `YYYY-MM-DD HH:MM:SS`. Backends that
//! speak ISO-8601 are accepted too, so a record survives a round trip through
//! either store.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format the store uses when it assigns `createdAt`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar date format for `date` / `dueDate` fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a store timestamp in any of the accepted shapes.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for fmt in [CREATED_AT_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc())
}

/// Format a timestamp the way the store assigns it.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(CREATED_AT_FORMAT).to_string()
}

/// Parse an optional calendar date. Blank means absent.
pub fn parse_optional_date(raw: &str) -> Option<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(Some(d));
    }
    parse_timestamp(raw).map(|dt| Some(dt.date()))
}

/// `#[serde(with = ...)]` adapter for `Option<NaiveDateTime>` creation stamps.
pub mod created_at {
    use super::{format_timestamp, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => s.serialize_str(&format_timestamp(*ts)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => parse_timestamp(s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{s}'"))),
        }
    }
}

/// `#[serde(with = ...)]` adapter for optional due dates where `""` means none.
pub mod optional_date {
    use super::{parse_optional_date, DATE_FORMAT};
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => s.serialize_str(&d.format(DATE_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            None => Ok(None),
            Some(s) => parse_optional_date(&s)
                .ok_or_else(|| de::Error::custom(format!("invalid date '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_and_iso_timestamps() {
        let a = parse_timestamp("2026-02-20 09:30:00").unwrap();
        let b = parse_timestamp("2026-02-20T09:30:00").unwrap();
        let c = parse_timestamp("2026-02-20T09:30:00.000Z").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(format_timestamp(a), "2026-02-20 09:30:00");
    }

    #[test]
    fn blank_due_date_is_absent() {
        assert_eq!(parse_optional_date(""), Some(None));
        assert_eq!(parse_optional_date("   "), Some(None));
        assert_eq!(
            parse_optional_date("2026-03-01"),
            Some(NaiveDate::from_ymd_opt(2026, 3, 1))
        );
        assert_eq!(parse_optional_date("next week"), None);
    }
}
