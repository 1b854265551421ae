//! Publish and update dates for content records.
//!
//! Frontmatter dates are authored as strings in one of these shapes:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `2024-01-15` | midnight of that day |
//! | `2024-01-15T08:30:00` / `2024-01-15 08:30:00` | local wall time, kept as-is |
//! | `2024-01-15T08:30:00+08:00` / `...Z` | RFC 3339, normalized to UTC |

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// A content date, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentDate(NaiveDateTime);

impl ContentDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|d| Self(d.and_time(NaiveTime::MIN)))
    }

    /// Parse any of the accepted frontmatter shapes.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self(date.and_time(NaiveTime::MIN)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.naive_utc()));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    #[inline]
    fn is_midnight(&self) -> bool {
        self.0.time().num_seconds_from_midnight() == 0
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_midnight() {
            write!(f, "{}", self.0.format("%Y-%m-%d"))
        } else {
            write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
        }
    }
}

impl FromStr for ContentDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unrecognized date `{s}`"))
    }
}

impl Serialize for ContentDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = ContentDate::parse("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_local_datetime() {
        let date = ContentDate::parse("2024-06-15T14:30:45").unwrap();
        assert_eq!(date.to_string(), "2024-06-15T14:30:45");

        let spaced = ContentDate::parse("2024-06-15 14:30:45").unwrap();
        assert_eq!(date, spaced);
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let date = ContentDate::parse("2024-01-01T02:00:00+08:00").unwrap();
        assert_eq!(date.to_string(), "2023-12-31T18:00:00");
        assert_eq!(date.year(), 2023);

        let zulu = ContentDate::parse("2024-03-01T00:00:00Z").unwrap();
        assert_eq!(zulu.to_string(), "2024-03-01");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(ContentDate::parse("").is_none());
        assert!(ContentDate::parse("2024-13-01").is_none());
        assert!(ContentDate::parse("2023-02-29").is_none());
        assert!(ContentDate::parse("yesterday").is_none());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            ContentDate::parse("  2024-02-10 "),
            ContentDate::from_ymd(2024, 2, 10)
        );
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = ContentDate::parse("2024-01-15").unwrap();
        let b = ContentDate::parse("2024-01-15T09:00:00").unwrap();
        let c = ContentDate::parse("2024-02-01").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde_as_string() {
        let date = ContentDate::from_ymd(2024, 2, 10).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-02-10\"");

        let back: ContentDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);

        let bad: Result<ContentDate, _> = serde_json::from_str("\"not a date\"");
        assert!(bad.is_err());
    }
}
