//! Calendar types for join dates, release dates and session timestamps.

use crate::error::{Result, StreamError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A calendar date, stored as `YYYY-MM-DD`.
///
/// # Examples
///
/// ```rust
/// use streamdb::Date;
///
/// let joined: Date = "2024-02-29".parse().unwrap();
/// assert_eq!(joined.to_string(), "2024-02-29");
/// assert!("2023-02-29".parse::<Date>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date(pub NaiveDate);

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| StreamError::InvalidDate {
                value: s.to_string(),
                expected: "YYYY-MM-DD",
            })
    }
}

/// A point in time with second precision, stored as `YYYY-MM-DD HH:MM:SS`.
///
/// Parsing also accepts an ISO-8601 `T` separator so values copied from
/// other tools work unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub NaiveDateTime);

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
            .map(Self)
            .map_err(|_| StreamError::InvalidDate {
                value: s.to_string(),
                expected: "YYYY-MM-DD HH:MM:SS",
            })
    }
}
