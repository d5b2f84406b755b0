//! Index name timestamp parsing
//!
//! Index names carry their creation time as separator-joined digit groups:
//! `YYYY.MM.DD` for daily indices and `YYYY.MM.DD.HH` for hourly ones.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use thiserror::Error;

/// Hour given to daily indices when they are lifted to a full timestamp.
///
/// Daily indices compare as if created at 03:00, not midnight. Hourly
/// comparisons against daily names are shifted by these three hours.
pub const DAILY_SYNTHETIC_HOUR: u32 = 3;

/// Whether an index timestamp carries day or hour precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// `YYYY.MM.DD`
    Daily,
    /// `YYYY.MM.DD.HH`
    Hourly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Daily => f.write_str("daily"),
            Granularity::Hourly => f.write_str("hourly"),
        }
    }
}

/// Why a suffix could not be turned into a timestamp
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 3 or 4 date parts, found {0}")]
    WrongPartCount(usize),

    #[error("date part {0:?} is not a number")]
    NonNumeric(String),

    #[error("{0} is not a valid calendar date and hour")]
    OutOfRange(String),
}

/// Parsed index timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexTimestamp {
    /// Wall-clock time the name encodes, with no timezone attached
    pub at: NaiveDateTime,
    pub granularity: Granularity,
}

/// How index names are put together: `<prefix><date parts joined by separator>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPattern {
    pub prefix: String,
    pub separator: String,
}

impl IndexPattern {
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
        }
    }

    pub fn matches(&self, index: &str) -> bool {
        index.starts_with(&self.prefix)
    }

    /// The date part of `index`, or `None` when the prefix is missing
    pub fn suffix<'n>(&self, index: &'n str) -> Option<&'n str> {
        index.strip_prefix(self.prefix.as_str())
    }
}

impl Default for IndexPattern {
    fn default() -> Self {
        Self::new("logstash-", ".")
    }
}

/// Digit groups of a suffix whose shape has been checked but which has
/// not yet been turned into a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    suffix: String,
    parts: Vec<u32>,
    granularity: Granularity,
}

impl DateParts {
    /// Split `suffix` on `separator`, requiring 3 or 4 all-digit parts
    pub fn split(suffix: &str, separator: &str) -> Result<Self, ParseError> {
        let raw: Vec<&str> = suffix.split(separator).collect();

        let granularity = match raw.len() {
            3 => Granularity::Daily,
            4 => Granularity::Hourly,
            n => return Err(ParseError::WrongPartCount(n)),
        };

        let mut parts = Vec::with_capacity(4);
        for part in raw {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::NonNumeric(part.to_string()));
            }
            // All digits, so the only failure left is overflow
            let value = part
                .parse::<u32>()
                .map_err(|_| ParseError::OutOfRange(suffix.to_string()))?;
            parts.push(value);
        }

        Ok(Self {
            suffix: suffix.to_string(),
            parts,
            granularity,
        })
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Build the point in time, appending [`DAILY_SYNTHETIC_HOUR`] to daily parts
    pub fn into_timestamp(self) -> Result<IndexTimestamp, ParseError> {
        let Self {
            suffix,
            mut parts,
            granularity,
        } = self;
        if granularity == Granularity::Daily {
            parts.push(DAILY_SYNTHETIC_HOUR);
        }

        let year = i32::try_from(parts[0]).map_err(|_| ParseError::OutOfRange(suffix.clone()))?;
        let at = NaiveDate::from_ymd_opt(year, parts[1], parts[2])
            .and_then(|date| date.and_hms_opt(parts[3], 0, 0))
            .ok_or(ParseError::OutOfRange(suffix))?;

        Ok(IndexTimestamp { at, granularity })
    }
}

/// Convert an index name suffix into the point in time it encodes.
///
/// Three-part suffixes get [`DAILY_SYNTHETIC_HOUR`] appended before
/// conversion. No timezone offset is applied; callers compare the result
/// against a reference time taken in the same frame.
pub fn parse_timestamp(suffix: &str, separator: &str) -> Result<IndexTimestamp, ParseError> {
    DateParts::split(suffix, separator)?.into_timestamp()
}
