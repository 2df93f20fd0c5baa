//! Deadline parsing.
//!
//! A deadline arrives as a calendar date (`2025-05-01`), an ISO 8601
//! date-time with or without an offset, or milliseconds since the Unix
//! epoch. Calendar dates are pinned to midnight UTC, and date-times without
//! an offset are read as UTC.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;

const DATE_FORMAT: &str = "%Y-%m-%d";
/// `T` or space separator, optional fractional seconds
const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a textual deadline into a UTC timestamp.
#[track_caller]
pub fn parse_deadline(value: &str) -> CoreErrorResult<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(naive.and_utc());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::InvalidDeadline {
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Interpret a number as milliseconds since the Unix epoch.
#[track_caller]
pub fn deadline_from_millis(millis: i64) -> CoreErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| CoreError::InvalidDeadline {
        value: millis.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
