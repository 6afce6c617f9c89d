//! Onset-time handling.
//!
//! Onset times reach the system from form entry and older records, sometimes
//! without an offset. Unzoned values are interpreted as UTC; everything is
//! stored as a [`jiff::Timestamp`].

use jiff::civil::DateTime;
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};

use crate::error::CoreError;

/// Parse an onset time, treating a naive (unzoned) date-time as UTC.
///
/// Accepts RFC 3339 / ISO 8601 instants (`2025-03-01T10:00:00Z`,
/// `2025-03-01T12:00:00+02:00`) and civil date-times
/// (`2025-03-01T10:00:00`, `2025-03-01 10:00`).
pub fn parse_onset(input: &str) -> Result<Timestamp, CoreError> {
    let trimmed = input.trim();
    if let Ok(ts) = trimmed.parse::<Timestamp>() {
        return Ok(ts);
    }

    let invalid = |reason: String| CoreError::InvalidOnset {
        input: input.to_string(),
        reason,
    };

    let naive: DateTime = trimmed.parse().map_err(|e: jiff::Error| invalid(e.to_string()))?;
    naive
        .to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|e| invalid(e.to_string()))
}

/// Fractional hours elapsed from `start` to `end`. Negative when `start`
/// lies after `end`.
pub fn hours_between(start: Timestamp, end: Timestamp) -> f64 {
    end.duration_since(start).as_secs_f64() / 3600.0
}

/// Onset time from an elapsed "hours + minutes ago" entry. A zero duration
/// means onset was not given.
pub fn onset_from_elapsed(now: Timestamp, hours: u32, minutes: u32) -> Option<Timestamp> {
    let total_minutes = i64::from(hours) * 60 + i64::from(minutes);
    if total_minutes == 0 {
        return None;
    }
    now.checked_sub(SignedDuration::from_mins(total_minutes)).ok()
}

/// Whole hours and minutes since onset, for pre-filling an elapsed-time
/// entry. Onsets in the future read as zero.
pub fn elapsed_parts(onset: Timestamp, now: Timestamp) -> (u32, u32) {
    let minutes = now.duration_since(onset).as_mins().max(0);
    let hours = u32::try_from(minutes / 60).unwrap_or(u32::MAX);
    (hours, (minutes % 60) as u32)
}
