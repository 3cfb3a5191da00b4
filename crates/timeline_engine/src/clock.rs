//! Millisecond clock helpers.
//!
//! Fusion math runs on `f64` milliseconds; dates convert at the edges with
//! microsecond resolution so fractional-millisecond steps survive.

use chrono::{DateTime, Utc};

/// Milliseconds since the Unix epoch
pub(crate) fn millis(date: DateTime<Utc>) -> f64 {
    date.timestamp_micros() as f64 / 1_000.0
}

/// Date from milliseconds since the Unix epoch
pub(crate) fn from_millis(ms: f64) -> DateTime<Utc> {
    DateTime::from_timestamp_micros((ms * 1_000.0).round() as i64).unwrap_or_default()
}
