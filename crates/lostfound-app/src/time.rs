// Rust guideline compliant 2026-10-19

//! Clock and date-argument helpers.

use crate::error::{AppError, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Which end of a custom range a date argument describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// A date-only value means the start of that day.
    Start,
    /// A date-only value means the last millisecond of that day.
    End,
}

/// Current time in the local offset.
///
/// Calendar filters (today, this month) are evaluated in this offset.
#[must_use]
pub fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Parses a user-supplied range bound.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS]` (or space separated)
/// date-time, or a bare `YYYY-MM-DD` date. Values without an offset are read
/// in `offset`.
///
/// # Arguments
///
/// * `value` - Raw argument
/// * `bound` - Whether the value starts or ends the range
/// * `offset` - Offset for values that carry none
///
/// # Errors
///
/// Returns `InvalidInput` if the value matches none of the formats.
pub fn parse_range_bound(value: &str, bound: RangeBound, offset: FixedOffset) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().map(|date| match bound {
                RangeBound::Start => date.and_time(NaiveTime::MIN),
                RangeBound::End => date
                    .and_hms_milli_opt(23, 59, 59, 999)
                    .unwrap_or_else(|| date.and_time(NaiveTime::MIN)),
            })
        })
        .ok_or_else(|| AppError::InvalidInput(format!("Unrecognized date: {value}")))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidInput(format!("Ambiguous local time: {value}")))
}
