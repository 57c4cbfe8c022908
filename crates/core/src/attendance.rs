//! Attendance ledger rules for members and trainers.
//!
//! Both ledgers key "already checked in" on the calendar day. The day and
//! time-of-day are taken from a single UTC instant per request so that the
//! stored `date` and the comparison value can never disagree.

use crate::error::CoreError;
use crate::types::{Day, TimeOfDay, Timestamp};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const ALREADY_CHECKED_IN: &str = "already checked in today";
pub const SUBSCRIPTION_EXPIRED: &str = "subscription expired, please renew";
pub const INVALID_LESSON_COUNTER: &str = "lesson counter is invalid";
pub const NO_OPEN_CHECK_IN: &str = "no open check-in for today";
pub const INVALID_DATE_FORMAT: &str = "Invalid date format. Use YYYY-MM-DD";

// ---------------------------------------------------------------------------
// Clock helpers
// ---------------------------------------------------------------------------

/// Split a UTC instant into the `(date, check-in time)` pair stored on an
/// attendance row.
pub fn day_and_time(now: Timestamp) -> (Day, TimeOfDay) {
    (now.date_naive(), now.time())
}

// ---------------------------------------------------------------------------
// Check-in policy
// ---------------------------------------------------------------------------

/// Decide whether a member may check in.
///
/// Duplication is checked before credit: a member who spent their last
/// lesson this morning is told they already checked in, not that their
/// subscription expired.
pub fn ensure_member_can_check_in(
    lesson: i32,
    already_checked_in_today: bool,
) -> Result<(), CoreError> {
    if already_checked_in_today {
        return Err(CoreError::Rejected(ALREADY_CHECKED_IN.to_string()));
    }
    if lesson <= 0 {
        return Err(CoreError::Rejected(SUBSCRIPTION_EXPIRED.to_string()));
    }
    Ok(())
}

/// Decide whether a trainer may check in.
///
/// The trainer counter counts sessions taught and starts at zero, so only a
/// negative counter is refused. Checked before the increment.
pub fn ensure_trainer_can_check_in(
    lesson: i32,
    already_checked_in_today: bool,
) -> Result<(), CoreError> {
    if already_checked_in_today {
        return Err(CoreError::Rejected(ALREADY_CHECKED_IN.to_string()));
    }
    if lesson < 0 {
        return Err(CoreError::Rejected(INVALID_LESSON_COUNTER.to_string()));
    }
    Ok(())
}

/// Error returned when check-out finds no open row for today.
pub fn no_open_check_in() -> CoreError {
    CoreError::Missing(NO_OPEN_CHECK_IN.to_string())
}

// ---------------------------------------------------------------------------
// Date filters
// ---------------------------------------------------------------------------

/// Parse a strict `YYYY-MM-DD` day.
///
/// Chrono alone accepts unpadded fields such as `2024-1-5`; the shape check
/// rejects those so the accepted format matches what clients are told.
pub fn parse_day(raw: &str) -> Result<Day, CoreError> {
    let bytes = raw.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(CoreError::Validation(INVALID_DATE_FORMAT.to_string()));
    }
    Day::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(INVALID_DATE_FORMAT.to_string()))
}

/// Parse an inclusive `start..=end` range of days.
pub fn parse_day_range(start: &str, end: &str) -> Result<(Day, Day), CoreError> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;
    if start > end {
        return Err(CoreError::Validation(format!(
            "start date {start} is after end date {end}"
        )));
    }
    Ok((start, end))
}

/// Error returned when a date or range filter matches nothing.
pub fn no_records_for(filter: &str) -> CoreError {
    CoreError::Missing(format!("No attendance records found for {filter}"))
}
