//! Presence helpers — local wall-clock time and working-hours checks.
//!
//! Small conversions the host's presence timeline consumes: what a UTC instant
//! reads on a participant's wall clock, and whether that reading falls inside
//! their declared working hours.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::roster::{ClockTime, WorkingHours};

/// The wall-clock reading of `at` in a named timezone.
///
/// # Errors
/// Returns [`EngineError::UnknownTimezone`] if `timezone` is not a valid IANA
/// identifier.
pub fn local_clock_time(timezone: &str, at: DateTime<Utc>) -> Result<ClockTime> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| EngineError::UnknownTimezone(timezone.to_string()))?;

    Ok(ClockTime::from(at.with_timezone(&tz).time()))
}

/// Whether `at` falls inside a local working-hours window.
///
/// Both bounds are inclusive: an instant reading exactly `start` or exactly
/// `end` on the local clock counts as within working hours, matching how the
/// host application compares `"HH:MM"` strings.
pub fn is_within_working_hours(
    hours: &WorkingHours,
    timezone: &str,
    at: DateTime<Utc>,
) -> Result<bool> {
    let local = local_clock_time(timezone, at)?;
    Ok(hours.start <= local && local <= hours.end)
}
