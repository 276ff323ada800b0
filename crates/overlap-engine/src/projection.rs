//! Timezone projection — local working hours to absolute UTC intervals.
//!
//! The leaf component of the engine: maps a participant's wall-clock window in
//! a named timezone onto one UTC reference day, using `chrono-tz` for offset
//! and DST rules. Each endpoint is resolved independently with the offset
//! valid at that local instant, so a window crossing a DST transition
//! legitimately yields a UTC duration that differs from its wall-clock
//! duration by the shift. That difference is preserved, not corrected.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{EngineError, Result};
use crate::roster::WorkingHours;

/// A half-open `[start, end)` interval in absolute UTC time.
///
/// Derived per invocation and discarded after use — never stored, because DST
/// offsets can change the projection from one reference day to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UtcInterval {
    /// Interval length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether this interval shares any time with `[other_start, other_end)`.
    /// Touching endpoints do not count as overlap.
    pub fn intersects(&self, other_start: DateTime<Utc>, other_end: DateTime<Utc>) -> bool {
        self.start < other_end && other_start < self.end
    }
}

/// Project a local working-hours window onto `reference_date` as a UTC
/// interval.
///
/// # Errors
/// Returns [`EngineError::InvalidWorkingHours`] if `start >= end` in local
/// wall-clock terms, and [`EngineError::UnknownTimezone`] if `timezone` is not
/// a valid IANA identifier.
pub fn project_working_hours(
    timezone: &str,
    hours: &WorkingHours,
    reference_date: NaiveDate,
) -> Result<UtcInterval> {
    if hours.start >= hours.end {
        return Err(EngineError::InvalidWorkingHours {
            start: hours.start,
            end: hours.end,
        });
    }

    let tz: Tz = timezone
        .parse()
        .map_err(|_| EngineError::UnknownTimezone(timezone.to_string()))?;

    let start = resolve_local(tz, reference_date.and_time(hours.start.to_naive_time()));
    let end = resolve_local(tz, reference_date.and_time(hours.end.to_naive_time()));

    Ok(UtcInterval { start, end })
}

/// Resolve a naive local datetime against a timezone's offset rules.
///
/// A fold (clocks set back, the reading occurs twice) resolves to the earliest
/// offset — the first time the wall clock shows that reading. A gap (clocks
/// set forward, the reading never occurs) walks forward minute-by-minute to
/// the first wall-clock instant that exists. Gaps are bounded by the largest
/// real DST shift, so the walk terminates quickly.
fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    let mut probe = local;
    loop {
        match tz.from_local_datetime(&probe) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => probe = probe + Duration::minutes(1),
        }
    }
}
