//! Error types for overlap-engine operations.

use crate::roster::ClockTime;
use serde::Serialize;
use thiserror::Error;

/// Per-participant validation failures.
///
/// Neither variant aborts an engine run: a bad roster record is excluded from
/// the computation and reported back in
/// [`OverlapReport::excluded`](crate::engine::OverlapReport::excluded), so one
/// broken record never denies overlap results for the rest of the team.
/// Errors are `Serialize` so exclusion reasons can cross the JSON boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EngineError {
    /// Local start is not strictly before local end within the same day.
    /// This also rejects overnight windows such as 22:00–06:00, which the
    /// single-day working-hours model cannot represent.
    #[error("invalid working hours: start {start} is not before end {end}")]
    InvalidWorkingHours { start: ClockTime, end: ClockTime },

    /// The timezone identifier does not resolve in the IANA database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
