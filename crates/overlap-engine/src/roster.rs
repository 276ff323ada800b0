//! Roster input types — participants with declared local working hours.
//!
//! A roster is the engine's only input: an order-irrelevant collection of
//! participants, each carrying an opaque id, an IANA timezone name, and a
//! daily working-hours window in local wall-clock terms. These types mirror
//! the camelCase JSON contract of the surrounding application.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A wall-clock time of day, the `"HH:MM"` (24-hour) form used by the roster
/// contract.
///
/// Ordering is hour-then-minute, which coincides with lexicographic ordering
/// of the string form — so comparisons behave exactly like the string
/// comparisons the host application performs on `"HH:MM"` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a clock time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(ClockTime { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes since local midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    pub(crate) fn to_naive_time(self) -> NaiveTime {
        // Components are range-checked at construction.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for ClockTime {
    /// Truncates seconds.
    fn from(t: NaiveTime) -> Self {
        ClockTime {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Failure to parse a `"HH:MM"` string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid clock time {input:?}: expected \"HH:MM\" (24-hour)")]
pub struct ParseClockTimeError {
    input: String,
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError {
            input: s.to_string(),
        };

        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour: u8 = h.parse().map_err(|_| err())?;
        let minute: u8 = m.parse().map_err(|_| err())?;
        ClockTime::new(hour, minute).ok_or_else(err)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

/// A participant's recurring daily availability window in local wall-clock
/// terms. The model requires `start < end` within one local day; windows that
/// span local midnight are rejected at projection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// One roster entry. Immutable for the duration of a single computation;
/// each engine invocation snapshots the roster it was handed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Opaque identifier — overlap windows reference participants by id only.
    pub id: String,
    /// IANA timezone name (e.g., "America/New_York").
    pub timezone: String,
    pub working_hours: WorkingHours,
}
