//! Engine orchestration — roster in, ranked overlap windows out.
//!
//! Composes the two leaf components: every roster entry is projected onto the
//! reference UTC day ([`crate::projection`]), then the projected intervals are
//! swept and ranked ([`crate::scanner`]). Roster records that fail validation
//! are excluded and reported, never fatal.

use chrono::{NaiveDate, NaiveTime, Utc};
use log::{debug, warn};
use serde::Serialize;

use crate::error::EngineError;
use crate::projection::project_working_hours;
use crate::roster::Participant;
use crate::scanner::{scan_day, OverlapWindow, TaggedInterval};

/// Recognized engine options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Width of the fixed scan buckets, in minutes. Finer buckets trade
    /// compute and output verbosity for precision.
    pub bucket_width_minutes: u32,
    /// Fewest simultaneously-available participants a window must have.
    /// Values below 2 are treated as 2.
    pub minimum_participants: usize,
    /// UTC calendar day the scan covers. `None` means the current UTC day at
    /// the time of the call; pin this for reproducible output.
    pub reference_date: Option<NaiveDate>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            bucket_width_minutes: 60,
            minimum_participants: 2,
            reference_date: None,
        }
    }
}

/// A roster entry dropped from a computation, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedParticipant {
    pub participant_id: String,
    pub reason: EngineError,
}

/// The result of one engine invocation. Produced fresh on every call; no
/// identity persists between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapReport {
    /// Qualifying windows, ranked by participant count descending with ties
    /// broken by start time ascending.
    pub windows: Vec<OverlapWindow>,
    /// Roster entries excluded by validation, with reasons.
    pub excluded: Vec<ExcludedParticipant>,
    /// The UTC day the scan covered.
    pub reference_date: NaiveDate,
}

/// Compute ranked overlap windows for a roster.
///
/// Projects each participant's working hours onto the reference day, excluding
/// (and warning about) records with inverted hours or unresolvable timezones,
/// then sweeps the day per [`scan_day`]. An empty roster, or one where no
/// bucket ever reaches the minimum participant count, yields a report with no
/// windows — not an error.
pub fn find_overlap_windows(roster: &[Participant], config: &EngineConfig) -> OverlapReport {
    let reference_date = config
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let mut intervals = Vec::with_capacity(roster.len());
    let mut excluded = Vec::new();

    for participant in roster {
        match project_working_hours(
            &participant.timezone,
            &participant.working_hours,
            reference_date,
        ) {
            Ok(interval) => intervals.push(TaggedInterval {
                participant_id: participant.id.clone(),
                interval,
            }),
            Err(reason) => {
                warn!(
                    "excluding participant {} from overlap scan: {}",
                    participant.id, reason
                );
                excluded.push(ExcludedParticipant {
                    participant_id: participant.id.clone(),
                    reason,
                });
            }
        }
    }

    debug!(
        "scanning {} projected intervals over {} ({}-minute buckets, minimum {})",
        intervals.len(),
        reference_date,
        config.bucket_width_minutes,
        config.minimum_participants
    );

    let day_start = reference_date.and_time(NaiveTime::MIN).and_utc();
    let windows = scan_day(
        &intervals,
        day_start,
        config.bucket_width_minutes,
        config.minimum_participants,
    );

    OverlapReport {
        windows,
        excluded,
        reference_date,
    }
}
