//! Overlap scanner — bucket sweep over UTC intervals with deterministic
//! ranking.
//!
//! Partitions one UTC calendar day into fixed-width buckets, counts which
//! participant intervals intersect each bucket, and emits one window per
//! bucket that reaches the minimum participant count. Windows are ranked by
//! participant count descending, ties broken by earliest start, with a stable
//! sort — repeated runs on identical input produce identical output.
//!
//! Adjacent qualifying buckets are deliberately NOT merged, even when their
//! participant sets match: one window per bucket preserves the per-bucket
//! membership detail for the caller.

use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, Serializer};
use std::cmp::Reverse;

use crate::projection::UtcInterval;

/// A participant's projected working hours, tagged with their id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedInterval {
    pub participant_id: String,
    pub interval: UtcInterval,
}

/// A contiguous UTC time range during which a qualifying number of
/// participants are simultaneously available.
///
/// Serializes to the host contract:
/// `{ "startTime": "HH:MM", "endTime": "HH:MM", "durationMinutes": n, "participantIds": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapWindow {
    #[serde(rename = "startTime", serialize_with = "as_hhmm")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endTime", serialize_with = "as_hhmm")]
    pub end: DateTime<Utc>,
    pub duration_minutes: i64,
    /// Ids of every participant whose interval intersects this window, in
    /// roster order.
    pub participant_ids: Vec<String>,
}

fn as_hhmm<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&dt.format("%H:%M"))
}

/// Sweep one UTC day in fixed buckets and rank the qualifying windows.
///
/// The day is `[day_start, day_start + 24h)`; a trailing partial bucket is
/// clipped to the day end when `bucket_width_minutes` does not divide 1440.
/// `minimum_participants` values below 2 are treated as 2 — a window covering
/// a single participant is not an overlap and never appears in the output.
///
/// An empty `intervals` slice, or a day where no bucket reaches the minimum,
/// yields an empty vec — not an error.
pub fn scan_day(
    intervals: &[TaggedInterval],
    day_start: DateTime<Utc>,
    bucket_width_minutes: u32,
    minimum_participants: usize,
) -> Vec<OverlapWindow> {
    let day_end = day_start + Duration::days(1);
    let width = Duration::minutes(i64::from(bucket_width_minutes.max(1)));
    let minimum = minimum_participants.max(2);

    let mut windows = Vec::new();
    let mut bucket_start = day_start;

    while bucket_start < day_end {
        let bucket_end = (bucket_start + width).min(day_end);

        // Membership is recomputed per bucket; any non-empty intersection of
        // the half-open bucket and participant intervals counts.
        let participant_ids: Vec<String> = intervals
            .iter()
            .filter(|tagged| tagged.interval.intersects(bucket_start, bucket_end))
            .map(|tagged| tagged.participant_id.clone())
            .collect();

        if participant_ids.len() >= minimum {
            windows.push(OverlapWindow {
                start: bucket_start,
                end: bucket_end,
                duration_minutes: (bucket_end - bucket_start).num_minutes(),
                participant_ids,
            });
        }

        bucket_start = bucket_end;
    }

    // Stable sort: most participants first, earliest start breaking ties.
    windows.sort_by_key(|w| (Reverse(w.participant_ids.len()), w.start));
    windows
}
