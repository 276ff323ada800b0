//! Tests for timezone projection — local working hours to UTC intervals.

use chrono::{NaiveDate, TimeZone, Utc};
use overlap_engine::roster::WorkingHours;
use overlap_engine::{project_working_hours, EngineError};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn hours(start: &str, end: &str) -> WorkingHours {
    WorkingHours {
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Plain offsets ───────────────────────────────────────────────────────────

#[test]
fn utc_projects_to_itself() {
    let interval = project_working_hours("UTC", &hours("09:00", "17:00"), date(2026, 7, 15)).unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 7, 15, 9, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 7, 15, 17, 0, 0).unwrap());
    assert_eq!(interval.duration_minutes(), 480);
}

#[test]
fn new_york_summer_is_utc_minus_4() {
    let interval = project_working_hours(
        "America/New_York",
        &hours("09:00", "17:00"),
        date(2026, 7, 15),
    )
    .unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 7, 15, 13, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 7, 15, 21, 0, 0).unwrap());
}

#[test]
fn new_york_winter_is_utc_minus_5() {
    let interval = project_working_hours(
        "America/New_York",
        &hours("09:00", "17:00"),
        date(2026, 1, 15),
    )
    .unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 1, 15, 14, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 1, 15, 22, 0, 0).unwrap());
}

#[test]
fn tokyo_has_no_dst() {
    // UTC+9 year-round: a local morning window lands on the same UTC day's
    // small hours.
    let interval =
        project_working_hours("Asia/Tokyo", &hours("09:00", "17:00"), date(2026, 7, 15)).unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 7, 15, 0, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 7, 15, 8, 0, 0).unwrap());

    let winter =
        project_working_hours("Asia/Tokyo", &hours("09:00", "17:00"), date(2026, 1, 15)).unwrap();
    assert_eq!(winter.duration_minutes(), interval.duration_minutes());
}

#[test]
fn half_hour_offset_zone() {
    // Asia/Kolkata is UTC+5:30 year-round.
    let interval =
        project_working_hours("Asia/Kolkata", &hours("09:00", "17:00"), date(2026, 7, 15)).unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 7, 15, 3, 30, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 7, 15, 11, 30, 0).unwrap());
}

// ── DST transitions on the reference day ────────────────────────────────────

#[test]
fn spring_forward_shortens_utc_duration() {
    // 2026-03-08 in America/New_York: clocks jump 02:00 -> 03:00.
    // Local 01:30-03:30 spans the gap: start resolves in EST (UTC-5), end in
    // EDT (UTC-4), so 120 wall-clock minutes become 60 UTC minutes.
    let interval = project_working_hours(
        "America/New_York",
        &hours("01:30", "03:30"),
        date(2026, 3, 8),
    )
    .unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 3, 8, 6, 30, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 3, 8, 7, 30, 0).unwrap());
    assert_eq!(interval.duration_minutes(), 60);
}

#[test]
fn gap_start_shifts_forward_to_first_valid_instant() {
    // Local 02:30 never happens on 2026-03-08 in New York; it resolves to
    // 03:00 EDT, the first wall-clock instant after the gap.
    let interval = project_working_hours(
        "America/New_York",
        &hours("02:30", "04:00"),
        date(2026, 3, 8),
    )
    .unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 3, 8, 7, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 3, 8, 8, 0, 0).unwrap());
}

#[test]
fn fall_back_lengthens_utc_duration() {
    // 2026-11-01 in America/New_York: clocks fall back 02:00 -> 01:00.
    // The ambiguous 01:00 resolves to its earliest occurrence (EDT), so
    // 120 wall-clock minutes become 180 UTC minutes.
    let interval = project_working_hours(
        "America/New_York",
        &hours("01:00", "03:00"),
        date(2026, 11, 1),
    )
    .unwrap();

    assert_eq!(interval.start, Utc.with_ymd_and_hms(2026, 11, 1, 5, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2026, 11, 1, 8, 0, 0).unwrap());
    assert_eq!(interval.duration_minutes(), 180);
}

// ── Validation ──────────────────────────────────────────────────────────────

#[test]
fn inverted_hours_are_rejected() {
    let err = project_working_hours("UTC", &hours("17:00", "09:00"), date(2026, 7, 15))
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidWorkingHours { .. }));
}

#[test]
fn zero_length_hours_are_rejected() {
    let err = project_working_hours("UTC", &hours("09:00", "09:00"), date(2026, 7, 15))
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidWorkingHours { .. }));
}

#[test]
fn overnight_hours_are_rejected() {
    // A night shift (22:00-06:00) cannot be represented in the single-day
    // model and is excluded rather than silently split.
    let err = project_working_hours("UTC", &hours("22:00", "06:00"), date(2026, 7, 15))
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidWorkingHours { .. }));
}

#[test]
fn unknown_timezone_is_rejected() {
    let err = project_working_hours(
        "Mars/Olympus_Mons",
        &hours("09:00", "17:00"),
        date(2026, 7, 15),
    )
    .unwrap_err();

    assert_eq!(err, EngineError::UnknownTimezone("Mars/Olympus_Mons".to_string()));
}

#[test]
fn invalid_hours_win_over_invalid_timezone() {
    // Working hours are validated before the timezone lookup.
    let err = project_working_hours(
        "Mars/Olympus_Mons",
        &hours("17:00", "09:00"),
        date(2026, 7, 15),
    )
    .unwrap_err();

    assert!(matches!(err, EngineError::InvalidWorkingHours { .. }));
}

// ── Interval arithmetic ─────────────────────────────────────────────────────

#[test]
fn intersects_is_half_open() {
    let interval =
        project_working_hours("UTC", &hours("09:00", "17:00"), date(2026, 7, 15)).unwrap();

    let day = |h, m| Utc.with_ymd_and_hms(2026, 7, 15, h, m, 0).unwrap();

    assert!(interval.intersects(day(8, 0), day(9, 1)));
    assert!(interval.intersects(day(16, 59), day(18, 0)));
    // Touching endpoints do not overlap.
    assert!(!interval.intersects(day(8, 0), day(9, 0)));
    assert!(!interval.intersects(day(17, 0), day(18, 0)));
}
