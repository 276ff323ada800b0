//! WASM bindings for overlap-engine.
//!
//! Exposes overlap-window computation and working-hours checks to JavaScript
//! via `wasm-bindgen`. Complex types cross the boundary as JSON strings using
//! the host application's camelCase contracts.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p overlap-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/overlap_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use overlap_engine::roster::WorkingHours;
use overlap_engine::{
    find_overlap_windows, is_within_working_hours, local_clock_time, ClockTime, EngineConfig,
    Participant,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse JSON and datetime inputs from JavaScript
// ---------------------------------------------------------------------------

fn parse_roster(json: &str) -> Result<Vec<Participant>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid roster JSON: {}", e)))
}

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
fn parse_instant(s: &str) -> Result<DateTime<Utc>, JsValue> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_clock_time(s: &str) -> Result<ClockTime, JsValue> {
    s.parse()
        .map_err(|e: overlap_engine::roster::ParseClockTimeError| {
            JsValue::from_str(&e.to_string())
        })
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute ranked overlap windows for a roster.
///
/// `roster_json` is a JSON array of participant objects:
/// `{ "id": "...", "timezone": "America/New_York", "workingHours": { "start": "09:00", "end": "17:00" } }`.
///
/// Returns a JSON string with `windows` (ranked, each
/// `{ startTime, endTime, durationMinutes, participantIds }`), `excluded`
/// (participants dropped by validation, with reasons), and `referenceDate`.
///
/// # Arguments
/// - `roster_json` -- JSON array of participants
/// - `bucket_width_minutes` -- optional scan bucket width (default 60)
/// - `minimum_participants` -- optional qualifying count (default 2)
/// - `reference_date` -- optional `"YYYY-MM-DD"` UTC day (default: today)
#[wasm_bindgen(js_name = "findOverlapWindows")]
pub fn find_overlap_windows_js(
    roster_json: &str,
    bucket_width_minutes: Option<u32>,
    minimum_participants: Option<u32>,
    reference_date: Option<String>,
) -> Result<String, JsValue> {
    let roster = parse_roster(roster_json)?;

    let defaults = EngineConfig::default();
    let config = EngineConfig {
        bucket_width_minutes: bucket_width_minutes.unwrap_or(defaults.bucket_width_minutes),
        minimum_participants: minimum_participants
            .map(|m| m as usize)
            .unwrap_or(defaults.minimum_participants),
        reference_date: reference_date.as_deref().map(parse_date).transpose()?,
    };

    let report = find_overlap_windows(&roster, &config);

    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether a UTC instant falls inside a local working-hours window.
///
/// Bounds are inclusive on both ends. `at` is an RFC 3339 datetime string;
/// `start`/`end` are `"HH:MM"` local wall-clock times.
#[wasm_bindgen(js_name = "isWithinWorkingHours")]
pub fn is_within_working_hours_js(
    timezone: &str,
    start: &str,
    end: &str,
    at: &str,
) -> Result<bool, JsValue> {
    let hours = WorkingHours {
        start: parse_clock_time(start)?,
        end: parse_clock_time(end)?,
    };
    let instant = parse_instant(at)?;

    is_within_working_hours(&hours, timezone, instant)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The `"HH:MM"` wall-clock reading of a UTC instant in a named timezone.
#[wasm_bindgen(js_name = "localClockTime")]
pub fn local_clock_time_js(timezone: &str, at: &str) -> Result<String, JsValue> {
    let instant = parse_instant(at)?;

    local_clock_time(timezone, instant)
        .map(|t| t.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
