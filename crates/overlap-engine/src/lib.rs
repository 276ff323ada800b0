//! # overlap-engine
//!
//! Cross-timezone availability overlap computation for distributed teams.
//!
//! Given a roster of participants — each with an IANA timezone and a recurring
//! local working-hours window — the engine projects every window onto a single
//! UTC reference day, sweeps the day in fixed-width buckets, and reports the
//! ranked time windows where the most participants are simultaneously
//! available. Timezone and DST rules come from the compiled-in `chrono-tz`
//! database; the engine itself is a pure function of its inputs.
//!
//! ## Modules
//!
//! - [`roster`] — input data model (participants, working hours, clock times)
//! - [`projection`] — local working hours → absolute UTC intervals
//! - [`scanner`] — bucket sweep and window ranking
//! - [`engine`] — orchestration: roster in, [`engine::OverlapReport`] out
//! - [`presence`] — local wall-clock helpers (who is working right now?)
//! - [`error`] — error types

pub mod engine;
pub mod error;
pub mod presence;
pub mod projection;
pub mod roster;
pub mod scanner;

pub use engine::{find_overlap_windows, EngineConfig, ExcludedParticipant, OverlapReport};
pub use error::EngineError;
pub use presence::{is_within_working_hours, local_clock_time};
pub use projection::{project_working_hours, UtcInterval};
pub use roster::{ClockTime, Participant, WorkingHours};
pub use scanner::{scan_day, OverlapWindow, TaggedInterval};
