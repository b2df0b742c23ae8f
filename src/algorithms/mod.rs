//! Algorithm layer: conflict detection, combination enumeration,
//! schedule metrics, and preference ranking.
//!
//! Everything in this module is pure and synchronous. Inputs are assumed
//! to have passed boundary validation in [`crate::parsing`]; none of these
//! functions re-validate structural integrity.

pub mod conflicts;
pub mod enumeration;
pub mod metrics;
pub mod ranking;

pub use conflicts::{conflicts, schedule_has_conflict};
pub use enumeration::{course_bundles, enumerate_schedules, CandidateSchedule, Selection};
pub use metrics::{calculate_schedule_metrics, ScheduleMetrics};
pub use ranking::{rank_schedules, Preference, ScoredSchedule};
