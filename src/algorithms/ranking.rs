//! Preference-based schedule ranking.
//!
//! Maps each of the six preference modes to a fixed primary/secondary key
//! comparator and sorts candidates with a stable sort, so candidates tying
//! on every active key retain the enumerator's discovery order.

use crate::algorithms::enumeration::CandidateSchedule;
use crate::algorithms::metrics::ScheduleMetrics;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ranking objective for generated schedules.
///
/// A closed set: an unrecognized preference tag is not an error but falls
/// back to [`Preference::ShortBreaks`], which is also the `Default`. That
/// holds on every input path — `Deserialize` goes through
/// [`Preference::from_tag`] rather than rejecting unknown tags.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Preference {
    /// Minimize total gap minutes, then the largest single gap.
    #[default]
    ShortBreaks,
    /// Maximize the number of long breaks, then their total minutes.
    LongBreaks,
    /// Minimize the spread of per-day first start times.
    ConsistentStart,
    /// Maximize the earliest start of the week.
    StartLate,
    /// Minimize the latest end of the week.
    EndEarly,
    /// Maximize free days, then minimize total gap minutes.
    DaysOff,
}

impl Preference {
    /// Resolves a preference tag, defaulting to `ShortBreaks` for anything
    /// unrecognized. The fallback is logged but never surfaced as a failure.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "shortBreaks" => Preference::ShortBreaks,
            "longBreaks" => Preference::LongBreaks,
            "consistentStart" => Preference::ConsistentStart,
            "startLate" => Preference::StartLate,
            "endEarly" => Preference::EndEarly,
            "daysOff" => Preference::DaysOff,
            other => {
                log::warn!("unknown preference tag '{}', defaulting to shortBreaks", other);
                Preference::ShortBreaks
            }
        }
    }

    /// Compares two candidates' metrics under this preference.
    ///
    /// Returns `Equal` when every active key ties, leaving the final order
    /// to the stable sort (enumerator discovery order).
    pub fn compare(&self, a: &ScheduleMetrics, b: &ScheduleMetrics) -> Ordering {
        match self {
            Preference::ShortBreaks => a
                .total_gap_minutes
                .cmp(&b.total_gap_minutes)
                .then(a.max_gap_minutes.cmp(&b.max_gap_minutes)),
            Preference::LongBreaks => b
                .long_break_count
                .cmp(&a.long_break_count)
                .then(b.total_long_break_minutes.cmp(&a.total_long_break_minutes)),
            Preference::ConsistentStart => a
                .first_start_spread_minutes
                .cmp(&b.first_start_spread_minutes),
            Preference::StartLate => b.earliest_start.cmp(&a.earliest_start),
            Preference::EndEarly => a.latest_end.cmp(&b.latest_end),
            Preference::DaysOff => b
                .free_days
                .cmp(&a.free_days)
                .then(a.total_gap_minutes.cmp(&b.total_gap_minutes)),
        }
    }
}

impl<'de> Deserialize<'de> for Preference {
    /// Accepts any string tag, resolving it via [`Preference::from_tag`]
    /// so an unrecognized preference recovers to the default instead of
    /// failing the call.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Preference::from_tag(&tag))
    }
}

/// A candidate schedule with its attached metrics, as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSchedule {
    pub schedule: CandidateSchedule,
    pub metrics: ScheduleMetrics,
}

/// Sorts candidates by the given preference.
///
/// The sort is stable and candidates arrive in enumerator discovery order,
/// so ties are broken first-found-wins. Truncation to the caller's result
/// limit happens in the facade, not here.
pub fn rank_schedules(
    mut candidates: Vec<ScoredSchedule>,
    preference: Preference,
) -> Vec<ScoredSchedule> {
    candidates.sort_by(|a, b| preference.compare(&a.metrics, &b.metrics));
    candidates
}
