//! Schedule generation facade.
//!
//! Composes enumeration, metrics calculation, and preference ranking into
//! the single entry point callers use. One invocation runs to completion
//! synchronously; there is no shared mutable state, so concurrent calls
//! with distinct inputs never interfere.

use crate::algorithms::enumeration::enumerate_schedules;
use crate::algorithms::metrics::calculate_schedule_metrics;
use crate::algorithms::ranking::{rank_schedules, Preference, ScoredSchedule};
use crate::models::Course;
use serde::Deserialize;

/// Options controlling a generation call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    #[serde(default)]
    pub preference: Preference,
    /// Maximum number of ranked schedules to return. `None` returns all.
    #[serde(default)]
    pub max_results: Option<usize>,
}

/// Generates ranked, conflict-free schedules for the requested courses.
///
/// Enumerates every conflict-free combination (no enumeration-time cap,
/// so the ranker always sees the full candidate set), attaches metrics to
/// each survivor, ranks by the requested preference, and truncates to
/// `max_results`. Returns an empty vec, never an error, when the course
/// list is empty, a course has no legal bundles, or no combination is
/// conflict-free.
pub fn generate_schedules(courses: &[Course], options: &GenerateOptions) -> Vec<ScoredSchedule> {
    let candidates = enumerate_schedules(courses, None);
    log::debug!(
        "scoring {} candidate(s) under preference {:?}",
        candidates.len(),
        options.preference
    );

    let scored: Vec<ScoredSchedule> = candidates
        .into_iter()
        .map(|schedule| {
            let metrics = calculate_schedule_metrics(&schedule.slots());
            ScoredSchedule { schedule, metrics }
        })
        .collect();

    let mut ranked = rank_schedules(scored, options.preference);
    if let Some(cap) = options.max_results {
        ranked.truncate(cap);
    }
    ranked
}
