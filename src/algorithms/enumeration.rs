//! Section combination enumeration.
//!
//! Builds the legal bundles of each course and walks the depth-first
//! product across courses, pruning any branch that introduces a time
//! conflict. Enumeration is recomputed per call (no shared cursor) and
//! never panics: a course with zero legal bundles simply yields zero
//! overall results.

use crate::algorithms::conflicts::{conflicts_with_any, schedule_has_conflict};
use crate::models::{Bundle, Course, SectionKind, TimeSlot};
use serde::Serialize;

/// The bundle chosen for one requested course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub course_code: String,
    pub bundle: Bundle,
}

/// One complete, pairwise conflict-free assignment of exactly one bundle
/// per requested course, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateSchedule {
    pub selections: Vec<Selection>,
}

impl CandidateSchedule {
    /// All time slots across every chosen bundle.
    pub fn slots(&self) -> Vec<TimeSlot> {
        self.selections
            .iter()
            .flat_map(|sel| sel.bundle.slots().copied())
            .collect()
    }
}

/// Builds the legal bundles of a course, strictly in section declaration
/// order.
///
/// Primaries are visited in declared order. A primary with linked
/// dependents yields one bundle per dependent (again in declared order);
/// a primary without dependents stands alone. The dependent→parent link is
/// resolved by identifier, so an unlinked dependent never produces a
/// bundle on its own.
///
/// The returned order is the tie-break key for the whole engine: it fixes
/// which combination is discovered first and therefore which candidate
/// wins when ranking keys tie. Callers must never re-sort it.
pub fn course_bundles(course: &Course) -> Vec<Bundle> {
    let mut bundles = Vec::new();

    for primary in course.sections_of_kind(SectionKind::Primary) {
        let dependents: Vec<_> = course
            .sections_of_kind(SectionKind::Dependent)
            .filter(|d| d.parent_id.as_deref() == Some(primary.id.as_str()))
            .collect();

        if dependents.is_empty() {
            bundles.push(Bundle {
                primary: primary.clone(),
                dependent: None,
            });
        } else {
            for dependent in dependents {
                bundles.push(Bundle {
                    primary: primary.clone(),
                    dependent: Some(dependent.clone()),
                });
            }
        }
    }

    bundles
}

/// Enumerates every conflict-free combination of one bundle per course.
///
/// Depth-first product over courses in input order; at each depth every
/// bundle of the current course is tried in its declared order, checked
/// incrementally against the slots committed so far, and the branch is
/// abandoned on the first violation. With `max_results` set, enumeration
/// stops once that many candidates have been found; this is a hard cutoff
/// preserving discovery order, not a sample.
///
/// An empty course list and a course with zero legal bundles both produce
/// an empty result, never an error.
pub fn enumerate_schedules(
    courses: &[Course],
    max_results: Option<usize>,
) -> Vec<CandidateSchedule> {
    if courses.is_empty() || max_results == Some(0) {
        return Vec::new();
    }

    let per_course: Vec<Vec<Bundle>> = courses.iter().map(course_bundles).collect();
    if per_course.iter().any(|bundles| bundles.is_empty()) {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut committed_slots: Vec<TimeSlot> = Vec::new();
    let mut chosen: Vec<Selection> = Vec::new();

    descend(
        courses,
        &per_course,
        0,
        &mut committed_slots,
        &mut chosen,
        &mut results,
        max_results,
    );

    log::debug!(
        "enumerated {} conflict-free schedule(s) for {} course(s)",
        results.len(),
        courses.len()
    );

    results
}

#[allow(clippy::too_many_arguments)]
fn descend(
    courses: &[Course],
    per_course: &[Vec<Bundle>],
    depth: usize,
    committed_slots: &mut Vec<TimeSlot>,
    chosen: &mut Vec<Selection>,
    results: &mut Vec<CandidateSchedule>,
    max_results: Option<usize>,
) {
    if max_results.is_some_and(|cap| results.len() >= cap) {
        return;
    }

    if depth == courses.len() {
        results.push(CandidateSchedule {
            selections: chosen.clone(),
        });
        return;
    }

    for bundle in &per_course[depth] {
        let slots: Vec<TimeSlot> = bundle.slots().copied().collect();
        // A bundle can conflict with itself (a lecture overlapping its own
        // lab, or two overlapping meetings of one section), not only with
        // slots committed by earlier courses.
        if schedule_has_conflict(&slots)
            || slots
                .iter()
                .any(|slot| conflicts_with_any(slot, committed_slots))
        {
            continue;
        }

        let committed_before = committed_slots.len();
        committed_slots.extend_from_slice(&slots);
        chosen.push(Selection {
            course_code: courses[depth].code.clone(),
            bundle: bundle.clone(),
        });

        descend(
            courses,
            per_course,
            depth + 1,
            committed_slots,
            chosen,
            results,
            max_results,
        );

        chosen.pop();
        committed_slots.truncate(committed_before);

        if max_results.is_some_and(|cap| results.len() >= cap) {
            return;
        }
    }
}
