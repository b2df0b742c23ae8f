//! Pairwise time slot conflict detection.
//!
//! The same overlap test backs both automatic generation (incremental
//! pruning during enumeration) and live feedback in manual schedule
//! editors, so the two surfaces can never disagree about what conflicts.

use crate::models::TimeSlot;

/// True iff the two slots share a weekday and their half-open minute
/// intervals overlap.
///
/// Back-to-back classes (`a.end == b.start`) do not conflict. The test is
/// symmetric: `conflicts(a, b) == conflicts(b, a)`.
pub fn conflicts(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.day == b.day && a.start_minute < b.end_minute && b.start_minute < a.end_minute
}

/// True iff any pair of slots in the set conflicts.
pub fn schedule_has_conflict(slots: &[TimeSlot]) -> bool {
    for i in 0..slots.len() {
        for j in (i + 1)..slots.len() {
            if conflicts(&slots[i], &slots[j]) {
                return true;
            }
        }
    }
    false
}

/// True iff `slot` conflicts with any already committed slot.
///
/// Short-circuits on the first violation; this is the incremental check
/// the enumerator runs before extending a partial schedule.
pub fn conflicts_with_any(slot: &TimeSlot, committed: &[TimeSlot]) -> bool {
    committed.iter().any(|c| conflicts(slot, c))
}
