//! Schedule metrics calculation.
//!
//! Derives the fixed set of scalar measures used by the preference ranker
//! from a candidate schedule's time slots. Pure and total: a degenerate
//! schedule with zero slots yields all-zero metrics, never a division by
//! zero. Conflict-freedom is guaranteed upstream and not re-validated.

use crate::models::{TimeSlot, Weekday};
use serde::Serialize;

/// A gap of at least this many minutes counts as a long break.
pub const LONG_BREAK_THRESHOLD_MINUTES: u32 = 60;

/// Derived measures of one candidate schedule.
///
/// `avg_start_time` and `avg_end_time` are arithmetic means over all
/// individual slots (not per-day), expressed as fractional hour-of-day
/// (9.5 = 09:30). All minute fields are minute-of-day values. A day with
/// exactly one class contributes no gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleMetrics {
    /// Distinct weekdays with at least one class.
    pub days_used: usize,
    /// Weekdays in the 7-day domain without any class.
    pub free_days: usize,
    pub earliest_start: u32,
    pub latest_end: u32,
    pub avg_start_time: f64,
    pub avg_end_time: f64,
    /// Largest idle stretch between consecutive same-day classes.
    pub max_gap_minutes: u32,
    /// Sum of all idle stretches between consecutive same-day classes.
    pub total_gap_minutes: u32,
    /// Gaps of at least [`LONG_BREAK_THRESHOLD_MINUTES`].
    pub long_break_count: usize,
    pub total_long_break_minutes: u32,
    /// Spread (max minus min) of per-day first start times; the
    /// `consistentStart` ranking key. Zero with fewer than two days used.
    pub first_start_spread_minutes: u32,
}

impl ScheduleMetrics {
    /// All-zero metrics, the value for a schedule without any slots.
    fn zeroed() -> Self {
        Self {
            days_used: 0,
            free_days: 0,
            earliest_start: 0,
            latest_end: 0,
            avg_start_time: 0.0,
            avg_end_time: 0.0,
            max_gap_minutes: 0,
            total_gap_minutes: 0,
            long_break_count: 0,
            total_long_break_minutes: 0,
            first_start_spread_minutes: 0,
        }
    }
}

/// Computes the metrics of a schedule from its time slots.
pub fn calculate_schedule_metrics(slots: &[TimeSlot]) -> ScheduleMetrics {
    if slots.is_empty() {
        return ScheduleMetrics::zeroed();
    }

    let mut by_day: [Vec<(u32, u32)>; Weekday::COUNT] = Default::default();
    for slot in slots {
        by_day[slot.day.index()].push((slot.start_minute, slot.end_minute));
    }

    let days_used = by_day.iter().filter(|day| !day.is_empty()).count();
    let free_days = Weekday::COUNT - days_used;

    let earliest_start = slots.iter().map(|s| s.start_minute).min().unwrap_or(0);
    let latest_end = slots.iter().map(|s| s.end_minute).max().unwrap_or(0);

    let slot_count = slots.len() as f64;
    let avg_start_time =
        slots.iter().map(|s| s.start_minute as f64).sum::<f64>() / slot_count / 60.0;
    let avg_end_time = slots.iter().map(|s| s.end_minute as f64).sum::<f64>() / slot_count / 60.0;

    let mut max_gap_minutes = 0u32;
    let mut total_gap_minutes = 0u32;
    let mut long_break_count = 0usize;
    let mut total_long_break_minutes = 0u32;
    let mut first_starts: Vec<u32> = Vec::new();

    for day in by_day.iter_mut() {
        if day.is_empty() {
            continue;
        }
        day.sort_by_key(|&(start, _)| start);
        first_starts.push(day[0].0);

        for pair in day.windows(2) {
            let (_, prev_end) = pair[0];
            let (next_start, _) = pair[1];
            let gap = next_start.saturating_sub(prev_end);
            max_gap_minutes = max_gap_minutes.max(gap);
            total_gap_minutes += gap;
            if gap >= LONG_BREAK_THRESHOLD_MINUTES {
                long_break_count += 1;
                total_long_break_minutes += gap;
            }
        }
    }

    let first_start_spread_minutes = match (first_starts.iter().min(), first_starts.iter().max()) {
        (Some(min), Some(max)) => max - min,
        _ => 0,
    };

    ScheduleMetrics {
        days_used,
        free_days,
        earliest_start,
        latest_end,
        avg_start_time,
        avg_end_time,
        max_gap_minutes,
        total_gap_minutes,
        long_break_count,
        total_long_break_minutes,
        first_start_spread_minutes,
    }
}
