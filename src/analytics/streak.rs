//! Streak calculators
//!
//! A streak is a run of consecutive completed days. Two views exist:
//! the current streak, which ends at today, and the longest streak anywhere
//! in history.
//!
//! ## Missing-day policy
//!
//! A calendar day with no recorded execution breaks a streak, in both
//! calculators. The single exception is today itself: when today has no
//! record yet, the current-streak walk skips it and starts counting from
//! yesterday, so a streak is not zeroed before the day has been logged.
//!
//! ## Duplicate records
//!
//! Storage does not enforce one execution per date. A day counts as completed
//! when any record for it is completed; an explicit not-completed record only
//! marks the day failed when no completed record exists for the same date.

use crate::types::HabitExecution;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Collapse raw executions into one completion flag per day, date-ascending.
fn completion_by_day(history: &[HabitExecution]) -> BTreeMap<NaiveDate, bool> {
    let mut days: BTreeMap<NaiveDate, bool> = BTreeMap::new();
    for execution in history {
        let entry = days.entry(execution.date).or_insert(false);
        *entry = *entry || execution.completed;
    }
    days
}

/// Current unbroken streak of completed days ending at `today`.
///
/// Walks backward one day at a time from `today`: a completed day increments
/// the streak, a not-completed or unrecorded day stops the walk (an unlogged
/// `today` is skipped once, per the module policy). Returns 0 for an empty
/// history.
pub fn current_streak(history: &[HabitExecution], today: NaiveDate) -> u32 {
    let days = completion_by_day(history);
    let Some(earliest) = days.keys().next().copied() else {
        return 0;
    };

    let mut streak = 0u32;
    let mut day = today;
    loop {
        match days.get(&day) {
            Some(true) => streak += 1,
            Some(false) => break,
            // Today may simply not be logged yet; any other gap ends the run.
            None if day == today => {}
            None => break,
        }
        if day <= earliest {
            break;
        }
        day -= Duration::days(1);
    }
    streak
}

/// Longest streak of completed days anywhere in history.
///
/// Scans per-day completion flags in ascending date order with a running
/// counter: a completed day contiguous with the previous recorded day extends
/// the run, a completed day after a date gap starts a new run of 1, and a
/// not-completed day resets the run to 0. Returns 0 for an empty history.
pub fn longest_streak(history: &[HabitExecution]) -> u32 {
    let days = completion_by_day(history);

    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for (date, completed) in days {
        if completed {
            let contiguous = prev.map_or(false, |p| p + Duration::days(1) == date);
            run = if contiguous { run + 1 } else { 1 };
            best = best.max(run);
        } else {
            run = 0;
        }
        prev = Some(date);
    }
    best
}
