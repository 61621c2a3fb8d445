//! Success-rate calculator
//!
//! Computes the completion percentage of a habit over an explicit date
//! window.
//!
//! ## Denominator policy
//!
//! The denominator is the number of calendar days in the inclusive range,
//! not the number of logged executions: days with no record at all count
//! against the habit. A range of Jan 1–10 with four completed days scores
//! 40.0, whether or not the remaining six days were logged.

use crate::types::{DateRange, HabitExecution};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Completion percentage over `range`, in `[0.0, 100.0]`.
///
/// Counts distinct days inside the range with at least one completed
/// execution, divided by the calendar days the range spans. Duplicate records
/// on one date count once. An empty history scores 0.0.
pub fn success_rate(history: &[HabitExecution], range: &DateRange) -> f64 {
    let days = range.days();
    if days == 0 {
        // Unreachable with a validated DateRange; guard the division anyway.
        return 0.0;
    }

    let completed_days: BTreeSet<NaiveDate> = history
        .iter()
        .filter(|e| e.completed && range.contains(e.date))
        .map(|e| e.date)
        .collect();

    (completed_days.len() as f64 / days as f64) * 100.0
}
