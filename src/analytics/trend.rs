//! Trend analyzer
//!
//! Answers one question: is the habit heading in the right direction?
//! History is split into two contiguous halves by record count and the
//! completed fraction of each half is compared.

use crate::types::HabitExecution;

/// Completed fraction of a slice of executions, 0.0 for an empty slice.
fn completed_fraction(part: &[HabitExecution]) -> f64 {
    if part.is_empty() {
        return 0.0;
    }
    let completed = part.iter().filter(|e| e.completed).count();
    completed as f64 / part.len() as f64
}

/// Whether the later half of history outperforms the earlier half.
///
/// Sorts ascending by date and splits at `n / 2`; for an odd count the middle
/// record belongs to the later half. Returns `true` only when the later
/// half's completed fraction is strictly greater. Fewer than 2 records is
/// insufficient data and yields `false`, never an error.
pub fn is_improving(history: &[HabitExecution]) -> bool {
    if history.len() < 2 {
        return false;
    }

    let mut sorted = history.to_vec();
    sorted.sort_by_key(|e| e.date);

    let (earlier, later) = sorted.split_at(sorted.len() / 2);
    completed_fraction(later) > completed_fraction(earlier)
}
