//! Suggestion rule engine
//!
//! Produces natural-language improvement suggestions from a habit snapshot
//! and its execution history. Rules are independent (several can fire for the
//! same habit) and evaluated in a fixed order, so for identical input the
//! output is identical in content and order. A perfectly performing habit
//! legitimately gets zero suggestions.
//!
//! ## Rules, in evaluation order
//!
//! | Rule | Fires when | Suggestion |
//! |------|-----------|------------|
//! | low rate | overall completion below `low_rate_threshold` | reduce frequency / smaller steps |
//! | promote weekly | weekly habit at or above `high_rate_threshold` | switch to daily |
//! | thin description | trimmed description shorter than `min_description_chars` | add a motivating description |
//! | stale habit | older than `stale_after_days` with fewer than `min_executions_for_age` records | re-commit / set a reminder |
//!
//! The rate-based rules only apply when history is non-empty; for an empty
//! log the output is driven by habit fields alone.

use crate::config::SuggestionConfig;
use crate::types::{Frequency, Habit, HabitExecution};
use chrono::NaiveDate;

/// Rule engine over `(habit, history)` pairs.
///
/// Thresholds come in through [`SuggestionConfig`] rather than ambient state,
/// so callers can run differently tuned engines side by side.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
}

impl SuggestionEngine {
    /// Engine with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit thresholds.
    pub fn with_config(config: SuggestionConfig) -> Self {
        Self { config }
    }

    /// Overall completion percentage across the full history.
    ///
    /// Unlike the windowed rate calculator this is a fraction of logged
    /// records, since no date window is in play. Returns `None` for an empty
    /// history so rate rules can opt out.
    fn overall_rate(history: &[HabitExecution]) -> Option<f64> {
        if history.is_empty() {
            return None;
        }
        let completed = history.iter().filter(|e| e.completed).count();
        Some(completed as f64 / history.len() as f64 * 100.0)
    }

    /// Evaluate all rules for a habit as of `today`.
    pub fn suggest(
        &self,
        habit: &Habit,
        history: &[HabitExecution],
        today: NaiveDate,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();
        let rate = Self::overall_rate(history);

        if let Some(rate) = rate {
            if rate < self.config.low_rate_threshold {
                suggestions.push(format!(
                    "Completion rate for '{}' is low ({:.0}%). Consider reducing the frequency \
                     or breaking it into smaller steps.",
                    habit.name, rate
                ));
            }
        }

        if habit.frequency == Frequency::Weekly {
            if let Some(rate) = rate {
                if rate >= self.config.high_rate_threshold {
                    suggestions.push(format!(
                        "You complete '{}' almost every week ({:.0}%). Consider making it a \
                         daily habit.",
                        habit.name, rate
                    ));
                }
            }
        }

        if habit.description.trim().chars().count() < self.config.min_description_chars {
            suggestions.push(format!(
                "Add a short motivating description to '{}' to remind yourself why it matters.",
                habit.name
            ));
        }

        let age_days = (today - habit.created_on).num_days();
        if age_days >= self.config.stale_after_days
            && history.len() < self.config.min_executions_for_age
        {
            suggestions.push(format!(
                "'{}' has existed for {} days but has only {} recorded executions. \
                 Re-commit to it or set a reminder.",
                habit.name,
                age_days,
                history.len()
            ));
        }

        suggestions
    }
}
