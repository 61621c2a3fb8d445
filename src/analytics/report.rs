//! Progress report composer
//!
//! Assembles already-computed values (streak, windowed success rate) and a
//! chronological execution listing into a single report value. Pure
//! formatting: no business logic lives here, and upstream failures propagate
//! before a report ever exists.

use crate::types::{DateRange, HabitExecution};
use chrono::NaiveDate;
use serde::Serialize;

/// One rendered line of a report: a date and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub date: NaiveDate,
    pub completed: bool,
}

impl ReportEntry {
    /// Render as `"<date>: Completed"` or `"<date>: Not completed"`.
    pub fn render(&self) -> String {
        let outcome = if self.completed {
            "Completed"
        } else {
            "Not completed"
        };
        format!("{}: {}", self.date, outcome)
    }
}

/// Composed progress report for one habit over one date window.
///
/// Carries the structured fields alongside the entry listing; [`render`]
/// produces the textual form. Serialization to a wire format is the caller's
/// concern.
///
/// [`render`]: ProgressReport::render
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// Name of the habit being reported on
    pub habit_name: String,
    /// The requested date window
    pub range: DateRange,
    /// Current unbroken streak ending today
    pub current_streak: u32,
    /// Success rate over the window, days-in-range policy
    pub success_rate: f64,
    /// Executions in the window, date-ascending
    pub entries: Vec<ReportEntry>,
}

impl ProgressReport {
    /// Build a report from computed values and the window's executions.
    ///
    /// Sorts entries date-ascending; input order does not matter.
    pub fn compose(
        habit_name: impl Into<String>,
        range: DateRange,
        current_streak: u32,
        success_rate: f64,
        executions: &[HabitExecution],
    ) -> Self {
        let mut entries: Vec<ReportEntry> = executions
            .iter()
            .map(|e| ReportEntry {
                date: e.date,
                completed: e.completed,
            })
            .collect();
        entries.sort_by_key(|e| e.date);

        Self {
            habit_name: habit_name.into(),
            range,
            current_streak,
            success_rate,
            entries,
        }
    }

    /// Render the full textual report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Progress report for '{}'\n", self.habit_name));
        out.push_str(&format!("Period: {}\n", self.range));
        out.push_str(&format!("Current streak: {} days\n", self.current_streak));
        out.push_str(&format!("Success rate: {:.2}%\n", self.success_rate));
        for entry in &self.entries {
            out.push('\n');
            out.push_str(&entry.render());
        }
        out
    }
}

impl std::fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
