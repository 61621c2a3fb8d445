//! Core domain types for habitscope
//!
//! These types represent the read-only inputs to the analytics engine:
//! habits (the thing being tracked) and executions (dated completion facts).
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Habit** | A recurring activity a person wants to track, with a frequency |
//! | **Execution** | A single dated record of whether a habit was completed on that date |
//! | **Streak** | A run of consecutive completed days; "current" ends at today |
//! | **Success rate** | Percentage of days in a window with a completed execution |
//!
//! All dates are calendar dates ([`chrono::NaiveDate`]) with no time-of-day
//! component. The engine never mutates or persists these types; they are
//! snapshots supplied by the caller or fetched through
//! [`ExecutionStore`](crate::store::ExecutionStore).

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================
// Frequency
// ============================================

/// How often a habit is expected to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
}

impl Frequency {
    /// Returns the identifier used in storage and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
        }
    }

    /// Returns the display name for this frequency
    pub fn display_name(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "daily" | "Daily" => Ok(Frequency::Daily),
            "weekly" | "Weekly" => Ok(Frequency::Weekly),
            _ => Err(format!("unknown frequency: {}", s)),
        }
    }
}

// ============================================
// Habit
// ============================================

/// A recurring activity being tracked.
///
/// The analytics engine treats this as an immutable snapshot: it never loads,
/// validates, or persists one. Only the suggestion engine and the report
/// composer need it; the streak/rate/trend calculators work from executions
/// alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    /// Opaque identifier (owned by the storage layer)
    pub id: String,
    /// Human-friendly name
    pub name: String,
    /// Free-text motivation; may be empty
    pub description: String,
    /// Expected cadence
    pub frequency: Frequency,
    /// Calendar date the habit was defined
    pub created_on: NaiveDate,
}

// ============================================
// HabitExecution
// ============================================

/// A single dated completion fact for a habit.
///
/// Multiple executions may exist for the same habit and date; the engine does
/// not enforce uniqueness (that is a storage concern) and collapses duplicates
/// per its documented day-completion rule. A sequence of executions carries no
/// ordering guarantee; each calculator sorts or scans explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitExecution {
    /// Habit this execution belongs to (foreign reference only)
    pub habit_id: String,
    /// Calendar date the habit was (or was not) done
    pub date: NaiveDate,
    /// Whether the habit was completed on that date
    pub completed: bool,
}

impl HabitExecution {
    pub fn new(habit_id: impl Into<String>, date: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            date,
            completed,
        }
    }
}

// ============================================
// DateRange
// ============================================

/// An inclusive calendar date window.
///
/// Construction validates the bounds, so every `DateRange` in circulation
/// satisfies `start <= end` and spans at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range; fails with [`Error::InvalidRange`] when `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidRange(format!(
                "end date {} precedes start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the range (inclusive)
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, inclusive on both ends.
    ///
    /// Always at least 1.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether a date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} – {}", self.start, self.end)
    }
}
