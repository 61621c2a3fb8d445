//! Execution log accessor
//!
//! The analytics engine never owns storage. It consumes exactly one upstream
//! capability, [`ExecutionStore`], which a persistence layer (SQLite, an ORM,
//! a remote API) implements elsewhere. All analytics fetch from the store once
//! per request and then operate purely in memory, trading some redundant I/O
//! for always-current results and no invalidation logic.

use crate::error::{Error, Result};
use crate::types::{DateRange, Habit, HabitExecution};
use std::collections::HashMap;

/// Read-only access to habits and their execution logs.
///
/// Implementations must return an empty vec (never an error) when a habit has
/// no recorded executions; an empty log is a valid input everywhere in the
/// engine. Only `fetch_habit` may fail with [`Error::HabitNotFound`].
pub trait ExecutionStore {
    /// Resolve a habit snapshot by id.
    ///
    /// Fails with [`Error::HabitNotFound`] when the id does not resolve.
    fn fetch_habit(&self, habit_id: &str) -> Result<Habit>;

    /// Fetch the full execution log for a habit, in no guaranteed order.
    fn fetch_executions(&self, habit_id: &str) -> Result<Vec<HabitExecution>>;

    /// Fetch executions whose date falls inside `range`, inclusive on both
    /// bounds.
    ///
    /// The default implementation filters [`fetch_executions`]; stores with a
    /// query layer can override it to push the filter down.
    ///
    /// [`fetch_executions`]: ExecutionStore::fetch_executions
    fn fetch_executions_in_range(
        &self,
        habit_id: &str,
        range: &DateRange,
    ) -> Result<Vec<HabitExecution>> {
        let executions = self.fetch_executions(habit_id)?;
        Ok(executions
            .into_iter()
            .filter(|e| range.contains(e.date))
            .collect())
    }
}

// ============================================
// In-memory store
// ============================================

/// In-memory [`ExecutionStore`] backed by hash maps.
///
/// Used by the test suite and by callers that already hold their data in
/// memory (e.g. a service that loaded records through its own ORM).
#[derive(Debug, Default)]
pub struct MemoryStore {
    habits: HashMap<String, Habit>,
    executions: HashMap<String, Vec<HabitExecution>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a habit snapshot.
    pub fn insert_habit(&mut self, habit: Habit) {
        self.habits.insert(habit.id.clone(), habit);
    }

    /// Append an execution record. Duplicates per date are allowed, matching
    /// the storage contract.
    pub fn insert_execution(&mut self, execution: HabitExecution) {
        self.executions
            .entry(execution.habit_id.clone())
            .or_default()
            .push(execution);
    }

    /// Append a batch of execution records.
    pub fn insert_executions(&mut self, executions: impl IntoIterator<Item = HabitExecution>) {
        for execution in executions {
            self.insert_execution(execution);
        }
    }
}

impl ExecutionStore for MemoryStore {
    fn fetch_habit(&self, habit_id: &str) -> Result<Habit> {
        self.habits
            .get(habit_id)
            .cloned()
            .ok_or_else(|| Error::HabitNotFound(habit_id.to_string()))
    }

    fn fetch_executions(&self, habit_id: &str) -> Result<Vec<HabitExecution>> {
        Ok(self.executions.get(habit_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frequency;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_habit(id: &str) -> Habit {
        Habit {
            id: id.to_string(),
            name: "Morning run".to_string(),
            description: "Run before breakfast".to_string(),
            frequency: Frequency::Daily,
            created_on: date(2024, 1, 1),
        }
    }

    #[test]
    fn test_fetch_habit_not_found() {
        let store = MemoryStore::new();
        let result = store.fetch_habit("missing");
        assert!(matches!(result, Err(Error::HabitNotFound(_))));
    }

    #[test]
    fn test_fetch_executions_empty_is_ok() {
        let mut store = MemoryStore::new();
        store.insert_habit(sample_habit("h1"));

        // No executions recorded: empty vec, never an error
        let executions = store.fetch_executions("h1").unwrap();
        assert!(executions.is_empty());
    }

    #[test]
    fn test_fetch_executions_in_range_is_inclusive() {
        let mut store = MemoryStore::new();
        store.insert_habit(sample_habit("h1"));
        store.insert_executions([
            HabitExecution::new("h1", date(2024, 1, 1), true),
            HabitExecution::new("h1", date(2024, 1, 5), false),
            HabitExecution::new("h1", date(2024, 1, 10), true),
            HabitExecution::new("h1", date(2024, 1, 11), true),
        ]);

        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 10)).unwrap();
        let executions = store.fetch_executions_in_range("h1", &range).unwrap();
        assert_eq!(executions.len(), 3);
        assert!(executions.iter().all(|e| range.contains(e.date)));
    }
}
