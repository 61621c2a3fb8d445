//! Instrumented analytics entry points
//!
//! [`AnalyticsEngine`] ties an [`ExecutionStore`] to the pure calculators.
//! Every operation follows the same shape:
//!
//! 1. fetch the habit and/or execution list from the store, once;
//! 2. run the pure calculator(s) in memory;
//! 3. record a [`RunRecord`] (operation, habit, timing, outcome) through
//!    `tracing` and an optional injected [`RunObserver`].
//!
//! The calculators themselves stay free of logging and store access, so the
//! observability wrapper lives in exactly one place. The engine holds no
//! state between calls and never caches execution lists; every request
//! re-fetches fresh data. Store errors propagate unchanged and nothing is
//! retried at this layer.

use crate::analytics::{rate, report::ProgressReport, streak, suggest::SuggestionEngine, trend};
use crate::error::Result;
use crate::store::ExecutionStore;
use crate::types::{DateRange, HabitExecution};
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Instant;

// ============================================
// Run records
// ============================================

/// Outcome of an analytics operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Operation completed and produced a value
    Completed,
    /// Operation failed; `error_message` carries the cause
    Failed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Completed => "completed",
            RunStatus::Failed => "failed",
        }
    }
}

/// One observed analytics invocation.
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Operation name (e.g. "current_streak", "report")
    pub operation: &'static str,
    /// Habit the operation ran against
    pub habit_id: String,
    /// When the operation started
    pub started_at: DateTime<Utc>,
    /// How long it took (milliseconds)
    pub duration_ms: i64,
    /// Whether it completed or failed
    pub status: RunStatus,
    /// Error message when the run failed
    pub error_message: Option<String>,
}

/// Hook invoked after every engine operation.
///
/// Lets a host record invocations wherever it wants (audit table, metrics
/// pipeline) without the calculators knowing about it. The engine always logs
/// through `tracing` regardless of whether an observer is installed.
pub trait RunObserver: Send + Sync {
    fn record(&self, run: &RunRecord);
}

// ============================================
// Engine
// ============================================

/// Analytics engine over an execution store.
///
/// Generic over the store so tests and embedders can use
/// [`MemoryStore`](crate::store::MemoryStore) while a service wires in its
/// own persistence-backed implementation.
pub struct AnalyticsEngine<S> {
    store: S,
    suggestions: SuggestionEngine,
    observer: Option<Box<dyn RunObserver>>,
}

impl<S: ExecutionStore> AnalyticsEngine<S> {
    /// Engine with default suggestion thresholds and no observer.
    pub fn new(store: S) -> Self {
        Self {
            store,
            suggestions: SuggestionEngine::new(),
            observer: None,
        }
    }

    /// Replace the suggestion engine (e.g. with custom thresholds).
    pub fn with_suggestions(mut self, suggestions: SuggestionEngine) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Install a run observer.
    pub fn with_observer(mut self, observer: Box<dyn RunObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Wrap an operation with timing, outcome logging, and observer dispatch.
    fn instrument<T>(
        &self,
        operation: &'static str,
        habit_id: &str,
        f: impl FnOnce() -> Result<T>,
    ) -> Result<T> {
        let started_at = Utc::now();
        let start = Instant::now();

        let outcome = f();
        let duration_ms = start.elapsed().as_millis() as i64;

        let (status, error_message) = match &outcome {
            Ok(_) => (RunStatus::Completed, None),
            Err(e) => (RunStatus::Failed, Some(e.to_string())),
        };

        match &outcome {
            Ok(_) => tracing::debug!(operation, habit_id, duration_ms, "Analytics run completed"),
            Err(e) => tracing::error!(operation, habit_id, duration_ms, error = %e, "Analytics run failed"),
        }

        if let Some(observer) = &self.observer {
            observer.record(&RunRecord {
                operation,
                habit_id: habit_id.to_string(),
                started_at,
                duration_ms,
                status,
                error_message,
            });
        }

        outcome
    }

    /// Current unbroken streak ending today.
    pub fn current_streak(&self, habit_id: &str) -> Result<u32> {
        self.current_streak_as_of(habit_id, Self::today())
    }

    /// Current streak with an explicit "today", for deterministic callers.
    pub fn current_streak_as_of(&self, habit_id: &str, today: NaiveDate) -> Result<u32> {
        self.instrument("current_streak", habit_id, || {
            let history = self.store.fetch_executions(habit_id)?;
            Ok(streak::current_streak(&history, today))
        })
    }

    /// Longest streak anywhere in the habit's history.
    pub fn longest_streak(&self, habit_id: &str) -> Result<u32> {
        self.instrument("longest_streak", habit_id, || {
            let history = self.store.fetch_executions(habit_id)?;
            Ok(streak::longest_streak(&history))
        })
    }

    /// Completion percentage over an inclusive window, days-in-range policy.
    pub fn success_rate(&self, habit_id: &str, range: &DateRange) -> Result<f64> {
        self.instrument("success_rate", habit_id, || {
            let history = self.store.fetch_executions_in_range(habit_id, range)?;
            Ok(rate::success_rate(&history, range))
        })
    }

    /// Whether the later half of history outperforms the earlier half.
    pub fn is_improving(&self, habit_id: &str) -> Result<bool> {
        self.instrument("is_improving", habit_id, || {
            let history = self.store.fetch_executions(habit_id)?;
            Ok(trend::is_improving(&history))
        })
    }

    /// Ordered improvement suggestions for a habit.
    pub fn suggestions(&self, habit_id: &str) -> Result<Vec<String>> {
        self.suggestions_as_of(habit_id, Self::today())
    }

    /// Suggestions with an explicit "today", for deterministic callers.
    pub fn suggestions_as_of(&self, habit_id: &str, today: NaiveDate) -> Result<Vec<String>> {
        self.instrument("suggestions", habit_id, || {
            let habit = self.store.fetch_habit(habit_id)?;
            let history = self.store.fetch_executions(habit_id)?;
            Ok(self.suggestions.suggest(&habit, &history, today))
        })
    }

    /// Composed progress report over a window.
    pub fn report(&self, habit_id: &str, range: &DateRange) -> Result<ProgressReport> {
        self.report_as_of(habit_id, range, Self::today())
    }

    /// Report with an explicit "today", for deterministic callers.
    ///
    /// Resolves the habit first: an unresolved id fails with `HabitNotFound`
    /// before any computation happens.
    pub fn report_as_of(
        &self,
        habit_id: &str,
        range: &DateRange,
        today: NaiveDate,
    ) -> Result<ProgressReport> {
        self.instrument("report", habit_id, || {
            let habit = self.store.fetch_habit(habit_id)?;

            // One fetch per request; the window view is filtered locally.
            let history = self.store.fetch_executions(habit_id)?;
            let windowed: Vec<HabitExecution> = history
                .iter()
                .filter(|e| range.contains(e.date))
                .cloned()
                .collect();

            let current_streak = streak::current_streak(&history, today);
            let success_rate = rate::success_rate(&windowed, range);

            Ok(ProgressReport::compose(
                habit.name,
                *range,
                current_streak,
                success_rate,
                &windowed,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;
    use crate::types::{Frequency, Habit, HabitExecution};
    use std::sync::{Arc, Mutex};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_habit() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_habit(Habit {
            id: "h1".to_string(),
            name: "Stretch".to_string(),
            description: "Five minutes after waking up".to_string(),
            frequency: Frequency::Daily,
            created_on: date(2024, 1, 1),
        });
        store
    }

    #[derive(Clone, Default)]
    struct CapturingObserver {
        records: Arc<Mutex<Vec<RunRecord>>>,
    }

    impl RunObserver for CapturingObserver {
        fn record(&self, run: &RunRecord) {
            self.records.lock().unwrap().push(run.clone());
        }
    }

    #[test]
    fn test_empty_history_yields_zero_results() {
        let engine = AnalyticsEngine::new(store_with_habit());
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 10)).unwrap();

        assert_eq!(engine.current_streak("h1").unwrap(), 0);
        assert_eq!(engine.longest_streak("h1").unwrap(), 0);
        assert_eq!(engine.success_rate("h1", &range).unwrap(), 0.0);
        assert!(!engine.is_improving("h1").unwrap());
    }

    #[test]
    fn test_report_for_unknown_habit_fails_before_computation() {
        let engine = AnalyticsEngine::new(MemoryStore::new());
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 10)).unwrap();

        let result = engine.report_as_of("nope", &range, date(2024, 1, 10));
        assert!(matches!(result, Err(Error::HabitNotFound(_))));
    }

    #[test]
    fn test_report_composes_streak_rate_and_listing() {
        let mut store = store_with_habit();
        store.insert_executions([
            HabitExecution::new("h1", date(2024, 1, 2), true),
            HabitExecution::new("h1", date(2024, 1, 10), false),
            HabitExecution::new("h1", date(2024, 1, 29), true),
        ]);
        let engine = AnalyticsEngine::new(store);
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap();

        let report = engine.report_as_of("h1", &range, date(2024, 1, 29)).unwrap();
        assert_eq!(report.habit_name, "Stretch");
        assert_eq!(report.current_streak, 1);
        // 2 completed days over 31 calendar days
        assert!((report.success_rate - 2.0 / 31.0 * 100.0).abs() < 1e-9);
        assert_eq!(report.entries.len(), 3);
        assert!(report.entries.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn test_observer_sees_completed_and_failed_runs() {
        let observer = CapturingObserver::default();
        let engine =
            AnalyticsEngine::new(store_with_habit()).with_observer(Box::new(observer.clone()));

        engine.longest_streak("h1").unwrap();
        let _ = engine.suggestions_as_of("missing", date(2024, 2, 1));

        let records = observer.records.lock().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].operation, "longest_streak");
        assert_eq!(records[0].status, RunStatus::Completed);
        assert_eq!(records[1].operation, "suggestions");
        assert_eq!(records[1].status, RunStatus::Failed);
        assert!(records[1]
            .error_message
            .as_deref()
            .unwrap_or_default()
            .contains("habit not found"));
    }

    #[test]
    fn test_custom_suggestion_thresholds_flow_through() {
        use crate::analytics::SuggestionEngine;
        use crate::config::SuggestionConfig;

        let mut store = store_with_habit();
        store.insert_executions([
            HabitExecution::new("h1", date(2024, 1, 1), true),
            HabitExecution::new("h1", date(2024, 1, 2), false),
        ]);

        // 50% rate: below default threshold is a tie, but a strict engine
        // with a 90% floor flags it
        let strict = SuggestionEngine::with_config(SuggestionConfig {
            low_rate_threshold: 90.0,
            ..Default::default()
        });
        let engine = AnalyticsEngine::new(store).with_suggestions(strict);

        let suggestions = engine.suggestions_as_of("h1", date(2024, 1, 10)).unwrap();
        assert!(suggestions.iter().any(|s| s.contains("smaller steps")));
    }

    #[test]
    fn test_operations_are_idempotent() {
        let mut store = store_with_habit();
        store.insert_executions([
            HabitExecution::new("h1", date(2024, 1, 1), false),
            HabitExecution::new("h1", date(2024, 1, 2), true),
            HabitExecution::new("h1", date(2024, 1, 3), true),
        ]);
        let engine = AnalyticsEngine::new(store);
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 3)).unwrap();

        assert_eq!(
            engine.longest_streak("h1").unwrap(),
            engine.longest_streak("h1").unwrap()
        );
        assert_eq!(
            engine.success_rate("h1", &range).unwrap(),
            engine.success_rate("h1", &range).unwrap()
        );
        assert_eq!(
            engine.is_improving("h1").unwrap(),
            engine.is_improving("h1").unwrap()
        );
    }
}
