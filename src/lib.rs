//! # habitscope
//!
//! Analytics engine for habit execution logs.
//!
//! habitscope turns a list of dated completion records into streaks, success
//! rates, trend signals, and natural-language progress reports and
//! suggestions. It owns no storage and no transport: executions arrive
//! through the [`ExecutionStore`] trait, and results leave as plain values.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use habitscope::{
//!     AnalyticsEngine, DateRange, Frequency, Habit, HabitExecution, MemoryStore,
//! };
//!
//! let mut store = MemoryStore::new();
//! store.insert_habit(Habit {
//!     id: "read".to_string(),
//!     name: "Read 20 pages".to_string(),
//!     description: "Fiction before bed".to_string(),
//!     frequency: Frequency::Daily,
//!     created_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//! });
//! store.insert_execution(HabitExecution::new(
//!     "read",
//!     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     true,
//! ));
//!
//! let engine = AnalyticsEngine::new(store);
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
//! )
//! .unwrap();
//! let rate = engine.success_rate("read", &range).unwrap();
//! assert_eq!(rate, 10.0);
//! ```

// Re-export commonly used items at the crate root
pub use analytics::{AnalyticsEngine, ProgressReport, ReportEntry, SuggestionEngine};
pub use config::{Config, SuggestionConfig};
pub use error::{Error, Result};
pub use store::{ExecutionStore, MemoryStore};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod types;
