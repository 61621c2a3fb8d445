//! Analytics over habit execution logs
//!
//! Derives insight from a raw, unordered list of dated completion records:
//! - Streaks: current (ending today) and longest anywhere in history
//! - Success rates over an explicit date window
//! - Trend direction from comparing two halves of history
//! - Natural-language improvement suggestions
//! - Composed progress reports
//!
//! Each calculator is a pure function of its inputs: no state between calls,
//! no I/O, no shared mutable data. All fetching happens once per request in
//! [`engine::AnalyticsEngine`], which also carries the cross-cutting
//! run instrumentation so the calculators stay clean.

pub mod engine;
pub mod rate;
pub mod report;
pub mod streak;
pub mod suggest;
pub mod trend;

pub use engine::{AnalyticsEngine, RunObserver, RunRecord, RunStatus};
pub use rate::success_rate;
pub use report::{ProgressReport, ReportEntry};
pub use streak::{current_streak, longest_streak};
pub use suggest::SuggestionEngine;
pub use trend::is_improving;
