//! # pto-analyzer
//!
//! The PTO opportunity analysis pipeline.
//!
//! Given one state's list of named holidays with fuzzy schedule descriptions
//! ("third Monday in January"), the analyzer resolves each description to a
//! concrete date in the table's target year, classifies each date by its
//! weekday-adjacency pattern, detects closely-spaced holiday pairs, and ranks
//! the resulting "take N days of leave, get M days off" opportunities by
//! return on investment.
//!
//! The pipeline is a pure, synchronous computation: no I/O, no shared state,
//! and no errors surfaced to the caller — irregular input (unrecognized
//! schedule text, missing fields, an empty list) degrades to fewer or zero
//! opportunities, never a failure.
//!
//! ```
//! use pto_analyzer::{Analyzer, Holiday, Kind};
//!
//! let analyzer = Analyzer::us_federal_2026();
//! let holidays = vec![Holiday::new("Thanksgiving", "Fourth Thursday in November")];
//! let opportunities = analyzer.analyze(&holidays);
//!
//! // Thanksgiving 2026 is a Thursday: one bridge day buys a 4-day weekend.
//! assert_eq!(opportunities.len(), 1);
//! assert_eq!(opportunities[0].kind, Kind::Bridge);
//! assert_eq!(opportunities[0].leave_days_cost, 1);
//! assert_eq!(opportunities[0].total_days_off, 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Analyzer` — the pipeline entry point.
pub mod analyzer;

/// Weekday-pattern classification of a single resolved holiday.
mod classifier;

/// Detection of bridgeable gaps between adjacent holidays.
mod cluster;

/// `Holiday` and `ResolvedHoliday` records.
pub mod holiday;

/// `Opportunity` output records, kinds, and summaries.
pub mod opportunity;

/// Stable ROI ranking of opportunity records.
mod ranker;

/// `ScheduleTable` — fuzzy schedule phrases mapped to dates.
pub mod schedule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use analyzer::Analyzer;
pub use holiday::{Holiday, ResolvedHoliday};
pub use opportunity::{summarize, Kind, Opportunity, OpportunitySummary};
pub use schedule::ScheduleTable;
