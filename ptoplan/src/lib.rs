//! # ptoplan
//!
//! Paid-time-off opportunity analysis for US state holiday calendars.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pto-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! ptoplan = "0.1"
//! ```
//!
//! ```rust
//! use ptoplan::{Analyzer, Holiday};
//!
//! let analyzer = Analyzer::us_federal_2026();
//! let ranked = analyzer.analyze(&[
//!     Holiday::new("Veterans Day", "November 11"),
//!     Holiday::new("Thanksgiving", "Fourth Thursday in November"),
//! ]);
//! for opportunity in &ranked {
//!     println!(
//!         "{} [{}] {} (cost {}, ROI {})",
//!         opportunity.holiday_label,
//!         opportunity.kind,
//!         opportunity.description,
//!         opportunity.leave_cost_label(),
//!         opportunity.format_roi(),
//!     );
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pto_core as core;

/// Date, weekday, and month types.
pub use pto_time as time;

/// The analysis pipeline.
pub use pto_analyzer as analyzer;

pub use pto_analyzer::{
    summarize, Analyzer, Holiday, Kind, Opportunity, OpportunitySummary, ResolvedHoliday,
    ScheduleTable,
};
pub use pto_time::{Date, Month, Weekday};
