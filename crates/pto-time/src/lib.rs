//! # pto-time
//!
//! Calendar primitives for ptoplan: `Date`, `Weekday`, and `Month`.
//!
//! These types cover exactly what holiday analysis needs — day-level
//! arithmetic, weekday classification, and nth-weekday-of-month lookups used
//! to generate schedule tables for a target year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
