//! # pto-core
//!
//! Core types, aliases, and error definitions for ptoplan.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – primitive type aliases, the error enum, and the `ensure!` /
//! `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for return-on-investment ratios.
pub type Real = f64;

/// Non-negative integer type used for day counts.
pub type Natural = u32;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
