//! Error types for ptoplan.
//!
//! The analysis pipeline itself is total — bad input degrades to "no
//! opportunity" rather than raising (see `pto-analyzer`).  Errors exist only
//! at construction seams: building a date out of range, or building a
//! schedule table whose phrases collide.

use thiserror::Error;

/// The top-level error type used throughout ptoplan.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range components or arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// A schedule table failed its construction-time validation.
    #[error("schedule table: {0}")]
    ScheduleTable(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout ptoplan.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pto_core::{ensure, errors::Error};
/// fn positive(x: f64) -> pto_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::ScheduleTable(...))` immediately.
///
/// # Example
/// ```
/// use pto_core::{fail, errors::Error};
/// fn always_err() -> pto_core::errors::Result<()> {
///     fail!("phrase {:?} is empty", "");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::ScheduleTable(
            format!($($msg)*)
        ))
    };
}
