//! `Holiday` and `ResolvedHoliday` records.

use pto_time::Date;

/// A named holiday with a fuzzy schedule description, as supplied by the
/// data-loading collaborator.
///
/// The analyzer never mutates these.  A record with an empty or unrecognized
/// `when` simply resolves to nothing; a missing `name` is an empty label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Holiday {
    /// Holiday name, e.g. `"Thanksgiving"`.
    pub name: String,
    /// Free-text schedule description, e.g. `"Fourth Thursday in November"`.
    pub when: String,
    /// Optional free-text notes; carried for the presentation layer, unused
    /// by the analysis.
    pub notes: Option<String>,
}

impl Holiday {
    /// Convenience constructor for a holiday without notes.
    pub fn new(name: impl Into<String>, when: impl Into<String>) -> Self {
        Holiday {
            name: name.into(),
            when: when.into(),
            notes: None,
        }
    }
}

/// A holiday whose schedule description was resolved to a concrete date.
///
/// Exists only for the duration of one analysis call; holidays that fail to
/// resolve never become one of these (the resolver seam is an explicit
/// `Option`, see [`crate::schedule::ScheduleTable::resolve`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHoliday {
    /// Holiday name, copied from the input record.
    pub name: String,
    /// The concrete date in the schedule table's target year.
    pub date: Date,
}
