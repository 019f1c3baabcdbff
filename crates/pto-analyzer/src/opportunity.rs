//! `Opportunity` output records, kinds, and summaries.

use pto_core::{Natural, Real, Size};
use pto_time::Date;

/// The pattern a PTO opportunity exploits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Kind {
    /// One leave day adjacent to a weekend turns a holiday into a 4-day break.
    Bridge,
    /// The holiday touches a weekend on its own — a free 3-day break.
    Weekend,
    /// A mid-week holiday bridged back to the prior weekend with two leave
    /// days for a 5-day break.
    Stretch,
    /// Two closely-spaced holidays bridged into one continuous break.
    Cluster,
}

impl Kind {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Bridge => "Bridge Day",
            Kind::Weekend => "Long Weekend",
            Kind::Stretch => "Extended Break",
            Kind::Cluster => "Holiday Cluster",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One ranked "take N days of leave, get M days off" recommendation.
///
/// Produced fresh on every analysis call and never mutated afterwards.  The
/// free-text fields (`holiday_label`, `description`, `date_range_label`) are
/// presentation data; escaping them for any markup target is the renderer's
/// job.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Opportunity {
    /// The pattern this opportunity exploits.
    pub kind: Kind,
    /// The holiday name, or both names joined for a cluster.
    pub holiday_label: String,
    /// The (first) holiday date the opportunity is anchored on.
    pub anchor_date: Date,
    /// Leave days spent to obtain the break.
    pub leave_days_cost: Natural,
    /// Length of the resulting continuous break in days.
    pub total_days_off: Natural,
    /// `total_days_off / leave_days_cost`; `+∞` when no leave is needed.
    pub roi: Real,
    /// Human-readable recommendation naming the concrete dates involved.
    pub description: String,
    /// The span of the break, e.g. `"Nov 26 - Nov 29"`.
    pub date_range_label: String,
}

impl Opportunity {
    /// Build a record, deriving `roi` from the cost/payoff pair.
    pub(crate) fn new(
        kind: Kind,
        holiday_label: String,
        anchor_date: Date,
        leave_days_cost: Natural,
        total_days_off: Natural,
        description: String,
        date_range_label: String,
    ) -> Self {
        Opportunity {
            kind,
            holiday_label,
            anchor_date,
            leave_days_cost,
            total_days_off,
            roi: roi(leave_days_cost, total_days_off),
            description,
            date_range_label,
        }
    }

    /// Return `true` if the break costs no leave days.
    pub fn is_free(&self) -> bool {
        self.leave_days_cost == 0
    }

    /// Format the ROI for display: `"∞"` for free breaks, `"4.0x"` otherwise.
    pub fn format_roi(&self) -> String {
        if self.roi.is_infinite() {
            "∞".to_owned()
        } else {
            format!("{:.1}x", self.roi)
        }
    }

    /// Format the leave cost for display: `"FREE"`, `"1 day"`, `"2 days"`.
    pub fn leave_cost_label(&self) -> String {
        match self.leave_days_cost {
            0 => "FREE".to_owned(),
            1 => "1 day".to_owned(),
            n => format!("{n} days"),
        }
    }
}

/// Return on investment of an opportunity.
///
/// By convention a zero-cost break has infinite return rather than being a
/// division-by-zero error.
pub(crate) fn roi(leave_days_cost: Natural, total_days_off: Natural) -> Real {
    if leave_days_cost == 0 {
        Real::INFINITY
    } else {
        total_days_off as Real / leave_days_cost as Real
    }
}

/// Per-kind counts over an analysis result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpportunitySummary {
    /// Number of [`Kind::Bridge`] opportunities.
    pub bridges: Size,
    /// Number of [`Kind::Weekend`] opportunities.
    pub weekends: Size,
    /// Number of [`Kind::Stretch`] opportunities.
    pub stretches: Size,
    /// Number of [`Kind::Cluster`] opportunities.
    pub clusters: Size,
}

/// Count opportunities per kind, for summary headers.
pub fn summarize(opportunities: &[Opportunity]) -> OpportunitySummary {
    let mut summary = OpportunitySummary::default();
    for opportunity in opportunities {
        match opportunity.kind {
            Kind::Bridge => summary.bridges += 1,
            Kind::Weekend => summary.weekends += 1,
            Kind::Stretch => summary.stretches += 1,
            Kind::Cluster => summary.clusters += 1,
        }
    }
    summary
}
