//! Stable ROI ranking of opportunity records.

use crate::opportunity::Opportunity;

/// Sort opportunities non-increasing by ROI, in place.
///
/// Infinite-ROI (zero-cost) records sort first.  The sort is stable, so
/// records with equal ROI keep their generation order — that order is part
/// of the analyzer's output contract.  No filtering happens here; showing
/// only a top-N prefix is the presentation layer's decision.
pub(crate) fn rank(opportunities: &mut [Opportunity]) {
    // total_cmp: ROI values are ratios of small positive integers or +inf,
    // never NaN.
    opportunities.sort_by(|a, b| b.roi.total_cmp(&a.roi));
}
