//! Detection of bridgeable gaps between adjacent holidays.
//!
//! Only consecutive neighbors in the date-sorted sequence are considered.
//! A pair whose dates are `gap` days apart with `1 < gap <= 5` can be
//! bridged: the `gap - 1` workdays strictly between them cost leave, and the
//! continuous break runs from the first holiday through the second,
//! `gap + 1` days in all.

use pto_core::Natural;

use crate::classifier::span_label;
use crate::holiday::ResolvedHoliday;
use crate::opportunity::{Kind, Opportunity};

/// Widest bridgeable gap in days between two holidays.
const MAX_GAP: i32 = 5;

/// Emit a cluster opportunity for a consecutive pair, if the gap allows one.
///
/// Same-day and back-to-back holidays (`gap <= 1`) leave nothing to bridge;
/// gaps over [`MAX_GAP`] are not worth bridging.
pub(crate) fn bridge_pair(
    first: &ResolvedHoliday,
    second: &ResolvedHoliday,
) -> Option<Opportunity> {
    let gap = first.date.days_until(second.date);
    if gap <= 1 || gap > MAX_GAP {
        return None;
    }
    let leave_days_cost = (gap - 1) as Natural;
    let total_days_off = (gap + 1) as Natural;
    let description = if leave_days_cost == 1 {
        format!("Bridge 1 day between holidays for {total_days_off} days off")
    } else {
        format!("Bridge {leave_days_cost} days between holidays for {total_days_off} days off")
    };
    Some(Opportunity::new(
        Kind::Cluster,
        format!("{} + {}", first.name, second.name),
        first.date,
        leave_days_cost,
        total_days_off,
        description,
        span_label(first.date, second.date),
    ))
}
