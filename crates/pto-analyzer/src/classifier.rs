//! Weekday-pattern classification of a single resolved holiday.
//!
//! A fixed table keyed by day-of-week:
//!
//! | Weekday  | Kind    | Leave | Total | Play                              |
//! |----------|---------|-------|-------|-----------------------------------|
//! | Thursday | Bridge  | 1     | 4     | take the following Friday         |
//! | Tuesday  | Bridge  | 1     | 4     | take the preceding Monday         |
//! | Monday   | Weekend | 0     | 3     | free, touches the weekend         |
//! | Friday   | Weekend | 0     | 3     | free, touches the weekend         |
//! | Wednesday| Stretch | 2     | 5     | take Monday + Tuesday before it   |
//! | Sat/Sun  | —       |       |       | no opportunity                    |
//!
//! A Wednesday holiday always bridges backward to the prior weekend; the
//! forward Thu+Fri variant is deliberately not offered.

use pto_time::{Date, Weekday};

use crate::holiday::ResolvedHoliday;
use crate::opportunity::{Kind, Opportunity};

/// Format the continuous break `start..=end` as a date-range label.
pub(crate) fn span_label(start: Date, end: Date) -> String {
    format!("{} - {}", start.short_label(), end.short_label())
}

/// Classify one resolved holiday into at most one opportunity.
///
/// Returns `None` for weekend holidays, and for holidays so close to the
/// edge of the representable date range that the break span cannot be
/// computed.
pub(crate) fn classify(holiday: &ResolvedHoliday) -> Option<Opportunity> {
    let date = holiday.date;
    match date.weekday() {
        Weekday::Thursday => {
            let friday = date.add_days(1).ok()?;
            let sunday = date.add_days(3).ok()?;
            Some(Opportunity::new(
                Kind::Bridge,
                holiday.name.clone(),
                date,
                1,
                4,
                format!("Take Friday {} for a 4-day weekend", friday.short_label()),
                span_label(date, sunday),
            ))
        }
        Weekday::Tuesday => {
            let monday = date.add_days(-1).ok()?;
            let saturday = date.add_days(-3).ok()?;
            Some(Opportunity::new(
                Kind::Bridge,
                holiday.name.clone(),
                date,
                1,
                4,
                format!("Take Monday {} for a 4-day weekend", monday.short_label()),
                span_label(saturday, date),
            ))
        }
        Weekday::Monday => {
            let saturday = date.add_days(-2).ok()?;
            Some(Opportunity::new(
                Kind::Weekend,
                holiday.name.clone(),
                date,
                0,
                3,
                format!(
                    "Natural 3-day weekend from {} through {} (no PTO needed)",
                    saturday.short_label(),
                    date.short_label()
                ),
                span_label(saturday, date),
            ))
        }
        Weekday::Friday => {
            let sunday = date.add_days(2).ok()?;
            Some(Opportunity::new(
                Kind::Weekend,
                holiday.name.clone(),
                date,
                0,
                3,
                format!(
                    "Natural 3-day weekend from {} through {} (no PTO needed)",
                    date.short_label(),
                    sunday.short_label()
                ),
                span_label(date, sunday),
            ))
        }
        Weekday::Wednesday => {
            let monday = date.add_days(-2).ok()?;
            let saturday = date.add_days(-4).ok()?;
            Some(Opportunity::new(
                Kind::Stretch,
                holiday.name.clone(),
                date,
                2,
                5,
                format!(
                    "Take Monday {} and Tuesday {} for a 5-day break",
                    monday.short_label(),
                    (date.add_days(-1).ok()?).short_label()
                ),
                span_label(saturday, date),
            ))
        }
        Weekday::Saturday | Weekday::Sunday => None,
    }
}
