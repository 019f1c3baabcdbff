//! `Analyzer` — the pipeline entry point.

use crate::classifier;
use crate::cluster;
use crate::holiday::{Holiday, ResolvedHoliday};
use crate::opportunity::Opportunity;
use crate::ranker;
use crate::schedule::ScheduleTable;

/// The PTO opportunity analyzer for one schedule table.
///
/// Construction is the only configurable step; [`analyze`](Analyzer::analyze)
/// is a pure function of its input.  An `Analyzer` holds no mutable state and
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    table: ScheduleTable,
}

impl Analyzer {
    /// Build an analyzer around an explicit schedule table.
    pub fn new(table: ScheduleTable) -> Self {
        Analyzer { table }
    }

    /// Analyzer over the built-in US federal 2026 table.
    pub fn us_federal_2026() -> Self {
        Analyzer::new(ScheduleTable::us_federal_2026())
    }

    /// The schedule table this analyzer resolves against.
    pub fn table(&self) -> &ScheduleTable {
        &self.table
    }

    /// Run the full pipeline over one state's holiday list.
    ///
    /// Resolution drops unrecognized holidays silently; the survivors are
    /// sorted by date, each is classified by weekday pattern, each
    /// consecutive pair is checked for a bridgeable gap, and the combined
    /// records come back ranked non-increasing by ROI (free breaks first,
    /// ties in generation order).
    ///
    /// Never fails: an empty or fully-unresolvable list yields an empty
    /// result.
    pub fn analyze(&self, holidays: &[Holiday]) -> Vec<Opportunity> {
        let mut resolved: Vec<ResolvedHoliday> = holidays
            .iter()
            .filter_map(|holiday| {
                self.table.resolve(&holiday.when).map(|date| ResolvedHoliday {
                    name: holiday.name.clone(),
                    date,
                })
            })
            .collect();
        resolved.sort_by_key(|holiday| holiday.date);

        let mut opportunities = Vec::new();
        for (index, holiday) in resolved.iter().enumerate() {
            if let Some(opportunity) = classifier::classify(holiday) {
                opportunities.push(opportunity);
            }
            if let Some(next) = resolved.get(index + 1) {
                if let Some(opportunity) = cluster::bridge_pair(holiday, next) {
                    opportunities.push(opportunity);
                }
            }
        }

        ranker::rank(&mut opportunities);
        opportunities
    }
}
