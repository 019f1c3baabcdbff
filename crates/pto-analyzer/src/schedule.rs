//! `ScheduleTable` — fuzzy schedule phrases mapped to concrete dates.
//!
//! Resolution is data, not code: a table holds literal `(phrase, date)`
//! pairs precomputed for one target year.  Supporting another year means
//! building another table, not touching the matching logic.

use pto_core::errors::Result;
use pto_core::{ensure, fail, Size};
use pto_time::Date;

/// One phrase → date mapping.
#[derive(Debug, Clone)]
struct Entry {
    /// Lowercased match phrase.
    phrase: String,
    date: Date,
}

/// A resolution table for one target year.
///
/// [`resolve`](ScheduleTable::resolve) scans the entries for the first phrase
/// contained in the (lowercased) input text.  For first-hit matching to be
/// order-independent the entries must not collide: construction rejects any
/// table where one entry's phrase contains another entry's phrase while the
/// two map to different dates.  Synonym phrases for the same date ("jan 1",
/// "january 1") are fine.
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    year: u16,
    entries: Vec<Entry>,
}

impl ScheduleTable {
    /// Build a table from `(phrase, date)` pairs for `year`.
    ///
    /// Phrases are normalized to lowercase.
    ///
    /// # Errors
    /// Fails if a phrase is empty, a date lies outside `year`, or two
    /// phrases mapping to different dates contain one another.
    pub fn new(year: u16, entries: &[(&str, Date)]) -> Result<Self> {
        let entries: Vec<Entry> = entries
            .iter()
            .map(|(phrase, date)| Entry {
                phrase: phrase.to_lowercase(),
                date: *date,
            })
            .collect();

        for entry in &entries {
            if entry.phrase.trim().is_empty() {
                fail!("empty phrase for {:?}", entry.date);
            }
            ensure!(
                entry.date.year() == year,
                "entry {:?} -> {:?} is outside target year {year}",
                entry.phrase,
                entry.date
            );
        }
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                if a.date != b.date
                    && (a.phrase.contains(&b.phrase) || b.phrase.contains(&a.phrase))
                {
                    fail!(
                        "phrase {:?} ({:?}) collides with {:?} ({:?})",
                        a.phrase,
                        a.date,
                        b.phrase,
                        b.date
                    );
                }
            }
        }

        Ok(ScheduleTable { year, entries })
    }

    /// The built-in table: US federal holiday phrasings for 2026.
    ///
    /// Dates are literal data, precomputed from the underlying rules
    /// (third Monday in January = Jan 19, and so on).
    pub fn us_federal_2026() -> Self {
        let d = |m, day| Date::from_ymd(2026, m, day).expect("valid built-in date");
        Self::new(
            2026,
            &[
                ("jan 1", d(1, 1)),
                ("january 1", d(1, 1)),
                ("third monday in january", d(1, 19)),
                ("third monday in february", d(2, 16)),
                ("last monday in may", d(5, 25)),
                ("july 4", d(7, 4)),
                ("first monday in september", d(9, 7)),
                ("second monday in october", d(10, 12)),
                ("nov 11", d(11, 11)),
                ("november 11", d(11, 11)),
                ("fourth thursday in november", d(11, 26)),
                ("dec 25", d(12, 25)),
                ("december 25", d(12, 25)),
            ],
        )
        .expect("built-in table is collision-free")
    }

    /// Resolve a free-text schedule description to a date.
    ///
    /// Case-insensitive substring match, first hit wins; `None` if nothing
    /// matches.  Total over all inputs — unresolvable text is a recognized
    /// outcome, not an error.
    pub fn resolve(&self, when: &str) -> Option<Date> {
        let needle = when.to_lowercase();
        self.entries
            .iter()
            .find(|entry| needle.contains(entry.phrase.as_str()))
            .map(|entry| entry.date)
    }

    /// The target year this table was built for.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Number of entries (synonyms counted separately).
    pub fn len(&self) -> Size {
        self.entries.len()
    }

    /// Return `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
