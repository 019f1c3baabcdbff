//! Integration tests for the full analysis pipeline.

use approx::assert_relative_eq;
use proptest::prelude::*;
use pto_analyzer::{summarize, Analyzer, Holiday, Kind, ScheduleTable};
use pto_time::Date;

fn date(m: u8, d: u8) -> Date {
    Date::from_ymd(2026, m, d).unwrap()
}

// ── Concrete scenarios ────────────────────────────────────────────────────────

#[test]
fn saturday_holiday_yields_nothing() {
    // July 4, 2026 falls on a Saturday: no weekday pattern, and a
    // single-holiday list has no pairs.
    let analyzer = Analyzer::us_federal_2026();
    let holidays = vec![Holiday::new("Independence Day", "July 4")];
    assert!(analyzer.analyze(&holidays).is_empty());
}

#[test]
fn wednesday_holiday_yields_a_stretch() {
    // Nov 11, 2026 falls on a Wednesday.
    let analyzer = Analyzer::us_federal_2026();
    let holidays = vec![Holiday::new("Veterans Day", "Nov 11")];
    let opportunities = analyzer.analyze(&holidays);
    assert_eq!(opportunities.len(), 1);
    let opp = &opportunities[0];
    assert_eq!(opp.kind, Kind::Stretch);
    assert_eq!(opp.leave_days_cost, 2);
    assert_eq!(opp.total_days_off, 5);
    assert_relative_eq!(opp.roi, 2.5);
    assert_eq!(opp.anchor_date, date(11, 11));
}

#[test]
fn holidays_three_days_apart_form_a_cluster() {
    // A custom table with two holidays three days apart: Monday Mar 2 and
    // Thursday Mar 5, 2026.
    let table = ScheduleTable::new(
        2026,
        &[
            ("town festival", date(3, 2)),
            ("founders day", date(3, 5)),
        ],
    )
    .unwrap();
    let analyzer = Analyzer::new(table);
    let holidays = vec![
        Holiday::new("Town Festival", "Town Festival (first Monday of March)"),
        Holiday::new("Founders Day", "Founders Day"),
    ];
    let opportunities = analyzer.analyze(&holidays);

    // Monday → free weekend, Thursday → bridge, plus the cluster between.
    assert_eq!(opportunities.len(), 3);

    let cluster = opportunities
        .iter()
        .find(|o| o.kind == Kind::Cluster)
        .expect("cluster expected");
    assert_eq!(cluster.leave_days_cost, 2);
    assert_eq!(cluster.total_days_off, 4);
    assert_relative_eq!(cluster.roi, 2.0);
    assert_eq!(cluster.holiday_label, "Town Festival + Founders Day");
    assert_eq!(cluster.date_range_label, "Mar 2 - Mar 5");

    // Ranked: free weekend (∞) first, bridge (4.0), cluster (2.0).
    assert_eq!(opportunities[0].kind, Kind::Weekend);
    assert_eq!(opportunities[1].kind, Kind::Bridge);
    assert_eq!(opportunities[2].kind, Kind::Cluster);
}

#[test]
fn thanksgiving_resolves_and_bridges() {
    let analyzer = Analyzer::us_federal_2026();
    let holidays = vec![Holiday::new("Thanksgiving", "fourth Thursday in November")];
    let opportunities = analyzer.analyze(&holidays);
    assert_eq!(opportunities.len(), 1);
    let opp = &opportunities[0];
    assert_eq!(opp.kind, Kind::Bridge);
    assert_eq!(opp.anchor_date, date(11, 26));
    assert_eq!(opp.leave_days_cost, 1);
    assert_eq!(opp.total_days_off, 4);
    assert_relative_eq!(opp.roi, 4.0);
    assert!(
        opp.description.contains("Nov 27"),
        "description should name the bridged Friday: {:?}",
        opp.description
    );
}

// ── A realistic state list end to end ────────────────────────────────────────

#[test]
fn federal_2026_list_ranks_free_breaks_first() {
    let analyzer = Analyzer::us_federal_2026();
    let holidays = vec![
        Holiday::new("New Year's Day", "January 1"),
        Holiday::new("Martin Luther King Jr. Day", "Third Monday in January"),
        Holiday::new("Presidents' Day", "Third Monday in February"),
        Holiday::new("Memorial Day", "Last Monday in May"),
        Holiday::new("Independence Day", "July 4"),
        Holiday::new("Labor Day", "First Monday in September"),
        Holiday::new("Columbus Day", "Second Monday in October"),
        Holiday::new("Veterans Day", "November 11"),
        Holiday::new("Thanksgiving", "Fourth Thursday in November"),
        Holiday::new("Christmas Day", "December 25"),
    ];
    let opportunities = analyzer.analyze(&holidays);

    // 2026 weekdays: Jan 1 Thu, five Monday holidays, Jul 4 Sat (dropped
    // pattern), Nov 11 Wed, Nov 26 Thu, Dec 25 Fri.  No pair is within five
    // days, so no clusters.
    let summary = summarize(&opportunities);
    assert_eq!(summary.bridges, 2); // New Year's Day, Thanksgiving
    assert_eq!(summary.weekends, 6); // five Mondays + Christmas Friday
    assert_eq!(summary.stretches, 1); // Veterans Day
    assert_eq!(summary.clusters, 0);
    assert_eq!(opportunities.len(), 9);

    // All six free breaks precede every paid one.
    assert!(opportunities[..6].iter().all(|o| o.is_free()));
    assert!(opportunities[6..].iter().all(|o| !o.is_free()));

    // Free weekends keep generation (date) order among themselves.
    let free_anchors: Vec<Date> = opportunities[..6].iter().map(|o| o.anchor_date).collect();
    let mut sorted = free_anchors.clone();
    sorted.sort();
    assert_eq!(free_anchors, sorted);
}

// ── Properties ────────────────────────────────────────────────────────────────

/// Schedule text that may or may not resolve against the built-in table.
fn when_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("January 1".to_owned()),
        Just("Third Monday in January".to_owned()),
        Just("Third Monday in February".to_owned()),
        Just("Last Monday in May".to_owned()),
        Just("July 4".to_owned()),
        Just("First Monday in September".to_owned()),
        Just("Second Monday in October".to_owned()),
        Just("November 11".to_owned()),
        Just("Fourth Thursday in November".to_owned()),
        Just("December 25".to_owned()),
        "[a-z ]{0,24}", // junk that must degrade to unresolved
    ]
}

fn holidays_strategy() -> impl Strategy<Value = Vec<Holiday>> {
    proptest::collection::vec(
        ("[A-Za-z ]{0,16}", when_strategy())
            .prop_map(|(name, when)| Holiday::new(name, when)),
        0..12,
    )
}

proptest! {
    #[test]
    fn analyze_is_deterministic(holidays in holidays_strategy()) {
        let analyzer = Analyzer::us_federal_2026();
        prop_assert_eq!(analyzer.analyze(&holidays), analyzer.analyze(&holidays));
    }

    #[test]
    fn roi_ordering_is_non_increasing(holidays in holidays_strategy()) {
        let analyzer = Analyzer::us_federal_2026();
        let opportunities = analyzer.analyze(&holidays);
        for pair in opportunities.windows(2) {
            prop_assert!(pair[0].roi >= pair[1].roi);
        }
    }

    #[test]
    fn weekend_opportunities_are_free(holidays in holidays_strategy()) {
        let analyzer = Analyzer::us_federal_2026();
        for opportunity in analyzer.analyze(&holidays) {
            if opportunity.kind == Kind::Weekend {
                prop_assert_eq!(opportunity.leave_days_cost, 0);
                prop_assert!(opportunity.roi.is_infinite());
            }
            // The roi convention holds across all kinds.
            prop_assert_eq!(opportunity.is_free(), opportunity.roi.is_infinite());
        }
    }

    #[test]
    fn junk_schedules_contribute_nothing(name in "[A-Za-z ]{0,16}", junk in "[a-z ]{0,24}") {
        // Filter out junk that happens to contain a real phrase.
        prop_assume!(Analyzer::us_federal_2026().table().resolve(&junk).is_none());

        let analyzer = Analyzer::us_federal_2026();
        let base = vec![
            Holiday::new("Veterans Day", "Nov 11"),
            Holiday::new("Thanksgiving", "Fourth Thursday in November"),
        ];
        let mut with_junk = base.clone();
        with_junk.insert(1, Holiday::new(name, junk));

        // An unresolvable holiday neither adds opportunities nor breaks up
        // cluster pairing of its neighbors.
        prop_assert_eq!(analyzer.analyze(&base), analyzer.analyze(&with_junk));
    }
}
