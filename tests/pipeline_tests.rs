use launchdash::aggregate::aggregate_outcomes;
use launchdash::filter::filter_by_payload;
use launchdash::types::{
    LaunchRecord, LaunchTable, OutcomeClass, PayloadRange, ScatterPoint, SiteSelector,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

/// Mostly the known pads, sometimes an arbitrary name (never the "ALL" sentinel).
fn site_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(SITES.to_vec()).prop_map(String::from),
        1 => "[a-z][a-z0-9 -]{0,11}",
    ]
}

fn outcome_strategy() -> impl Strategy<Value = OutcomeClass> {
    prop_oneof![Just(OutcomeClass::Success), Just(OutcomeClass::Failure)]
}

fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
    (
        site_strategy(),
        0.0_f64..=10_000.0,
        outcome_strategy(),
        prop::sample::select(BOOSTERS.to_vec()),
    )
        .prop_map(|(site, payload, outcome, booster)| {
            LaunchRecord::new(site, payload, outcome, booster)
        })
}

fn table_strategy() -> impl Strategy<Value = LaunchTable> {
    prop::collection::vec(record_strategy(), 1..64)
        .prop_filter_map("table needs rows", LaunchTable::from_records)
}

fn selector_strategy() -> impl Strategy<Value = SiteSelector> {
    prop_oneof![
        1 => Just(SiteSelector::All),
        3 => site_strategy().prop_map(SiteSelector::Site),
    ]
}

fn range_strategy() -> impl Strategy<Value = PayloadRange> {
    (-500.0_f64..10_500.0, 0.0_f64..6_000.0)
        .prop_map(|(lo, width)| PayloadRange::new(lo, lo + width))
}

/// `(inner, outer)` with `outer.lo <= inner.lo <= inner.hi <= outer.hi`
fn nested_ranges_strategy() -> impl Strategy<Value = (PayloadRange, PayloadRange)> {
    prop::array::uniform4(-500.0_f64..10_500.0).prop_map(|mut bounds| {
        bounds.sort_by(f64::total_cmp);
        (
            PayloadRange::new(bounds[1], bounds[2]),
            PayloadRange::new(bounds[0], bounds[3]),
        )
    })
}

fn inverted_range_strategy() -> impl Strategy<Value = PayloadRange> {
    (-500.0_f64..10_500.0, 0.001_f64..5_000.0)
        .prop_map(|(lo, gap)| PayloadRange::new(lo, lo - gap))
}

fn is_subsequence(inner: &[ScatterPoint], outer: &[ScatterPoint]) -> bool {
    let mut it = outer.iter();
    inner.iter().all(|p| it.any(|q| q == p))
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn all_sites_sum_equals_success_count(table in table_strategy()) {
        let successes = table
            .records()
            .iter()
            .filter(|r| r.outcome.is_success())
            .count();
        let series = aggregate_outcomes(&table, &SiteSelector::All);
        prop_assert_eq!(series.total(), successes);
        prop_assert!(series.segments.iter().all(|s| s.count > 0));
    }

    #[test]
    fn single_site_sum_equals_site_rows(table in table_strategy(), other in site_strategy()) {
        let mut sites: Vec<String> = table.sites().into_iter().map(String::from).collect();
        sites.push(other);
        for site in sites {
            let rows = table.records().iter().filter(|r| r.site == site).count();
            let series = aggregate_outcomes(&table, &SiteSelector::Site(site.clone()));
            prop_assert_eq!(series.total(), rows, "site {}", site);
            prop_assert!(series.segments.len() <= 2);
            prop_assert_eq!(series.is_empty(), rows == 0);
        }
    }

    #[test]
    fn filter_keeps_exactly_matching_rows(
        table in table_strategy(),
        site in selector_strategy(),
        range in range_strategy(),
    ) {
        let expected: Vec<f64> = table
            .records()
            .iter()
            .filter(|r| site.matches(&r.site) && range.contains(r.payload_mass_kg))
            .map(|r| r.payload_mass_kg)
            .collect();
        let points = filter_by_payload(&table, &site, range);
        let payloads: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        prop_assert_eq!(payloads, expected);
    }

    #[test]
    fn narrower_range_is_subsequence_of_wider(
        table in table_strategy(),
        site in selector_strategy(),
        (inner, outer) in nested_ranges_strategy(),
    ) {
        let narrow = filter_by_payload(&table, &site, inner);
        let wide = filter_by_payload(&table, &site, outer);
        prop_assert!(narrow.len() <= wide.len());
        prop_assert!(is_subsequence(&narrow, &wide));
    }

    #[test]
    fn inverted_range_is_always_empty(
        table in table_strategy(),
        site in selector_strategy(),
        range in inverted_range_strategy(),
    ) {
        prop_assert!(range.is_empty());
        prop_assert!(filter_by_payload(&table, &site, range).is_empty());
    }

    #[test]
    fn transformations_are_idempotent(
        table in table_strategy(),
        site in selector_strategy(),
        range in range_strategy(),
    ) {
        prop_assert_eq!(
            aggregate_outcomes(&table, &site),
            aggregate_outcomes(&table, &site)
        );
        prop_assert_eq!(
            filter_by_payload(&table, &site, range),
            filter_by_payload(&table, &site, range)
        );
    }

    #[test]
    fn pie_labels_keep_their_json_type(table in table_strategy()) {
        for site in table.sites() {
            let series = aggregate_outcomes(&table, &SiteSelector::from(site));
            let json = serde_json::to_value(&series).unwrap();
            for segment in json["segments"].as_array().unwrap() {
                prop_assert!(segment["name"].is_u64());
            }
        }
        let all = serde_json::to_value(aggregate_outcomes(&table, &SiteSelector::All)).unwrap();
        for segment in all["segments"].as_array().unwrap() {
            prop_assert!(segment["name"].is_string());
        }
    }
}

#[test]
fn three_row_scenario() {
    use pretty_assertions::assert_eq;

    let table = LaunchTable::from_records(vec![
        LaunchRecord::new("siteA", 500.0, OutcomeClass::Success, "v1"),
        LaunchRecord::new("siteA", 1500.0, OutcomeClass::Failure, "v1"),
        LaunchRecord::new("siteB", 2000.0, OutcomeClass::Success, "v2"),
    ])
    .unwrap();

    assert_eq!(
        aggregate_outcomes(&table, &SiteSelector::All).pairs(),
        vec![("siteA".to_string(), 1), ("siteB".to_string(), 1)]
    );
    assert_eq!(
        aggregate_outcomes(&table, &SiteSelector::from("siteA")).pairs(),
        vec![("1".to_string(), 1), ("0".to_string(), 1)]
    );

    let point = |payload: f64, outcome: OutcomeClass| ScatterPoint {
        payload_mass_kg: payload,
        outcome,
        booster_version_category: "v1".to_string(),
    };
    assert_eq!(
        filter_by_payload(&table, &SiteSelector::All, PayloadRange::new(0.0, 1000.0)),
        vec![point(500.0, OutcomeClass::Success)]
    );
    assert_eq!(
        filter_by_payload(
            &table,
            &SiteSelector::from("siteA"),
            PayloadRange::new(0.0, 2000.0)
        ),
        vec![
            point(500.0, OutcomeClass::Success),
            point(1500.0, OutcomeClass::Failure)
        ]
    );
}
