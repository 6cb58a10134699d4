use crate::types::{LaunchTable, PayloadRange, ScatterPoint, SiteSelector};

/// Rows at the selected site(s) whose payload lies in `range`, projected to
/// scatter points in table order.
pub fn filter_by_payload(
    table: &LaunchTable,
    site: &SiteSelector,
    range: PayloadRange,
) -> Vec<ScatterPoint> {
    if range.is_empty() {
        return Vec::new();
    }
    table
        .records()
        .iter()
        .filter(|r| site.matches(&r.site))
        .filter(|r| range.contains(r.payload_mass_kg))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LaunchRecord, OutcomeClass};

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("siteA", 500.0, OutcomeClass::Success, "v1"),
            LaunchRecord::new("siteA", 1500.0, OutcomeClass::Failure, "v1"),
            LaunchRecord::new("siteB", 2000.0, OutcomeClass::Success, "v2"),
        ])
        .unwrap()
    }

    fn payloads(points: &[ScatterPoint]) -> Vec<f64> {
        points.iter().map(|p| p.payload_mass_kg).collect()
    }

    #[test]
    fn all_sites_filters_only_on_payload() {
        let points = filter_by_payload(
            &table(),
            &SiteSelector::All,
            PayloadRange::new(0.0, 1000.0),
        );
        assert_eq!(
            points,
            vec![ScatterPoint {
                payload_mass_kg: 500.0,
                outcome: OutcomeClass::Success,
                booster_version_category: "v1".to_string(),
            }]
        );
    }

    #[test]
    fn single_site_keeps_table_order() {
        let points = filter_by_payload(
            &table(),
            &SiteSelector::from("siteA"),
            PayloadRange::new(0.0, 2000.0),
        );
        assert_eq!(payloads(&points), vec![500.0, 1500.0]);
        assert_eq!(points[1].outcome, OutcomeClass::Failure);
    }

    #[test]
    fn bounds_are_inclusive() {
        let points = filter_by_payload(
            &table(),
            &SiteSelector::All,
            PayloadRange::new(1500.0, 2000.0),
        );
        assert_eq!(payloads(&points), vec![1500.0, 2000.0]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let points = filter_by_payload(
            &table(),
            &SiteSelector::All,
            PayloadRange::new(2000.0, 0.0),
        );
        assert!(points.is_empty());
    }

    #[test]
    fn unknown_site_is_empty() {
        let points = filter_by_payload(
            &table(),
            &SiteSelector::from("siteZ"),
            PayloadRange::new(0.0, 10_000.0),
        );
        assert!(points.is_empty());
    }
}
