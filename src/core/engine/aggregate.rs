use std::collections::HashMap;

use crate::types::{LaunchTable, NamedSeries, Segment, SegmentName, SiteSelector};

/// Count launch outcomes for the pie chart.
///
/// For [`SiteSelector::All`] the result has one segment per site holding its
/// success count; sites without any success are left out. For a single site
/// the result has one segment per outcome class seen at that site holding
/// the row count. Segments appear in first-seen order of the table.
pub fn aggregate_outcomes(table: &LaunchTable, site: &SiteSelector) -> NamedSeries {
    match site {
        SiteSelector::All => NamedSeries {
            title: "Total success launches by site".to_string(),
            segments: group_counts(
                table
                    .records()
                    .iter()
                    .filter(|r| r.outcome.is_success())
                    .map(|r| SegmentName::Site(r.site.clone())),
            ),
        },
        SiteSelector::Site(selected) => NamedSeries {
            title: format!("Successes and failures at {selected}"),
            segments: group_counts(
                table
                    .records()
                    .iter()
                    .filter(|r| &r.site == selected)
                    .map(|r| SegmentName::Class(r.outcome)),
            ),
        },
    }
}

fn group_counts(names: impl Iterator<Item = SegmentName>) -> Vec<Segment> {
    let mut index: HashMap<SegmentName, usize> = HashMap::new();
    let mut segments: Vec<Segment> = Vec::new();
    for name in names {
        match index.get(&name) {
            Some(&i) => segments[i].count += 1,
            None => {
                index.insert(name.clone(), segments.len());
                segments.push(Segment { name, count: 1 });
            }
        }
    }
    segments
}
