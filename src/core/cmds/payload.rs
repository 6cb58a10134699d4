use log::info;
use serde::Serialize;

use crate::core::cli::PayloadArgs;
use crate::filter::filter_by_payload;
use crate::types::{AppResult, LaunchTable, PayloadRange, ScatterPoint, SiteSelector};

#[derive(Serialize)]
struct JsonPayload {
    site: SiteSelector,
    range: PayloadRange,
    points: Vec<ScatterPoint>,
}

pub async fn execute_payload(args: PayloadArgs, table: &LaunchTable) -> AppResult<()> {
    let bounds = table.bounds();
    let range = PayloadRange::new(
        args.min.unwrap_or(bounds.min),
        args.max.unwrap_or(bounds.max),
    );
    let site = SiteSelector::from(args.site);
    let points = filter_by_payload(table, &site, range);

    if args.format == "json" {
        let out = JsonPayload {
            site,
            range,
            points,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    info!(
        "Launches at {} with payload in [{}, {}] kg: {}",
        site,
        range.lo,
        range.hi,
        points.len()
    );
    for point in &points {
        info!(
            "  {:>8.1} kg  class {}  booster {}",
            point.payload_mass_kg, point.outcome, point.booster_version_category
        );
    }

    Ok(())
}
