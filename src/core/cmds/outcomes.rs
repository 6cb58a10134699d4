use log::info;

use crate::aggregate::aggregate_outcomes;
use crate::core::cli::OutcomesArgs;
use crate::types::{AppResult, LaunchTable, SiteSelector};

pub async fn execute_outcomes(args: OutcomesArgs, table: &LaunchTable) -> AppResult<()> {
    let series = aggregate_outcomes(table, &SiteSelector::from(args.site));

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    info!("{}", series.title);
    if series.is_empty() {
        info!("  (no matching launches)");
        return Ok(());
    }
    let total = series.total();
    for (label, count) in series.pairs() {
        let share = (count as f64 / total as f64) * 100.0;
        info!("  {:<16} {:>5}  ({:.1}%)", label, count, share);
    }
    info!("  {:<16} {:>5}", "total", total);

    Ok(())
}
