use console::style;
use log::info;
use serde::Serialize;

use crate::core::cli::SitesArgs;
use crate::types::config::colors_enabled;
use crate::types::{AppResult, LaunchTable, PayloadBounds};

#[derive(Debug, Serialize, PartialEq)]
pub struct SiteStats {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
    pub success_rate: f64,
}

#[derive(Debug, Serialize)]
struct SitesReport {
    sites: Vec<SiteStats>,
    payload_bounds: PayloadBounds,
}

/// Per-site launch and success counts in first-seen order
pub fn site_stats(table: &LaunchTable) -> Vec<SiteStats> {
    table
        .sites()
        .into_iter()
        .map(|site| {
            let (launches, successes) = table
                .records()
                .iter()
                .filter(|r| r.site == site)
                .fold((0, 0), |(n, ok), r| {
                    (n + 1, ok + usize::from(r.outcome.is_success()))
                });
            SiteStats {
                site: site.to_string(),
                launches,
                successes,
                success_rate: (successes as f64 / launches as f64) * 100.0,
            }
        })
        .collect()
}

pub async fn execute_sites(args: SitesArgs, table: &LaunchTable) -> AppResult<()> {
    let report = SitesReport {
        sites: site_stats(table),
        payload_bounds: table.bounds(),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    info!("Launch Sites:");
    info!("=============");
    for stats in &report.sites {
        let rate = format!("{:.1}%", stats.success_rate);
        let rate = if colors_enabled() {
            style(rate).green().to_string()
        } else {
            rate
        };
        info!(
            "  {:<16} {:>4} launches, {:>4} successes ({})",
            stats.site, stats.launches, stats.successes, rate
        );
    }
    info!("");
    info!(
        "Payload range in data: {} - {} kg",
        report.payload_bounds.min, report.payload_bounds.max
    );

    Ok(())
}
