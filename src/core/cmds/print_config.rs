use log::info;

use crate::core::cli::PrintConfigArgs;
use crate::types::AppResult;
use crate::types::config::config;

pub async fn execute_print_config(args: PrintConfigArgs) -> AppResult<()> {
    let effective_config = config().to_effective();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    // Table format
    info!("Effective Configuration:");
    info!("");
    info!("Global:");
    info!("  data: {}", effective_config.data());

    let server = effective_config.server();
    info!("");
    info!("Server:");
    info!("  addr: {}", server.addr());
    info!("  port: {}", server.port());

    info!("");
    info!("Dashboard:");
    info!("  title: {}", effective_config.dashboard().title());

    let slider = effective_config.slider();
    info!("");
    info!("Slider:");
    info!("  range: {} - {}", slider.min(), slider.max());
    info!("  step: {}", slider.step());
    info!("  marks every: {}", slider.mark_every());

    let log = effective_config.log();
    info!("");
    info!("Log:");
    info!("  level: {}", log.level());
    match log.color() {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    Ok(())
}
