use std::str::FromStr;

use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn styled_level(level: Level, color: bool) -> String {
    let name = level.to_string();
    if !color {
        return name;
    }
    match level {
        Level::Error => style(name).red().bold().to_string(),
        Level::Warn => style(name).yellow().to_string(),
        Level::Info => style(name).green().to_string(),
        Level::Debug => style(name).cyan().to_string(),
        Level::Trace => style(name).dim().to_string(),
    }
}

/// Install the global logger from the `[log]` config section.
/// Calling it more than once keeps the first logger.
pub fn init_logging() {
    let log_config = config().log();
    let level = LevelFilter::from_str(log_config.level()).unwrap_or(LevelFilter::Info);
    let color = colors_enabled();

    let result = fern::Dispatch::new()
        .format(move |out, message, record| {
            if record.level() == Level::Info {
                out.finish(format_args!("{message}"))
            } else {
                out.finish(format_args!(
                    "{} {} [{}] {}",
                    chrono::Local::now().format("%H:%M:%S"),
                    styled_level(record.level(), color),
                    record.target(),
                    message
                ))
            }
        })
        .level(level)
        // Keep dependency chatter out of the dashboard log
        .level_for("hyper", LevelFilter::Warn)
        .level_for("axum", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
