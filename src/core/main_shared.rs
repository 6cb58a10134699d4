use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use log::{debug, error};

use crate::CallbackRegistry;
use crate::core::cli::{Args, Commands, ServeArgs};
use crate::core::cmds;
use crate::core::loader;
use crate::core::logging::init_logging;
use crate::types::config::{CliOverrides, config, init_with_overrides};
use crate::types::{AppResult, LaunchTable};

pub async fn run_main(registry: Arc<CallbackRegistry>) -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    let command = args
        .command
        .unwrap_or_else(|| Commands::Serve(ServeArgs::default()));

    // Build CLI overrides for config precedence
    let (addr, port) = match &command {
        Commands::Serve(serve_args) => (serve_args.addr.clone(), serve_args.port),
        _ => (None, None),
    };
    let cli_overrides = CliOverrides {
        data: args.data.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
        addr,
        port,
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides);

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    match command {
        Commands::Init => cmds::execute_init().await,
        Commands::PrintConfig(print_args) => cmds::execute_print_config(print_args).await,
        Commands::Serve(_) => {
            let table = load_table(Path::new(config().data()))?;
            cmds::execute_serve(table, registry).await
        }
        Commands::Outcomes(outcome_args) => {
            let table = load_table(Path::new(config().data()))?;
            cmds::execute_outcomes(outcome_args, &table).await
        }
        Commands::Payload(payload_args) => {
            let table = load_table(Path::new(config().data()))?;
            cmds::execute_payload(payload_args, &table).await
        }
        Commands::Sites(sites_args) => {
            let table = load_table(Path::new(config().data()))?;
            cmds::execute_sites(sites_args, &table).await
        }
    }
}

fn load_table(path: &Path) -> AppResult<Arc<LaunchTable>> {
    match loader::load(path) {
        Ok(table) => Ok(Arc::new(table)),
        Err(e) => {
            error!("Cannot start without launch data: {e}");
            Err(e.into())
        }
    }
}
