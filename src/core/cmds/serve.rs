use std::sync::Arc;

use log::debug;

use crate::CallbackRegistry;
use crate::core::server::{AppState, serve};
use crate::types::config::config;
use crate::types::{AppResult, LaunchTable};

pub async fn execute_serve(
    table: Arc<LaunchTable>,
    registry: Arc<CallbackRegistry>,
) -> AppResult<()> {
    let cfg = config();
    let state = AppState::new(table, registry, cfg);
    debug!(
        "Dashboard layout has {} site option(s)",
        state.layout.site_options.len()
    );
    serve(state, &cfg.server().bind_addr()).await
}
