//! Browser surface of the dashboard.
//!
//! The page delegates drawing to Plotly.js; the server only computes figure
//! data through the shared [`ReactiveController`].

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, post};
use log::{error, info, warn};
use tokio::net::TcpListener;

use crate::CallbackRegistry;
use crate::core::controller::ReactiveController;
use crate::core::layout::DashboardLayout;
use crate::types::config::Config;
use crate::types::{AppError, AppResult, LaunchTable};

mod handlers;
pub mod page;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<LaunchTable>,
    pub layout: Arc<DashboardLayout>,
    pub controller: Arc<Mutex<ReactiveController>>,
}

impl AppState {
    pub fn new(table: Arc<LaunchTable>, registry: Arc<CallbackRegistry>, config: &Config) -> Self {
        let layout = DashboardLayout::build(&table, config);
        let controller = ReactiveController::new(Arc::clone(&table), registry);
        Self {
            table,
            layout: Arc::new(layout),
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::healthz))
        .route("/api/layout", get(handlers::layout))
        .route("/api/state", get(handlers::state))
        .route("/api/charts", get(handlers::charts))
        .route("/api/events", post(handlers::events))
        .route("/api/outcomes", get(handlers::outcomes))
        .route("/api/payload", get(handlers::payload))
        .with_state(state)
}

/// Serve the dashboard on `addr` until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Dashboard running at http://{}", listener.local_addr()?);
    info!("Press Ctrl+C to stop");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => warn!("Received Ctrl-C, shutting down.."),
        Err(e) => {
            error!("Unable to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
