use std::sync::MutexGuard;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use super::page::render_page;
use crate::aggregate::aggregate_outcomes;
use crate::core::controller::ReactiveController;
use crate::core::layout::DashboardLayout;
use crate::filter::filter_by_payload;
use crate::types::{
    ChartUpdate, ControlEvent, NamedSeries, PayloadRange, ScatterPoint, SelectionState,
    SiteSelector,
};

pub(super) struct ApiError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

fn lock_controller(state: &AppState) -> Result<MutexGuard<'_, ReactiveController>, ApiError> {
    state.controller.lock().map_err(|_| ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "dashboard state is unavailable".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub(super) struct EventResponse {
    state: SelectionState,
    updates: Vec<ChartUpdate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct OutcomesParams {
    site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PayloadParams {
    site: Option<String>,
    lo: Option<f64>,
    hi: Option<f64>,
}

fn selector(site: Option<String>) -> SiteSelector {
    site.map(SiteSelector::from).unwrap_or_default()
}

pub(super) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.layout))
}

pub(super) async fn healthz() -> &'static str {
    "ok"
}

pub(super) async fn layout(State(state): State<AppState>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

pub(super) async fn state(
    State(state): State<AppState>,
) -> Result<Json<SelectionState>, ApiError> {
    Ok(Json(lock_controller(&state)?.snapshot()))
}

pub(super) async fn charts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChartUpdate>>, ApiError> {
    Ok(Json(lock_controller(&state)?.render_all()))
}

pub(super) async fn events(
    State(state): State<AppState>,
    Json(event): Json<ControlEvent>,
) -> Result<Json<EventResponse>, ApiError> {
    let mut controller = lock_controller(&state)?;
    let updates = controller.dispatch(event);
    Ok(Json(EventResponse {
        state: controller.snapshot(),
        updates,
    }))
}

pub(super) async fn outcomes(
    State(state): State<AppState>,
    Query(params): Query<OutcomesParams>,
) -> Json<NamedSeries> {
    Json(aggregate_outcomes(&state.table, &selector(params.site)))
}

pub(super) async fn payload(
    State(state): State<AppState>,
    Query(params): Query<PayloadParams>,
) -> Json<Vec<ScatterPoint>> {
    let bounds = state.table.bounds();
    let range = PayloadRange::new(
        params.lo.unwrap_or(bounds.min),
        params.hi.unwrap_or(bounds.max),
    );
    Json(filter_by_payload(&state.table, &selector(params.site), range))
}
