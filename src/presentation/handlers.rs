// HTTP request handlers
use crate::application::insight_source::DateRange;
use crate::application::prepared_chart::{ChartOutcome, PreparedChart, Viewport};
use crate::domain::insight::InsightCalculationResult;
use crate::infrastructure::http_response::ApiError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareRequest {
    pub result: InsightCalculationResult,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pointer_x_fraction: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartQuery {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub pointer_x_fraction: Option<f64>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/charts/prepare", post(prepare_chart))
        .route("/insights/:id/chart", get(insight_chart))
        .route("/insights/:id/chart/latest", get(latest_chart))
        .with_state(state)
}

fn viewport_for(
    state: &AppState,
    width: Option<f64>,
    height: Option<f64>,
    pointer_x_fraction: Option<f64>,
) -> Viewport {
    let settings = state.chart_service.settings();
    Viewport {
        width: width.unwrap_or(settings.default_width),
        height: height.unwrap_or(settings.default_height),
        pointer_x_fraction,
    }
}

/// Charts whose data cannot be drawn are answered with 422; an empty result
/// is a regular "no data" chart
fn chart_response(chart: PreparedChart) -> (StatusCode, Json<PreparedChart>) {
    let status = match chart.outcome {
        ChartOutcome::Unrenderable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };
    (status, Json(chart))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Prepare a chart from a result supplied by the caller
pub async fn prepare_chart(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PrepareRequest>,
) -> (StatusCode, Json<PreparedChart>) {
    let viewport = viewport_for(&state, request.width, request.height, request.pointer_x_fraction);
    chart_response(state.chart_service.prepare(request.result, viewport))
}

/// Fetch an insight result from the Insight API and prepare it
pub async fn insight_chart(
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<PreparedChart>), ApiError> {
    let viewport = viewport_for(&state, query.width, query.height, query.pointer_x_fraction);
    let now = Utc::now();
    let default_range = DateRange::month_to_date(now);
    let range = DateRange::new(
        query.from.unwrap_or(default_range.from),
        query.to.unwrap_or(now),
    );

    match state.chart_service.refresh(&id, &range, viewport).await {
        Ok(chart) => Ok(chart_response(chart.as_ref().clone())),
        Err(e) => {
            tracing::error!("Error preparing chart for insight {}: {:#}", id, e);
            Err(ApiError::upstream(&e))
        }
    }
}

/// Most recently prepared chart for an insight
pub async fn latest_chart(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<PreparedChart>), ApiError> {
    state
        .chart_service
        .store()
        .current(&id)
        .map(|chart| chart_response(chart.as_ref().clone()))
        .ok_or_else(|| ApiError::not_found(format!("no chart prepared for insight {}", id)))
}
