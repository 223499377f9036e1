use axum::extract::{Path, State};
use axum::Json;
use talent_core::chart::{build_funnel_chart, build_service_line_chart, ChartSpec};
use talent_core::format::{format_forecast_cards, StatCard};
use talent_core::types::ServiceLineMetric;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/service-lines
pub async fn list_service_lines(State(app): State<AppState>) -> Json<Vec<ServiceLineMetric>> {
    Json(app.ctx.dataset.service_lines.clone())
}

/// GET /api/service-lines/{code}/chart: donut spec for one service line.
pub async fn service_line_chart(
    State(app): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ChartSpec>, AppError> {
    let metric = app.ctx.dataset.service_line(&code)?;
    Ok(Json(build_service_line_chart(metric)))
}

/// GET /api/funnel
pub async fn funnel_chart(State(app): State<AppState>) -> Result<Json<ChartSpec>, AppError> {
    Ok(Json(build_funnel_chart(&app.ctx.dataset.interview_funnel)?))
}

/// GET /api/forecast
pub async fn forecast(State(app): State<AppState>) -> Json<Vec<StatCard>> {
    Json(format_forecast_cards(&app.ctx.dataset.bench_forecast))
}
