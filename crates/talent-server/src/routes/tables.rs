use axum::extract::{Query, State};
use axum::Json;
use talent_core::dashboard::TableSpec;
use talent_core::format::{
    format_allocation_row, format_talent_row_with, AllocationRow, TalentRow, ALLOCATION_HEADERS,
    TALENT_HEADERS,
};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/allocations?range=<30|90>
pub async fn allocations(
    State(app): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<TableSpec<AllocationRow>>, AppError> {
    let filter = super::filter_from_pairs(&params)?;
    let rows = filter
        .allocations(&app.ctx.dataset.recent_allocations, app.today())
        .into_iter()
        .map(format_allocation_row)
        .collect();
    Ok(Json(TableSpec {
        headers: ALLOCATION_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }))
}

/// GET /api/talent?sl=<codes>
pub async fn talent(
    State(app): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<TableSpec<TalentRow>>, AppError> {
    let filter = super::filter_from_pairs(&params)?;
    let ds = &app.ctx.dataset;
    let hashing = app.ctx.config.badge_hashing;
    let rows = filter
        .talent(&ds.service_lines, &ds.talent_pool)
        .into_iter()
        .map(|t| format_talent_row_with(t, hashing))
        .collect();
    Ok(Json(TableSpec {
        headers: TALENT_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    }))
}
