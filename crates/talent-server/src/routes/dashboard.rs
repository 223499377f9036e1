use axum::extract::{Query, State};
use axum::Json;
use talent_core::dashboard::DashboardView;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/dashboard: the composed view as JSON, same filters as `/`.
pub async fn get_dashboard(
    State(app): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<DashboardView>, AppError> {
    let filter = super::filter_from_pairs(&params)?;
    let view = DashboardView::build(&app.ctx, &filter, app.today())?;
    Ok(Json(view))
}
