use axum::extract::{Query, State};
use axum::response::Html;
use talent_core::dashboard::DashboardView;

use crate::error::AppError;
use crate::render::render_page;
use crate::state::AppState;

/// GET /: the rendered dashboard. Honours `?sl=` and `?range=`.
pub async fn index(
    State(app): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let filter = super::filter_from_pairs(&params)?;
    let view = DashboardView::build(&app.ctx, &filter, app.today())?;
    tracing::debug!(cards = view.service_lines.len(), "rendering dashboard page");
    Ok(Html(render_page(&view)))
}
