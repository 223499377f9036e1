use axum::extract::State;
use axum::Json;
use talent_core::config::HubConfig;

use crate::state::AppState;

/// GET /api/config: read-only view of the effective configuration.
///
/// There is no write endpoint; `.talent/config.yaml` is edited by hand and
/// picked up on the next start.
pub async fn get_config(State(app): State<AppState>) -> Json<HubConfig> {
    Json((*app.ctx.config).clone())
}
