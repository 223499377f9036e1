pub mod embed;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use talent_core::dashboard::HubContext;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with the page, API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(ctx: HubContext) -> Router {
    router_with_state(state::AppState::new(ctx))
}

/// Like [`build_router`], with a caller-supplied state (e.g. a fixed date).
pub fn router_with_state(app_state: state::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(routes::page::index))
        // Composed view
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        // Charts
        .route(
            "/api/service-lines",
            get(routes::charts::list_service_lines),
        )
        .route(
            "/api/service-lines/{code}/chart",
            get(routes::charts::service_line_chart),
        )
        .route("/api/funnel", get(routes::charts::funnel_chart))
        .route("/api/forecast", get(routes::charts::forecast))
        // Tables
        .route("/api/allocations", get(routes::tables::allocations))
        .route("/api/talent", get(routes::tables::talent))
        // Config
        .route("/api/config", get(routes::config::get_config))
        .fallback(embed::static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the dashboard server on `port`.
pub async fn serve(ctx: HubContext, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(ctx, listener, open_browser).await
}

/// Start the dashboard server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    ctx: HubContext,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(ctx);

    tracing::info!("talent hub listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "could not open browser");
        }
    }

    axum::serve(listener, app).await?;
    Ok(())
}
