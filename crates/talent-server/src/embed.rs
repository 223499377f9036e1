use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "$CARGO_MANIFEST_DIR/assets/"]
struct StaticAssets;

/// Serve embedded static assets under `/assets/`.
pub async fn static_handler(uri: axum::http::Uri) -> Response {
    let path = uri.path().trim_start_matches('/');
    let Some(path) = path.strip_prefix("assets/") else {
        return not_found();
    };

    match <StaticAssets as Embed>::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => not_found(),
    }
}

fn not_found() -> Response {
    let body = serde_json::json!({ "error": "not found" });
    (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
}
