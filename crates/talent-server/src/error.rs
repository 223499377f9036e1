use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use talent_core::error::HubError;

// ---------------------------------------------------------------------------
// AppError: unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

fn status_for(err: &HubError) -> StatusCode {
    match err {
        HubError::UnknownServiceLine(_) => StatusCode::NOT_FOUND,
        HubError::NotInitialized | HubError::InvalidDateRange(_) | HubError::InvalidCode(_) => {
            StatusCode::BAD_REQUEST
        }
        HubError::InvalidFunnelLength { .. }
        | HubError::MissingRequiredField { .. }
        | HubError::InconsistentTotals { .. }
        | HubError::DuplicateId { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        HubError::DatasetNotFound(_)
        | HubError::Io(_)
        | HubError::Yaml(_)
        | HubError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<HubError>() {
            Some(e) => status_for(e),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
