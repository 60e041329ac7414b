use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body shared by every non-2xx response: `{ "error": "<message>" }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// 500 with a generic message; the cause goes to the log, not the client.
pub fn internal_error(error: &anyhow::Error, context: &str) -> Response {
    tracing::error!(%error, "{context}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
}
