use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::http::error::{error_response, internal_error};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.store.find_by_id(&id).await {
        Ok(Some(employee)) => Json(employee).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("employee {id} not found")),
        Err(error) => internal_error(&error, "get employee failed"),
    }
}
