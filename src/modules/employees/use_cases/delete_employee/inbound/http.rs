use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shared::http::error::{error_response, internal_error};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    // The store reports a missing id as `false`, not as an error; mapping
    // that to 404 is this layer's concern.
    match state.store.delete(&id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, format!("employee {id} not found")),
        Err(error) => internal_error(&error, "delete employee failed"),
    }
}
