use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shared::http::error::internal_error;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub employees: u64,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.count().await {
        Ok(count) => Json(HealthResponse {
            status: "ok",
            employees: count,
        })
        .into_response(),
        Err(error) => internal_error(&error, "health check failed"),
    }
}
