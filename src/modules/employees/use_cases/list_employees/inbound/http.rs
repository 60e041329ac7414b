use axum::{
    Json,
    extract::{Query, State},
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shared::http::error::{error_response, internal_error};
use crate::shell::state::AppState;

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

#[derive(Deserialize)]
pub struct ListEmployeesParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    if page < 1 {
        return error_response(StatusCode::BAD_REQUEST, "page must be >= 1");
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("limit must be between 1 and {MAX_LIMIT}"),
        );
    }

    match state.store.find_all(page, limit).await {
        Ok(window) => Json(window).into_response(),
        Err(error) => internal_error(&error, "list employees failed"),
    }
}
