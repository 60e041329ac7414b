use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::employees::core::employee::EmployeePatch;
use crate::shared::http::error::{error_response, internal_error};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<EmployeePatch>, JsonRejection>,
) -> impl IntoResponse {
    // Any subset of fields is a valid patch, including `{}`.
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    if let Some(salary) = patch.salary {
        if !salary.is_finite() || salary < 0.0 {
            return error_response(
                StatusCode::BAD_REQUEST,
                "salary must be a non-negative number",
            );
        }
    }

    match state.store.update(&id, patch).await {
        Ok(Some(employee)) => Json(employee).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("employee {id} not found")),
        Err(error) => internal_error(&error, "update employee failed"),
    }
}
