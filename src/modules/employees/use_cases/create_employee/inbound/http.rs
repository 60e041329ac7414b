use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::employees::core::employee::NewEmployee;
use crate::shared::http::error::{error_response, internal_error};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEmployeeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    if let Err(message) = validate(&body) {
        return error_response(StatusCode::BAD_REQUEST, message);
    }

    let fields = NewEmployee {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        position: body.position,
        department: body.department,
        salary: body.salary,
    };

    match state.store.create(fields).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(error) => internal_error(&error, "create employee failed"),
    }
}

fn validate(body: &CreateEmployeeBody) -> Result<(), String> {
    let required = [
        ("firstName", &body.first_name),
        ("lastName", &body.last_name),
        ("email", &body.email),
        ("position", &body.position),
        ("department", &body.department),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(format!("{name} is required"));
        }
    }
    if !body.salary.is_finite() || body.salary < 0.0 {
        return Err("salary must be a non-negative number".to_string());
    }
    Ok(())
}
