//! Authentication endpoint

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::SUCCESS};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Login response carrying the key to send in the `Api-Key` header
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub api_key: String,
}

/// Exchange the configured credentials for the API key
#[utoipa::path(
    post,
    path = "/auth",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Incorrect login or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let api_key = state.services.auth.login(&request.login, &request.password)?;

    Ok(Json(LoginResponse {
        status: SUCCESS.to_string(),
        api_key,
    }))
}
