// handlers/public/auth/login.rs - POST /auth/login handler

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::LoginResult;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login - exchange username and password for a signed token
///
/// ```json
/// { "username": "admin", "password": "admin123" }
/// ```
///
/// Responds with `{ "token": "...", "user": { "id", "username", "role" } }`.
/// Unknown users and wrong passwords both yield 401 `INVALID_CREDENTIALS`.
pub async fn login_post(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<LoginResult> {
    let result = state.service.login(&body.username, &body.password)?;
    Ok(ApiResponse::success(result))
}
