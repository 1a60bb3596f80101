//! Login endpoint
//!
//! Verifies credentials against the users table. There is no server-side
//! session: the response body is the user record, which the dashboard
//! client keeps in local storage.

use axum::{extract::State, routing::post, Json, Router};
use bankdata_common::db::models::User;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

/// POST /api/auth/login
///
/// **Request:** `{"username": "...", "password": "..."}`
/// **Response:** 200 with the user record, 400 on missing fields,
/// 401 on bad credentials.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let user = crate::db::users::find_by_username(&state.db, payload.username.trim()).await?;

    let Some(user) = user else {
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    };

    let valid = bankdata_common::auth::verify_password(&payload.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    info!("Login successful for {}", user.username);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: User {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        },
    }))
}

/// Build auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/api/auth/login", post(login))
}
