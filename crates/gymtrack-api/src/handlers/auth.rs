//! Authentication HTTP handlers (login, logout)

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use gymtrack_core::SessionStore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extract::bearer_token;
use crate::response::{error_reply, session_error_reply, ApiResponse, ErrorReply};
use crate::state::AppState;

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub trust_device: bool,
}

/// Login success response: the encoded bearer token the client presents on
/// every subsequent request.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub session_token: String,
}

/// Login handler - POST /api/v1/auth/login
pub async fn login<S: SessionStore>(
    State(state): State<AppState<S>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ErrorReply> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(error_reply(
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            "Email and password are required",
        ));
    }

    let user_id = state
        .credentials
        .verify(&payload.email, &payload.password)
        .await
        .map_err(|e| session_error_reply(&e))?;

    let Some(user_id) = user_id else {
        info!("login rejected: invalid credentials");
        return Err(error_reply(
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "Incorrect email or password",
        ));
    };

    let session_token = state
        .sessions
        .login(user_id, payload.trust_device)
        .await
        .map_err(|e| session_error_reply(&e))?;

    Ok(Json(ApiResponse::success(LoginResponse { session_token })))
}

/// Logout handler - POST /api/v1/auth/logout
pub async fn logout<S: SessionStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<()>>, ErrorReply> {
    let Some(token) = bearer_token(&headers) else {
        return Err(error_reply(
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
            "Missing bearer token",
        ));
    };

    state
        .sessions
        .logout(token)
        .await
        .map_err(|e| session_error_reply(&e))?;

    Ok(Json(ApiResponse::success(())))
}
