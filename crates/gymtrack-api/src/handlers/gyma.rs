//! Gyma session handlers (start, end)
//!
//! These only manage the gym-visit pointer inside the session; creation of
//! the gyma row itself and its ownership checks belong to the gyma
//! collaborator.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use gymtrack_core::SessionStore;
use serde::{Deserialize, Serialize};

use crate::extract::bearer_token;
use crate::response::{error_reply, session_error_reply, ApiResponse, ErrorReply};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartGymaRequest {
    pub gyma_id: i64,
}

#[derive(Debug, Serialize)]
pub struct GymaStateResponse {
    pub gyma_id: Option<i64>,
}

fn require_token(headers: &HeaderMap) -> Result<&str, ErrorReply> {
    bearer_token(headers).ok_or_else(|| {
        error_reply(
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
            "Missing bearer token",
        )
    })
}

/// Start handler - POST /api/v1/gyma/start
pub async fn start_gyma<S: SessionStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    Json(payload): Json<StartGymaRequest>,
) -> Result<Json<ApiResponse<GymaStateResponse>>, ErrorReply> {
    let token = require_token(&headers)?;

    state
        .sessions
        .start_gyma(token, payload.gyma_id)
        .await
        .map_err(|e| session_error_reply(&e))?;

    Ok(Json(ApiResponse::success(GymaStateResponse {
        gyma_id: Some(payload.gyma_id),
    })))
}

/// End handler - PUT /api/v1/gyma/end
pub async fn end_gyma<S: SessionStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<GymaStateResponse>>, ErrorReply> {
    let token = require_token(&headers)?;

    state
        .sessions
        .end_gyma(token)
        .await
        .map_err(|e| session_error_reply(&e))?;

    Ok(Json(ApiResponse::success(GymaStateResponse {
        gyma_id: None,
    })))
}
