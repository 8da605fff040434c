//! API response envelope and session error mapping

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gymtrack_core::SessionError;
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

pub type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

pub fn error_reply(status: StatusCode, code: &str, message: &str) -> ErrorReply {
    (status, Json(ApiResponse::error(code, message)))
}

/// Maps the session error taxonomy onto transport statuses. Authentication
/// failures surface uniformly as 401; a malformed token keeps its own code
/// so clients can tell a corrupt token from a legitimately expired one.
/// Store unavailability is a retryable server-side failure, not a security
/// decision.
pub fn session_error_reply(err: &SessionError) -> ErrorReply {
    match err {
        SessionError::InvalidToken => error_reply(
            StatusCode::UNAUTHORIZED,
            "INVALID_TOKEN",
            "Malformed bearer token",
        ),
        SessionError::SessionNotFound | SessionError::InvalidRecord(_) => error_reply(
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
            "Session not found or expired",
        ),
        SessionError::StateConflict(reason) => {
            error_reply(StatusCode::CONFLICT, "STATE_CONFLICT", reason)
        }
        SessionError::StoreUnavailable(_) => {
            warn!("session store unavailable while serving a request");
            error_reply(
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_UNAVAILABLE",
                "Session store unavailable, please retry",
            )
        }
        SessionError::KeySpaceExhausted | SessionError::CredentialBackend(_) => error_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Unable to complete the request",
        ),
    }
}
