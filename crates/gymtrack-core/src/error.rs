//! Session errors

use gymtrack_security::TokenError;
use thiserror::Error;

/// Classified failures of the session core. Nothing escapes the service
/// boundary unclassified: cache and codec failures are converted into one
/// of these at the edge.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Backing cache unreachable. A liveness problem, not an auth decision;
    /// auth-only callers treat it as unauthenticated while the operational
    /// layer alerts on it separately.
    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),

    /// Malformed bearer encoding, distinct from an expired session.
    #[error("Malformed bearer token")]
    InvalidToken,

    /// No live session for the decoded key (expired, logged out, or never
    /// issued).
    #[error("Session not found or expired")]
    SessionNotFound,

    /// Stored record failed the required-`user_id` invariant. Logged as an
    /// anomaly and surfaced to callers as absent.
    #[error("Invalid session record: {0}")]
    InvalidRecord(String),

    /// Rejected gyma state transition; never retried automatically.
    #[error("State conflict: {0}")]
    StateConflict(&'static str),

    /// Bounded key-generation retries exhausted without an unused key.
    #[error("Unable to generate an unused session key")]
    KeySpaceExhausted,

    /// Credential backend failure (the identity collaborator, not this
    /// store).
    #[error("Credential backend error: {0}")]
    CredentialBackend(String),
}

impl From<TokenError> for SessionError {
    fn from(_: TokenError) -> Self {
        SessionError::InvalidToken
    }
}
