//! Session service orchestrating key generation, token encoding, and the
//! TTL-backed store.

use std::sync::Arc;

use gymtrack_security::TokenCodec;
use tracing::{info, warn};

use crate::domain::{SessionField, SessionKey, SessionRecord};
use crate::error::SessionError;
use crate::ports::SessionStore;
use crate::services::keygen::KeyGenerator;

/// Orchestrator for login-session lifecycle: creation on login, gyma
/// attach/detach while the session lives, deletion on logout.
///
/// Per-record state machine, orthogonal to session existence:
/// `{idle, gym-in-progress}`, initial `idle`. Both transitions require a
/// live session and resolve races on the cache server via the store's
/// conditional field primitives, so double-submits yield exactly one winner
/// and one [`SessionError::StateConflict`]. Ownership of the underlying gym
/// visit row is re-checked by the gyma collaborator, not here.
pub struct SessionService<S: SessionStore> {
    store: Arc<S>,
    codec: TokenCodec,
    keys: KeyGenerator,
}

impl<S: SessionStore> SessionService<S> {
    pub fn new(store: Arc<S>, codec: TokenCodec, keys: KeyGenerator) -> Self {
        Self { store, codec, keys }
    }

    /// Creates a session for a verified user and returns the encoded bearer
    /// token. Credential verification happens one layer up.
    pub async fn login(&self, user_id: i64, trust_device: bool) -> Result<String, SessionError> {
        let key = self.keys.generate(self.store.as_ref()).await?;
        let record = SessionRecord::new(user_id, trust_device);
        self.store.put(&key, &record).await?;
        info!(user_id, trust_device, "session created");
        Ok(self.codec.encode(key.as_str()))
    }

    /// Resolves the authenticated user behind a bearer token, sliding the
    /// session TTL. Malformed tokens and absent sessions stay distinct in
    /// the error type; both collapse to "unauthenticated" at the transport
    /// layer.
    pub async fn authenticate(&self, token: &str) -> Result<i64, SessionError> {
        let (_, record) = self.live_session(token).await?;
        Ok(record.user_id)
    }

    /// The gym visit currently attached to the session, if any.
    pub async fn current_gyma(&self, token: &str) -> Result<Option<i64>, SessionError> {
        let (_, record) = self.live_session(token).await?;
        Ok(record.gyma_id)
    }

    /// Attaches a gym-visit pointer: `idle → gym-in-progress`. Rejected with
    /// a state conflict when a visit is already attached, never overwritten.
    pub async fn start_gyma(&self, token: &str, gyma_id: i64) -> Result<(), SessionError> {
        let (key, record) = self.live_session(token).await?;
        let attached = self
            .store
            .set_field_if_absent(&key, SessionField::GymaId, &gyma_id.to_string())
            .await?;
        if !attached {
            // The write is refused both when a visit is already attached and
            // when the session vanished between the read and the write.
            if !self.store.exists(&key).await? {
                return Err(SessionError::SessionNotFound);
            }
            warn!(user_id = record.user_id, gyma_id, "gyma already in progress");
            return Err(SessionError::StateConflict("a gyma is already in progress"));
        }
        info!(user_id = record.user_id, gyma_id, "gyma attached to session");
        Ok(())
    }

    /// Detaches the gym-visit pointer: `gym-in-progress → idle`. Rejected
    /// with a state conflict when the session is already idle.
    pub async fn end_gyma(&self, token: &str) -> Result<(), SessionError> {
        let (key, record) = self.live_session(token).await?;
        let detached = self.store.clear_field(&key, SessionField::GymaId).await?;
        if !detached {
            warn!(user_id = record.user_id, "no gyma in progress to end");
            return Err(SessionError::StateConflict("no gyma in progress"));
        }
        info!(user_id = record.user_id, "gyma detached from session");
        Ok(())
    }

    /// Deletes the session. Idempotent: logging out an already-absent key
    /// succeeds, though a malformed token is still rejected as such.
    pub async fn logout(&self, token: &str) -> Result<(), SessionError> {
        let key = SessionKey::new(self.codec.decode(token)?);
        self.store.delete(&key).await?;
        info!("session deleted");
        Ok(())
    }

    async fn live_session(
        &self,
        token: &str,
    ) -> Result<(SessionKey, SessionRecord), SessionError> {
        let key = SessionKey::new(self.codec.decode(token)?);
        match self.store.get(&key).await? {
            Some(record) => Ok((key, record)),
            None => Err(SessionError::SessionNotFound),
        }
    }
}
