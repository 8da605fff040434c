//! Session key generation

use gymtrack_security::keygen::random_key;
use gymtrack_shared::constants::MAX_KEY_ATTEMPTS;
use tracing::warn;

use crate::domain::SessionKey;
use crate::error::SessionError;
use crate::ports::SessionStore;

/// Issues random opaque session keys that are unused among live keys.
///
/// The collision retry is a bounded iterative loop: it always ends with a
/// fresh key or an explicit [`SessionError::KeySpaceExhausted`], never by
/// falling through without a value. The uniqueness probe is the store's
/// side-effect-free `exists`, so probing never slides a live session's TTL.
#[derive(Debug, Clone, Copy)]
pub struct KeyGenerator {
    length: usize,
}

impl KeyGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub async fn generate<S: SessionStore + ?Sized>(
        &self,
        store: &S,
    ) -> Result<SessionKey, SessionError> {
        for attempt in 1..=MAX_KEY_ATTEMPTS {
            let candidate = SessionKey::new(random_key(self.length));
            if !store.exists(&candidate).await? {
                return Ok(candidate);
            }
            warn!(attempt, "session key collision, retrying");
        }
        Err(SessionError::KeySpaceExhausted)
    }
}
