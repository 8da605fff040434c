//! Store and identity ports

use async_trait::async_trait;

use crate::domain::{SessionField, SessionKey, SessionRecord};
use crate::error::SessionError;

/// TTL-backed session store port.
///
/// Implementations must make every operation non-blocking and keep field
/// mutations atomic on the cache server: concurrent writers to different
/// fields of one key never interfere, and the conditional primitives
/// resolve same-field races to exactly one winner.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Stores the whole record and arms its TTL per the trust-device
    /// policy.
    async fn put(&self, key: &SessionKey, record: &SessionRecord) -> Result<(), SessionError>;

    /// Reads the record. A hit re-arms the TTL with the same duration used
    /// at creation before returning (sliding expiration). Records failing
    /// the `user_id` invariant are logged and reported as absent.
    async fn get(&self, key: &SessionKey) -> Result<Option<SessionRecord>, SessionError>;

    /// Sets one field only if the record still exists and the field is
    /// currently absent, re-arming the TTL on success. Returns whether the
    /// field was set; a key that expired or was deleted in the meantime
    /// yields `false` and must never be materialized by this write.
    async fn set_field_if_absent(
        &self,
        key: &SessionKey,
        field: SessionField,
        value: &str,
    ) -> Result<bool, SessionError>;

    /// Removes one field, leaving the rest of the record in place and
    /// re-arming the TTL. Returns whether the field was present.
    async fn clear_field(&self, key: &SessionKey, field: SessionField)
        -> Result<bool, SessionError>;

    /// Existence probe with no TTL side effect; used by key generation.
    async fn exists(&self, key: &SessionKey) -> Result<bool, SessionError>;

    /// Removes the whole record. Idempotent: deleting an absent key is not
    /// an error.
    async fn delete(&self, key: &SessionKey) -> Result<(), SessionError>;
}

/// Identity collaborator port: verifies login credentials and yields the
/// stable `user_id`. Credential storage and hashing live outside this core.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<Option<i64>, SessionError>;
}
