//! Redis session store adapter
//!
//! One Redis hash per session key. Field mutations use the server-side
//! conditional primitives (HSETNX, HDEL) rather than read-modify-write, so
//! concurrent requests racing on the same key cannot clobber sibling
//! fields, and every successful access re-arms the policy TTL. The
//! conditional set additionally runs behind an EXISTS guard in a single
//! script, so a write racing an expiry or logout can never materialize a
//! hash holding only the written field.

use std::collections::HashMap;

use async_trait::async_trait;
use deadpool_redis::{Connection, Pool};
use redis::{AsyncCommands, Script};
use tracing::{error, warn};

use gymtrack_core::{SessionError, SessionField, SessionKey, SessionRecord, SessionStore, TtlPolicy};

/// KEYS[1] session key; ARGV: field, value, default ttl, trust-device ttl,
/// trust-device field name. Returns 1 only when the key was live and the
/// field absent.
const ATTACH_IF_PRESENT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
  return 0
end
local set = redis.call('HSETNX', KEYS[1], ARGV[1], ARGV[2])
if set == 1 then
  local ttl = ARGV[3]
  if redis.call('HGET', KEYS[1], ARGV[5]) == '1' then
    ttl = ARGV[4]
  end
  redis.call('EXPIRE', KEYS[1], ttl)
end
return set
"#;

pub struct RedisSessionStore {
    pool: Pool,
    policy: TtlPolicy,
    attach_script: Script,
}

impl RedisSessionStore {
    pub fn new(pool: Pool, policy: TtlPolicy) -> Self {
        Self {
            pool,
            policy,
            attach_script: Script::new(ATTACH_IF_PRESENT),
        }
    }

    async fn conn(&self) -> Result<Connection, SessionError> {
        self.pool.get().await.map_err(|e| {
            error!("redis checkout failed: {}", e);
            SessionError::StoreUnavailable(e.to_string())
        })
    }

    fn ttl_secs(&self, trust_device: bool) -> i64 {
        self.policy.ttl_for(trust_device).as_secs() as i64
    }

    /// TTL to re-arm for an already-stored key, read from its own
    /// trust-device field.
    async fn stored_ttl_secs(
        &self,
        conn: &mut Connection,
        key: &SessionKey,
    ) -> Result<i64, SessionError> {
        let trust: Option<String> = conn
            .hget(key.as_str(), SessionField::TrustDevice.as_str())
            .await
            .map_err(store_err)?;
        Ok(self.ttl_secs(trust.as_deref() == Some("1")))
    }
}

fn store_err(e: redis::RedisError) -> SessionError {
    error!("redis command failed: {}", e);
    SessionError::StoreUnavailable(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, key: &SessionKey, record: &SessionRecord) -> Result<(), SessionError> {
        let mut conn = self.conn().await?;
        let fields = record.to_fields();
        let ttl = self.ttl_secs(record.trust_device);
        let _: () = redis::pipe()
            .atomic()
            .hset_multiple(key.as_str(), &fields)
            .ignore()
            .expire(key.as_str(), ttl)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(store_err)?;
        Ok(())
    }

    async fn get(&self, key: &SessionKey) -> Result<Option<SessionRecord>, SessionError> {
        let mut conn = self.conn().await?;
        let fields: HashMap<String, String> =
            conn.hgetall(key.as_str()).await.map_err(store_err)?;
        if fields.is_empty() {
            return Ok(None);
        }
        match SessionRecord::from_fields(&fields) {
            Ok(record) => {
                let _: bool = conn
                    .expire(key.as_str(), self.ttl_secs(record.trust_device))
                    .await
                    .map_err(store_err)?;
                Ok(Some(record))
            }
            Err(e) => {
                warn!(key = %key, "invariant-violating session record treated as absent: {}", e);
                Ok(None)
            }
        }
    }

    async fn set_field_if_absent(
        &self,
        key: &SessionKey,
        field: SessionField,
        value: &str,
    ) -> Result<bool, SessionError> {
        let mut conn = self.conn().await?;
        let set: i64 = self
            .attach_script
            .key(key.as_str())
            .arg(field.as_str())
            .arg(value)
            .arg(self.ttl_secs(false))
            .arg(self.ttl_secs(true))
            .arg(SessionField::TrustDevice.as_str())
            .invoke_async(&mut conn)
            .await
            .map_err(store_err)?;
        Ok(set == 1)
    }

    async fn clear_field(
        &self,
        key: &SessionKey,
        field: SessionField,
    ) -> Result<bool, SessionError> {
        let mut conn = self.conn().await?;
        let removed: i64 = conn
            .hdel(key.as_str(), field.as_str())
            .await
            .map_err(store_err)?;
        if removed > 0 {
            let ttl = self.stored_ttl_secs(&mut conn, key).await?;
            let _: bool = conn.expire(key.as_str(), ttl).await.map_err(store_err)?;
        }
        Ok(removed > 0)
    }

    async fn exists(&self, key: &SessionKey) -> Result<bool, SessionError> {
        let mut conn = self.conn().await?;
        conn.exists(key.as_str()).await.map_err(store_err)
    }

    async fn delete(&self, key: &SessionKey) -> Result<(), SessionError> {
        let mut conn = self.conn().await?;
        let _: i64 = conn.del(key.as_str()).await.map_err(store_err)?;
        Ok(())
    }
}
