//! In-memory session store double with a controllable clock.
//!
//! Mirrors the cache semantics the core relies on: per-key TTL armed from
//! the trust-device policy, sliding refresh on reads and writes,
//! conditional field set/clear, and invariant-violating records surfacing
//! as absent.

// Not every integration binary exercises every helper.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use gymtrack_core::{SessionError, SessionField, SessionKey, SessionRecord, SessionStore, TtlPolicy};

struct Entry {
    fields: HashMap<String, String>,
    expires_at: u64,
}

pub struct FakeStore {
    policy: TtlPolicy,
    now_secs: AtomicU64,
    entries: Mutex<HashMap<String, Entry>>,
}

impl FakeStore {
    pub fn new(policy: TtlPolicy) -> Self {
        Self {
            policy,
            now_secs: AtomicU64::new(0),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now_secs.fetch_add(secs, Ordering::SeqCst);
    }

    fn now(&self) -> u64 {
        self.now_secs.load(Ordering::SeqCst)
    }

    /// Seeds a live ordinary session under a fixed key.
    pub fn seed_key(&self, key: &str) {
        self.insert_raw(key, &[("user_id", "1"), ("trust_device", "0")]);
    }

    /// Inserts raw fields without invariant checks, for corruption tests.
    pub fn insert_raw(&self, key: &str, fields: &[(&str, &str)]) {
        let ttl = self.policy.ttl_for(false).as_secs();
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.to_string(),
            Entry {
                fields: fields
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                expires_at: self.now() + ttl,
            },
        );
    }

    fn trust_flag(entry: &Entry) -> bool {
        entry.fields.get("trust_device").map(String::as_str) == Some("1")
    }
}

#[async_trait]
impl SessionStore for FakeStore {
    async fn put(&self, key: &SessionKey, record: &SessionRecord) -> Result<(), SessionError> {
        let ttl = self.policy.ttl_for(record.trust_device).as_secs();
        let mut entries = self.entries.lock().unwrap();
        entries.insert(
            key.as_str().to_string(),
            Entry {
                fields: record
                    .to_fields()
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                expires_at: self.now() + ttl,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &SessionKey) -> Result<Option<SessionRecord>, SessionError> {
        let now = self.now();
        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get_mut(key.as_str()) else {
            return Ok(None);
        };
        if entry.expires_at <= now {
            entries.remove(key.as_str());
            return Ok(None);
        }
        match SessionRecord::from_fields(&entry.fields) {
            Ok(record) => {
                entry.expires_at = now + self.policy.ttl_for(record.trust_device).as_secs();
                Ok(Some(record))
            }
            Err(_) => Ok(None),
        }
    }

    async fn set_field_if_absent(
        &self,
        key: &SessionKey,
        field: SessionField,
        value: &str,
    ) -> Result<bool, SessionError> {
        let now = self.now();
        let mut entries = self.entries.lock().unwrap();
        if entries
            .get(key.as_str())
            .is_some_and(|entry| entry.expires_at <= now)
        {
            entries.remove(key.as_str());
        }
        // An absent key is never materialized by a field write.
        let Some(entry) = entries.get_mut(key.as_str()) else {
            return Ok(false);
        };
        if entry.fields.contains_key(field.as_str()) {
            return Ok(false);
        }
        entry
            .fields
            .insert(field.as_str().to_string(), value.to_string());
        entry.expires_at = now + self.policy.ttl_for(Self::trust_flag(entry)).as_secs();
        Ok(true)
    }

    async fn clear_field(
        &self,
        key: &SessionKey,
        field: SessionField,
    ) -> Result<bool, SessionError> {
        let now = self.now();
        let mut entries = self.entries.lock().unwrap();
        let Some(entry) = entries.get_mut(key.as_str()) else {
            return Ok(false);
        };
        if entry.expires_at <= now {
            entries.remove(key.as_str());
            return Ok(false);
        }
        let removed = entry.fields.remove(field.as_str()).is_some();
        if removed {
            entry.expires_at = now + self.policy.ttl_for(Self::trust_flag(entry)).as_secs();
        }
        Ok(removed)
    }

    async fn exists(&self, key: &SessionKey) -> Result<bool, SessionError> {
        let now = self.now();
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(key.as_str())
            .is_some_and(|entry| entry.expires_at > now))
    }

    async fn delete(&self, key: &SessionKey) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key.as_str());
        Ok(())
    }
}
