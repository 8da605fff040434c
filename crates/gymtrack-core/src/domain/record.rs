//! Session record entity
//!
//! The record is persisted as a flat string field map (one cache hash per
//! session key), so the entity carries its own map conversion. A record
//! without `user_id` is invalid and is never stored or returned.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Opaque session key: fixed-length random alphanumeric string, unique
/// among live keys at issuance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fields of the persisted session hash that can be addressed individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    UserId,
    GymaId,
    TrustDevice,
    SessionId,
}

impl SessionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionField::UserId => "user_id",
            SessionField::GymaId => "gyma_id",
            SessionField::TrustDevice => "trust_device",
            SessionField::SessionId => "session_id",
        }
    }
}

/// Mutable per-login state kept in the TTL cache.
///
/// `user_id` and `trust_device` are set once at creation; `gyma_id` points
/// at the gym visit in progress and is attached/detached independently of
/// the other fields; `session_id` is reserved and unused by business logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub user_id: i64,
    pub gyma_id: Option<i64>,
    pub trust_device: bool,
    pub session_id: Option<String>,
}

impl SessionRecord {
    pub fn new(user_id: i64, trust_device: bool) -> Self {
        Self {
            user_id,
            gyma_id: None,
            trust_device,
            session_id: None,
        }
    }

    /// Flattens the record into the stored field map. Absent optional
    /// fields are omitted rather than written as sentinels.
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            (SessionField::UserId.as_str(), self.user_id.to_string()),
            (
                SessionField::TrustDevice.as_str(),
                if self.trust_device { "1" } else { "0" }.to_string(),
            ),
        ];
        if let Some(gyma_id) = self.gyma_id {
            fields.push((SessionField::GymaId.as_str(), gyma_id.to_string()));
        }
        if let Some(session_id) = &self.session_id {
            fields.push((SessionField::SessionId.as_str(), session_id.clone()));
        }
        fields
    }

    /// Rebuilds a record from a stored field map, enforcing the required
    /// `user_id` invariant. Callers treat the error as "absent" after
    /// logging it as an anomaly.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, SessionError> {
        let user_id = fields
            .get(SessionField::UserId.as_str())
            .ok_or_else(|| SessionError::InvalidRecord("missing user_id".into()))?
            .parse::<i64>()
            .map_err(|_| SessionError::InvalidRecord("unparseable user_id".into()))?;

        let gyma_id = fields
            .get(SessionField::GymaId.as_str())
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| SessionError::InvalidRecord("unparseable gyma_id".into()))
            })
            .transpose()?;

        let trust_device = fields
            .get(SessionField::TrustDevice.as_str())
            .map(|raw| raw == "1")
            .unwrap_or(false);

        let session_id = fields.get(SessionField::SessionId.as_str()).cloned();

        Ok(Self {
            user_id,
            gyma_id,
            trust_device,
            session_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn new_record_starts_idle() {
        let record = SessionRecord::new(42, false);
        assert_eq!(record.user_id, 42);
        assert_eq!(record.gyma_id, None);
        assert!(!record.trust_device);
    }

    #[test]
    fn field_map_round_trip() {
        let mut record = SessionRecord::new(42, true);
        record.gyma_id = Some(7);
        let fields: HashMap<String, String> = record
            .to_fields()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        assert_eq!(SessionRecord::from_fields(&fields).unwrap(), record);
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let record = SessionRecord::new(42, false);
        let fields = record.to_fields();
        assert!(fields.iter().all(|(k, _)| *k != "gyma_id"));
        assert!(fields.iter().all(|(k, _)| *k != "session_id"));
    }

    #[test]
    fn missing_user_id_violates_invariant() {
        let fields = map(&[("gyma_id", "7"), ("trust_device", "1")]);
        assert!(matches!(
            SessionRecord::from_fields(&fields),
            Err(SessionError::InvalidRecord(_))
        ));
    }

    #[test]
    fn unparseable_user_id_violates_invariant() {
        let fields = map(&[("user_id", "forty-two")]);
        assert!(matches!(
            SessionRecord::from_fields(&fields),
            Err(SessionError::InvalidRecord(_))
        ));
    }

    #[test]
    fn trust_device_flag_decodes_from_wire_form() {
        let trusted = map(&[("user_id", "42"), ("trust_device", "1")]);
        assert!(SessionRecord::from_fields(&trusted).unwrap().trust_device);

        let untrusted = map(&[("user_id", "42"), ("trust_device", "0")]);
        assert!(!SessionRecord::from_fields(&untrusted).unwrap().trust_device);
    }
}
