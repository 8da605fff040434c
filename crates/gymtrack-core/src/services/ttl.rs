//! Session expiration policy

use std::time::Duration;

use gymtrack_shared::config::SessionSettings;

/// Maps the trust-device flag to a concrete sliding-expiration duration.
///
/// Consulted identically at creation and at every refresh, so a record's
/// effective lifetime policy never changes mid-life.
#[derive(Debug, Clone, Copy)]
pub struct TtlPolicy {
    default_ttl: Duration,
    trust_device_ttl: Duration,
}

impl TtlPolicy {
    pub fn new(default_ttl: Duration, trust_device_ttl: Duration) -> Self {
        Self {
            default_ttl,
            trust_device_ttl,
        }
    }

    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self::new(
            Duration::from_secs(settings.default_ttl_secs),
            Duration::from_secs(settings.trust_device_ttl_secs),
        )
    }

    pub fn ttl_for(&self, trust_device: bool) -> Duration {
        if trust_device {
            self.trust_device_ttl
        } else {
            self.default_ttl
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_device_selects_the_long_duration() {
        let policy = TtlPolicy::new(Duration::from_secs(60), Duration::from_secs(600));
        assert_eq!(policy.ttl_for(false), Duration::from_secs(60));
        assert_eq!(policy.ttl_for(true), Duration::from_secs(600));
    }
}
