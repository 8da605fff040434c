//! Application-wide constants

/// Sliding expiration applied to ordinary sessions.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
/// Sliding expiration applied when the client asked to trust the device.
pub const TRUST_DEVICE_SESSION_TTL_SECS: u64 = 2_592_000;
/// Length of the random alphanumeric session key.
pub const SESSION_KEY_LENGTH: usize = 16;
/// Collision retries before key generation gives up.
pub const MAX_KEY_ATTEMPTS: usize = 8;
