//! # Gymtrack Core - Domain Module
//!
//! Session record, key, and field entities.

pub mod record;

pub use record::{SessionField, SessionKey, SessionRecord};
