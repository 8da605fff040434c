//! # Gymtrack Core
//!
//! Session domain entities, store ports, and the session service.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use domain::{SessionField, SessionKey, SessionRecord};
pub use error::SessionError;
pub use ports::{CredentialProvider, SessionStore};
pub use services::{KeyGenerator, SessionService, TtlPolicy};
