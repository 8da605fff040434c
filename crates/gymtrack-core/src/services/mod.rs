//! # Gymtrack Core - Services Module

pub mod keygen;
pub mod session_service;
pub mod ttl;

pub use keygen::KeyGenerator;
pub use session_service::SessionService;
pub use ttl::TtlPolicy;
