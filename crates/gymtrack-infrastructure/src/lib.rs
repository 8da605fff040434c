//! # Gymtrack Infrastructure
//!
//! Cache adapters for the session core.

pub mod cache;

pub use cache::{create_redis_pool, RedisSessionStore};
