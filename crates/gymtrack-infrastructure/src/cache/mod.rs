//! Redis-backed session storage

pub mod pool;
pub mod redis_store;

pub use pool::create_redis_pool;
pub use redis_store::RedisSessionStore;
