//! Redis connection pool
//!
//! The pool is constructed explicitly at startup and injected into the
//! store; there is no module-level lazily initialized handle. Broken
//! connections are replaced at checkout by the pool manager.

use deadpool_redis::{Config, CreatePoolError, Pool, PoolConfig, Runtime};
use gymtrack_shared::config::RedisSettings;

pub fn create_redis_pool(settings: &RedisSettings) -> Result<Pool, CreatePoolError> {
    let mut config = Config::from_url(&settings.url);
    config.pool = Some(PoolConfig::new(settings.max_connections as usize));
    config.create_pool(Some(Runtime::Tokio1))
}
