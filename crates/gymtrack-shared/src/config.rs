//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_SESSION_TTL_SECS, SESSION_KEY_LENGTH, TRUST_DEVICE_SESSION_TTL_SECS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub redis: RedisSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub default_ttl_secs: u64,
    pub trust_device_ttl_secs: u64,
    pub key_length: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "gymtrack-backend")?
            .set_default("redis.url", "redis://127.0.0.1:6379/0")?
            .set_default("redis.max_connections", 16)?
            .set_default("session.default_ttl_secs", DEFAULT_SESSION_TTL_SECS)?
            .set_default(
                "session.trust_device_ttl_secs",
                TRUST_DEVICE_SESSION_TTL_SECS,
            )?
            .set_default("session.key_length", SESSION_KEY_LENGTH as u64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
