//! Application error types

use thiserror::Error;

/// Failures raised while assembling the application environment.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
