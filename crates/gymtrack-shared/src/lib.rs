//! # Gymtrack Shared
//!
//! Shared configuration, constants, and telemetry for the gymtrack backend.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;

pub use error::AppError;
