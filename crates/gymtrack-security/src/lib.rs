//! # Gymtrack Security
//!
//! Token transport encoding and session key material.

pub mod keygen;
pub mod token;

pub use token::{TokenCodec, TokenError};
