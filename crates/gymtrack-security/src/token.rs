//! Bearer token transport encoding
//!
//! The token is the session key passed through base64: reversible and
//! lossless, not a cryptographic protection. Possession of a decodable
//! token is the entire authorization check, so a production hardening
//! step would replace this with a signed or MAC'd token.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed bearer token")]
    Malformed,
}

/// Reversible transform between an internal session key and the transported
/// bearer token. `decode(encode(k)) == k` for every valid key; anything not
/// produced by `encode` fails with [`TokenError::Malformed`], never with a
/// wrong key or a silent "no session".
#[derive(Debug, Clone, Copy)]
pub struct TokenCodec {
    key_length: usize,
}

impl TokenCodec {
    pub fn new(key_length: usize) -> Self {
        Self { key_length }
    }

    pub fn encode(&self, key: &str) -> String {
        BASE64.encode(key.as_bytes())
    }

    pub fn decode(&self, token: &str) -> Result<String, TokenError> {
        let bytes = BASE64
            .decode(token.trim().as_bytes())
            .map_err(|_| TokenError::Malformed)?;
        let key = String::from_utf8(bytes).map_err(|_| TokenError::Malformed)?;
        if key.len() != self.key_length || !key.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(TokenError::Malformed);
        }
        Ok(key)
    }
}
