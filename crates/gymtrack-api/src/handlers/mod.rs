//! HTTP handlers

pub mod auth;
pub mod gyma;
