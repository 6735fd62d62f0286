//! Value objects

pub mod auth_tokens;
