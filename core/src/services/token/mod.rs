//! JWT token issuance

pub mod config;
pub mod service;

pub use config::TokenConfig;
pub use service::{Claims, TokenService};
