//! # VeriGate Core
//!
//! Core business logic and domain layer for the VeriGate backend.
//! This crate contains domain entities, business services, repository and
//! store interfaces, and error types. It performs no I/O of its own; every
//! external effect goes through an injected trait.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::account::{Account, AccountProfile};
pub use domain::entities::challenge::{Channel, VerificationChallenge};
pub use domain::value_objects::auth_tokens::AuthTokens;
pub use errors::types::{AuthError, TokenError};
pub use errors::{DomainError, DomainResult};
