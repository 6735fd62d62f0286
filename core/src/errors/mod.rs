//! Error types for the core domain
//!
//! Flow-specific errors live in [`types`]; [`DomainError`] is the umbrella
//! that services return.

pub mod types;

use thiserror::Error;

use crate::domain::entities::challenge::Channel;

pub use types::{AuthError, TokenError};

/// Top-level error type returned by core services.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input failed validation
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// Infrastructure-level failure (storage, cache, ...)
    #[error("Internal error: {message}")]
    Internal { message: String },

    /// Authentication flow error
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Token issuance or validation error
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether the error is safe to surface to an API client as-is.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, DomainError::Internal { .. })
    }

    /// The delivery channel involved, when the error is a delivery failure.
    pub fn failed_channel(&self) -> Option<Channel> {
        match self {
            DomainError::Auth(AuthError::DeliveryFailed { channel }) => Some(*channel),
            _ => None,
        }
    }
}

/// Result alias used throughout the core crate.
pub type DomainResult<T> = Result<T, DomainError>;
