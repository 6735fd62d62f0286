//! Flow-specific error enums

use thiserror::Error;

use crate::domain::entities::challenge::Channel;

/// Errors raised by the registration, verification, recovery and login flows.
///
/// Every variant is recoverable and maps to a client-facing HTTP status.
/// Messages never include the raw identifier or a verification code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identifier is neither a valid phone number nor an email address
    #[error("Identifier {identifier} is not a valid phone number or email address")]
    InvalidContact { identifier: String },

    /// An active account already exists for this identifier
    #[error("An account with this identifier already exists")]
    AlreadyRegistered,

    /// No challenge is currently stored for this account
    #[error("No active verification code found")]
    NoActiveChallenge,

    /// The submitted code is wrong, expired, or already consumed
    #[error("Verification code is invalid or has expired")]
    InvalidOrExpired,

    /// No account exists for this identifier
    #[error("Account not found")]
    NotFound,

    /// Login failed; deliberately does not say why
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The dispatcher reported a send error
    #[error("Failed to deliver verification code via {channel}")]
    DeliveryFailed { channel: Channel },
}

/// Errors raised during JWT issuance and validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to generate token")]
    TokenGenerationFailed,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Token has expired")]
    TokenExpired,
}
