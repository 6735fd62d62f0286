//! Verification challenge entity
//!
//! A challenge is a short-lived numeric code issued during registration or
//! password recovery. The plain code only exists long enough to be handed to
//! the dispatcher; stores keep a hash of it.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest code value (inclusive)
pub const CODE_MIN: u32 = 1000;

/// Largest code value (inclusive)
pub const CODE_MAX: u32 = 9999;

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 4;

/// Delivery channel for a verification code, decided by classifying the
/// account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Deliver via email (SMTP)
    Email,
    /// Deliver via SMS
    Phone,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Phone => write!(f, "phone"),
        }
    }
}

/// A freshly issued verification challenge.
///
/// Holds the plain code so it can be dispatched; never persist this struct
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationChallenge {
    /// The 4-digit code as a string
    pub code: String,
    /// When the challenge was issued
    pub issued_at: DateTime<Utc>,
    /// Channel the code will be delivered on
    pub channel: Channel,
}

impl VerificationChallenge {
    /// Generate a new challenge with a random 4-digit code.
    pub fn new(channel: Channel) -> Self {
        let code = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
        Self {
            code: code.to_string(),
            issued_at: Utc::now(),
            channel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_is_four_digits() {
        for _ in 0..100 {
            let challenge = VerificationChallenge::new(Channel::Phone);
            assert_eq!(challenge.code.len(), CODE_LENGTH);
            let value: u32 = challenge.code.parse().unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&value));
        }
    }

    #[test]
    fn test_challenge_carries_channel() {
        let challenge = VerificationChallenge::new(Channel::Email);
        assert_eq!(challenge.channel, Channel::Email);
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Email.to_string(), "email");
        assert_eq!(Channel::Phone.to_string(), "phone");
    }

    #[test]
    fn test_channel_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Channel::Phone).unwrap(), "\"phone\"");
        let parsed: Channel = serde_json::from_str("\"email\"").unwrap();
        assert_eq!(parsed, Channel::Email);
    }
}
