//! Request and outcome types for the auth flows

use uuid::Uuid;

use crate::domain::entities::account::AccountProfile;
use crate::domain::entities::challenge::Channel;

/// Input to [`crate::services::auth::AuthService::register`].
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub identifier: String,
    pub password: String,
    pub profile: AccountProfile,
}

/// Result of a registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub account_id: Uuid,
    pub channel: Channel,
    /// True when the account already existed in the pending state and the
    /// challenge was reissued rather than the account created.
    pub resent: bool,
}

/// Result of a forgot-password call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequested {
    pub channel: Channel,
    /// Human-readable confirmation, channel-specific.
    pub message: String,
}

/// Why a code is being sent; selects the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    Registration,
    PasswordReset,
}

impl CodePurpose {
    pub fn subject(&self) -> &'static str {
        match self {
            CodePurpose::Registration => "Your Verification Code",
            CodePurpose::PasswordReset => "Your Password Reset Verification Code",
        }
    }

    pub fn body(&self, code: &str) -> String {
        match self {
            CodePurpose::Registration => format!("Your verification code is {}", code),
            CodePurpose::PasswordReset => {
                format!("Your password reset verification code is {}", code)
            }
        }
    }
}
