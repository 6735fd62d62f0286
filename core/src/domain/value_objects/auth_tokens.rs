//! Token pair returned by a successful login

use serde::{Deserialize, Serialize};

/// A JWT access/refresh token pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    /// Short-lived access token
    pub access_token: String,
    /// Longer-lived refresh token
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}
