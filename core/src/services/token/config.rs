//! Token service configuration

/// Configuration for JWT issuance.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC signing secret
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub access_ttl_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_ttl_days: i64,
    /// Issuer claim
    pub issuer: String,
}

impl TokenConfig {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
            issuer: "verigate".to_string(),
        }
    }
}
