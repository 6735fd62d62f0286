//! JWT access/refresh pair issuance
//!
//! Stateless HS256 tokens bound to an account id. Refresh-token rotation is
//! deliberately not implemented here.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::auth_tokens::AuthTokens;
use crate::errors::{DomainResult, TokenError};
use crate::services::token::config::TokenConfig;

/// JWT claims carried by both token types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: String,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// "access" or "refresh"
    pub token_type: String,
}

/// Issues signed token pairs.
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access/refresh pair for an account.
    pub fn issue_pair(&self, account_id: Uuid) -> DomainResult<AuthTokens> {
        let access_lifetime = Duration::minutes(self.config.access_ttl_minutes);
        let access_token = self.sign(account_id, "access", access_lifetime)?;
        let refresh_token = self.sign(
            account_id,
            "refresh",
            Duration::days(self.config.refresh_ttl_days),
        )?;
        Ok(AuthTokens {
            access_token,
            refresh_token,
            expires_in: access_lifetime.num_seconds(),
        })
    }

    /// Decode and validate a token, returning its claims.
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                _ => TokenError::InvalidToken,
            }
        })?;
        Ok(data.claims)
    }

    fn sign(&self, account_id: Uuid, token_type: &str, lifetime: Duration) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    fn service() -> TokenService {
        TokenService::new(TokenConfig::new("test-secret-at-least-32-bytes!!".to_string()))
    }

    #[test]
    fn test_issue_pair_round_trips() {
        let svc = service();
        let account_id = Uuid::new_v4();
        let tokens = svc.issue_pair(account_id).unwrap();

        let access = svc.decode(&tokens.access_token).unwrap();
        assert_eq!(access.sub, account_id.to_string());
        assert_eq!(access.token_type, "access");
        assert_eq!(access.iss, "verigate");

        let refresh = svc.decode(&tokens.refresh_token).unwrap();
        assert_eq!(refresh.token_type, "refresh");
        assert!(refresh.exp > access.exp);
    }

    #[test]
    fn test_expires_in_matches_access_lifetime() {
        let tokens = service().issue_pair(Uuid::new_v4()).unwrap();
        assert_eq!(tokens.expires_in, 15 * 60);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let svc = service();
        let tokens = svc.issue_pair(Uuid::new_v4()).unwrap();
        let mut tampered = tokens.access_token;
        tampered.push('x');
        let result = svc.decode(&tampered);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let tokens = service().issue_pair(Uuid::new_v4()).unwrap();
        let other = TokenService::new(TokenConfig::new("a-completely-different-secret!!!".to_string()));
        assert!(other.decode(&tokens.access_token).is_err());
    }
}
