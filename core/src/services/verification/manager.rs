//! Verification code manager

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::domain::entities::challenge::{Channel, VerificationChallenge};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::verification::config::VerificationConfig;
use crate::services::verification::traits::{ChallengeRecord, ChallengeStore};

/// SHA-256 hex digest of a verification code.
pub fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Issues and verifies challenges against an injected store.
///
/// The manager never stores a plain code, and verification combines a
/// constant-time hash comparison with an elapsed-time check before the
/// atomic consume.
pub struct VerificationCodeManager<C: ChallengeStore> {
    store: Arc<C>,
    config: VerificationConfig,
}

impl<C: ChallengeStore> VerificationCodeManager<C> {
    pub fn new(store: Arc<C>, config: VerificationConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    /// Issue a fresh challenge under `key`, replacing any prior one.
    ///
    /// Returns the challenge with its plain code so the caller can dispatch
    /// it; only the hash goes to the store.
    pub async fn issue(
        &self,
        key: &str,
        channel: Channel,
        ttl: Duration,
    ) -> DomainResult<VerificationChallenge> {
        let challenge = VerificationChallenge::new(channel);
        let record = ChallengeRecord {
            code_hash: hash_code(&challenge.code),
            issued_at: challenge.issued_at,
            channel,
        };
        self.store
            .put(key, record, ttl)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to store challenge: {}", e),
            })?;
        info!(key = %key, channel = %channel, ttl_secs = ttl.as_secs(), "challenge issued");
        Ok(challenge)
    }

    /// Verify a submitted code against the active challenge for `key`.
    ///
    /// On success the challenge is consumed atomically and the channel it
    /// was issued on is returned. A record that disappears between lookup
    /// and consume (TTL eviction or a concurrent consume) is reported as
    /// invalid, not as missing.
    pub async fn verify(&self, key: &str, submitted: &str) -> DomainResult<Channel> {
        let record = self
            .store
            .get(key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to read challenge: {}", e),
            })?
            .ok_or(AuthError::NoActiveChallenge)?;

        let submitted_hash = hash_code(submitted);
        let hash_matches =
            constant_time_eq(submitted_hash.as_bytes(), record.code_hash.as_bytes());

        let elapsed = Utc::now().signed_duration_since(record.issued_at);
        let within_window = elapsed.num_milliseconds() >= 0
            && elapsed.num_milliseconds() as u128 <= self.config.verify_window.as_millis();

        if !hash_matches || !within_window {
            debug!(key = %key, within_window, "challenge verification rejected");
            return Err(AuthError::InvalidOrExpired.into());
        }

        let consumed = self
            .store
            .consume_if_matches(key, &record.code_hash)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to consume challenge: {}", e),
            })?;
        if !consumed {
            return Err(AuthError::InvalidOrExpired.into());
        }

        info!(key = %key, channel = %record.channel, "challenge verified and consumed");
        Ok(record.channel)
    }

    /// Drop any active challenge for `key`.
    pub async fn invalidate(&self, key: &str) -> DomainResult<bool> {
        self.store
            .delete(key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to delete challenge: {}", e),
            })
    }
}
