//! Challenge store interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::entities::challenge::Channel;

/// What a store keeps for an active challenge.
///
/// Only the SHA-256 hash of the code is stored; the plain code never reaches
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRecord {
    /// SHA-256 hex digest of the code
    pub code_hash: String,
    /// When the challenge was issued
    pub issued_at: DateTime<Utc>,
    /// Delivery channel the challenge was sent on
    pub channel: Channel,
}

/// Ephemeral keyed storage for verification challenges.
///
/// Keys are account-identity strings; implementations own key prefixing and
/// TTL-based eviction. Errors are stringly typed so the interface stays
/// storage-agnostic.
#[async_trait]
pub trait ChallengeStore: Send + Sync {
    /// Store a record under the key with the given TTL, unconditionally
    /// replacing any existing record.
    async fn put(&self, key: &str, record: ChallengeRecord, ttl: Duration)
        -> Result<(), String>;

    /// Fetch the record for a key, if one is live.
    async fn get(&self, key: &str) -> Result<Option<ChallengeRecord>, String>;

    /// Remove the record for a key. Returns whether a record was removed.
    async fn delete(&self, key: &str) -> Result<bool, String>;

    /// Atomically delete the record for `key` if its stored hash equals
    /// `code_hash`. Returns true only when the record existed, matched, and
    /// was removed by this call. This is the single-use guarantee: two
    /// concurrent correct submissions cannot both get `true`.
    async fn consume_if_matches(&self, key: &str, code_hash: &str) -> Result<bool, String>;
}
