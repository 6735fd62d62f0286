//! Redis-backed challenge store

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use vg_core::services::verification::traits::{ChallengeRecord, ChallengeStore};

use crate::cache::redis_client::RedisClient;

const KEY_PREFIX: &str = "challenge:";

/// Compare-and-delete in one server-side step. Returns the record JSON when
/// the stored hash matches, nil otherwise. This is what makes a challenge
/// single-use under concurrent submissions.
const CONSUME_SCRIPT: &str = r#"
local raw = redis.call('GET', KEYS[1])
if not raw then
    return nil
end
local ok, record = pcall(cjson.decode, raw)
if not ok then
    return nil
end
if record.code_hash == ARGV[1] then
    redis.call('DEL', KEYS[1])
    return raw
end
return nil
"#;

/// Challenge store backed by Redis. TTL eviction is native SETEX expiry;
/// consume runs a Lua compare-and-delete.
pub struct RedisChallengeStore {
    client: RedisClient,
}

impl RedisChallengeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn storage_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }
}

#[async_trait]
impl ChallengeStore for RedisChallengeStore {
    async fn put(&self, key: &str, record: ChallengeRecord, ttl: Duration) -> Result<(), String> {
        let payload = serde_json::to_string(&record).map_err(|e| e.to_string())?;
        // SETEX with a zero TTL is an error in Redis; clamp to one second,
        // the smallest expiry the server accepts.
        let ttl_secs = ttl.as_secs().max(1);
        self.client
            .set_with_expiry(&Self::storage_key(key), &payload, ttl_secs)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<ChallengeRecord>, String> {
        let raw = self
            .client
            .get(&Self::storage_key(key))
            .await
            .map_err(|e| e.to_string())?;
        match raw {
            Some(json) => match serde_json::from_str(&json) {
                Ok(record) => Ok(Some(record)),
                Err(e) => {
                    warn!(key = %key, error = %e, "dropping undecodable challenge record");
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        self.client
            .delete(&Self::storage_key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn consume_if_matches(&self, key: &str, code_hash: &str) -> Result<bool, String> {
        let consumed = self
            .client
            .run_script(CONSUME_SCRIPT, &Self::storage_key(key), code_hash)
            .await
            .map_err(|e| e.to_string())?;
        debug!(key = %key, consumed = consumed.is_some(), "challenge consume attempted");
        Ok(consumed.is_some())
    }
}
