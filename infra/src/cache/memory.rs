//! In-memory challenge store
//!
//! Used for development without Redis and by the API integration tests.
//! Expiry is lazy: records past their deadline are evicted when touched.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use vg_core::services::verification::traits::{ChallengeRecord, ChallengeStore};

#[derive(Default)]
pub struct MemoryChallengeStore {
    entries: RwLock<HashMap<String, (ChallengeRecord, Instant)>>,
}

impl MemoryChallengeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChallengeStore for MemoryChallengeStore {
    async fn put(&self, key: &str, record: ChallengeRecord, ttl: Duration) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (record, Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<ChallengeRecord>, String> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((record, deadline)) if Instant::now() < *deadline => Ok(Some(record.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn consume_if_matches(&self, key: &str, code_hash: &str) -> Result<bool, String> {
        // Single write lock covers the compare and the delete.
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some((record, deadline))
                if Instant::now() < *deadline && record.code_hash == code_hash =>
            {
                entries.remove(key);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
