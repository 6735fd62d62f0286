//! Challenge store implementations

pub mod challenge_store;
pub mod memory;
pub mod redis_client;

use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

use vg_core::services::verification::traits::{ChallengeRecord, ChallengeStore};

use crate::config::CacheConfig;
use crate::InfrastructureError;
use challenge_store::RedisChallengeStore;
use memory::MemoryChallengeStore;
use redis_client::RedisClient;

/// Runtime-selected challenge store.
///
/// Redis when `REDIS_URL` is configured, otherwise the in-memory store.
/// The enum keeps the concrete type nameable so the generic services stay
/// free of trait objects.
pub enum ChallengeStoreBackend {
    Redis(RedisChallengeStore),
    Memory(MemoryChallengeStore),
}

impl ChallengeStoreBackend {
    /// Build a store from the environment.
    pub async fn from_env() -> Result<Self, InfrastructureError> {
        match CacheConfig::from_env() {
            Some(config) => {
                let client = RedisClient::new(config).await?;
                info!("Using Redis challenge store");
                Ok(Self::Redis(RedisChallengeStore::new(client)))
            }
            None => {
                warn!("REDIS_URL not set, using in-memory challenge store; challenges do not survive restarts");
                Ok(Self::Memory(MemoryChallengeStore::new()))
            }
        }
    }
}

#[async_trait]
impl ChallengeStore for ChallengeStoreBackend {
    async fn put(&self, key: &str, record: ChallengeRecord, ttl: Duration) -> Result<(), String> {
        match self {
            Self::Redis(store) => store.put(key, record, ttl).await,
            Self::Memory(store) => store.put(key, record, ttl).await,
        }
    }

    async fn get(&self, key: &str) -> Result<Option<ChallengeRecord>, String> {
        match self {
            Self::Redis(store) => store.get(key).await,
            Self::Memory(store) => store.get(key).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        match self {
            Self::Redis(store) => store.delete(key).await,
            Self::Memory(store) => store.delete(key).await,
        }
    }

    async fn consume_if_matches(&self, key: &str, code_hash: &str) -> Result<bool, String> {
        match self {
            Self::Redis(store) => store.consume_if_matches(key, code_hash).await,
            Self::Memory(store) => store.consume_if_matches(key, code_hash).await,
        }
    }
}
