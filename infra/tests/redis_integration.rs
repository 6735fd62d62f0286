//! Redis challenge store integration tests
//!
//! Require a running Redis at REDIS_URL (default redis://127.0.0.1:6379).
//! Run with: cargo test -p vg_infra -- --ignored

use std::time::Duration;

use chrono::Utc;
use vg_core::domain::entities::challenge::Channel;
use vg_core::services::verification::traits::{ChallengeRecord, ChallengeStore};
use vg_infra::cache::challenge_store::RedisChallengeStore;
use vg_infra::cache::redis_client::RedisClient;
use vg_infra::config::CacheConfig;

async fn store() -> RedisChallengeStore {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let client = RedisClient::new(CacheConfig { url })
        .await
        .expect("Redis must be running for ignored integration tests");
    RedisChallengeStore::new(client)
}

fn record(code_hash: &str) -> ChallengeRecord {
    ChallengeRecord {
        code_hash: code_hash.to_string(),
        issued_at: Utc::now(),
        channel: Channel::Phone,
    }
}

#[tokio::test]
#[ignore]
async fn test_put_get_roundtrip() {
    let store = store().await;
    let key = format!("it-{}", uuid::Uuid::new_v4());

    store
        .put(&key, record("hash-1"), Duration::from_secs(30))
        .await
        .unwrap();
    let fetched = store.get(&key).await.unwrap().unwrap();
    assert_eq!(fetched.code_hash, "hash-1");
    assert_eq!(fetched.channel, Channel::Phone);

    assert!(store.delete(&key).await.unwrap());
    assert!(store.get(&key).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_put_replaces_prior_record() {
    let store = store().await;
    let key = format!("it-{}", uuid::Uuid::new_v4());

    store
        .put(&key, record("hash-1"), Duration::from_secs(30))
        .await
        .unwrap();
    store
        .put(&key, record("hash-2"), Duration::from_secs(30))
        .await
        .unwrap();
    assert_eq!(store.get(&key).await.unwrap().unwrap().code_hash, "hash-2");

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_consume_is_single_use() {
    let store = store().await;
    let key = format!("it-{}", uuid::Uuid::new_v4());

    store
        .put(&key, record("hash-1"), Duration::from_secs(30))
        .await
        .unwrap();

    assert!(!store.consume_if_matches(&key, "wrong").await.unwrap());
    assert!(store.get(&key).await.unwrap().is_some());

    assert!(store.consume_if_matches(&key, "hash-1").await.unwrap());
    assert!(!store.consume_if_matches(&key, "hash-1").await.unwrap());
    assert!(store.get(&key).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_ttl_eviction() {
    let store = store().await;
    let key = format!("it-{}", uuid::Uuid::new_v4());

    store
        .put(&key, record("hash-1"), Duration::from_secs(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(store.get(&key).await.unwrap().is_none());
}
