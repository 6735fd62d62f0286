//! Manager behavior tests

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::challenge::Channel;
use crate::errors::{AuthError, DomainError};
use crate::services::verification::config::VerificationConfig;
use crate::services::verification::manager::{hash_code, VerificationCodeManager};
use crate::services::verification::tests::mocks::InMemoryChallengeStore;
use crate::services::verification::traits::ChallengeStore;

fn test_config() -> VerificationConfig {
    VerificationConfig {
        registration_ttl: Duration::from_secs(60),
        reset_ttl: Duration::from_secs(60),
        verify_window: Duration::from_secs(60),
    }
}

fn manager_with(
    config: VerificationConfig,
) -> (
    VerificationCodeManager<InMemoryChallengeStore>,
    Arc<InMemoryChallengeStore>,
) {
    let store = Arc::new(InMemoryChallengeStore::new());
    (VerificationCodeManager::new(store.clone(), config), store)
}

#[tokio::test]
async fn test_issue_then_verify_succeeds_once() {
    let (manager, store) = manager_with(test_config());
    let challenge = manager
        .issue("acct-1", Channel::Phone, Duration::from_secs(60))
        .await
        .unwrap();

    let channel = manager.verify("acct-1", &challenge.code).await.unwrap();
    assert_eq!(channel, Channel::Phone);
    assert_eq!(store.len().await, 0);

    // The challenge was consumed; a second submission finds nothing.
    let result = manager.verify("acct-1", &challenge.code).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NoActiveChallenge))
    ));
}

#[tokio::test]
async fn test_wrong_code_is_rejected_and_not_consumed() {
    let (manager, store) = manager_with(test_config());
    let challenge = manager
        .issue("acct-1", Channel::Email, Duration::from_secs(60))
        .await
        .unwrap();

    let wrong = if challenge.code == "1234" { "4321" } else { "1234" };
    let result = manager.verify("acct-1", wrong).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOrExpired))
    ));

    // Wrong submissions leave the challenge in place.
    assert_eq!(store.len().await, 1);
    assert_eq!(
        manager.verify("acct-1", &challenge.code).await.unwrap(),
        Channel::Email
    );
}

#[tokio::test]
async fn test_no_challenge_for_key() {
    let (manager, _store) = manager_with(test_config());
    let result = manager.verify("unknown", "1234").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NoActiveChallenge))
    ));
}

#[tokio::test]
async fn test_reissue_replaces_prior_challenge() {
    let (manager, _store) = manager_with(test_config());
    let first = manager
        .issue("acct-1", Channel::Phone, Duration::from_secs(60))
        .await
        .unwrap();
    let second = manager
        .issue("acct-1", Channel::Phone, Duration::from_secs(60))
        .await
        .unwrap();

    // The first code is dead as soon as the second is issued, even if the
    // codes happen to collide the record was overwritten with new state.
    if first.code != second.code {
        let result = manager.verify("acct-1", &first.code).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::InvalidOrExpired))
        ));
    }
    assert_eq!(
        manager.verify("acct-1", &second.code).await.unwrap(),
        Channel::Phone
    );
}

#[tokio::test]
async fn test_store_ttl_eviction_yields_no_active_challenge() {
    let (manager, _store) = manager_with(test_config());
    // Zero TTL evicts immediately: the store layer denies on its own.
    manager
        .issue("acct-1", Channel::Phone, Duration::ZERO)
        .await
        .unwrap();

    let result = manager.verify("acct-1", "1234").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NoActiveChallenge))
    ));
}

#[tokio::test]
async fn test_verify_window_denies_independently_of_store_ttl() {
    // Window of zero: the record is still live in the store but the
    // manager's elapsed-time check must reject even the correct code.
    let config = VerificationConfig {
        registration_ttl: Duration::from_secs(60),
        reset_ttl: Duration::from_secs(60),
        verify_window: Duration::ZERO,
    };
    let (manager, store) = manager_with(config);
    let challenge = manager
        .issue("acct-1", Channel::Email, Duration::from_secs(60))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    let result = manager.verify("acct-1", &challenge.code).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOrExpired))
    ));
    assert_eq!(store.len().await, 1, "expired challenge is not consumed");
}

#[tokio::test]
async fn test_record_vanishing_before_consume_reads_as_invalid() {
    let (manager, store) = manager_with(test_config());
    let challenge = manager
        .issue("acct-1", Channel::Phone, Duration::from_secs(60))
        .await
        .unwrap();

    // Another actor consumes between our lookup and consume; emulate by
    // consuming through the store directly, then verifying.
    let consumed = store
        .consume_if_matches("acct-1", &hash_code(&challenge.code))
        .await
        .unwrap();
    assert!(consumed);

    let result = manager.verify("acct-1", &challenge.code).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::NoActiveChallenge))
    ));
}

#[tokio::test]
async fn test_invalidate_removes_challenge() {
    let (manager, _store) = manager_with(test_config());
    manager
        .issue("acct-1", Channel::Phone, Duration::from_secs(60))
        .await
        .unwrap();

    assert!(manager.invalidate("acct-1").await.unwrap());
    assert!(!manager.invalidate("acct-1").await.unwrap());
}

#[tokio::test]
async fn test_challenges_are_scoped_per_key() {
    let (manager, _store) = manager_with(test_config());
    let a = manager
        .issue("acct-a", Channel::Phone, Duration::from_secs(60))
        .await
        .unwrap();
    let b = manager
        .issue("acct-b", Channel::Email, Duration::from_secs(60))
        .await
        .unwrap();

    assert_eq!(manager.verify("acct-a", &a.code).await.unwrap(), Channel::Phone);
    assert_eq!(manager.verify("acct-b", &b.code).await.unwrap(), Channel::Email);
}
