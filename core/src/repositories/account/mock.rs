//! In-memory account repository for tests and development

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::account::repository::AccountRepository;

/// Mock account repository backed by a HashMap.
#[derive(Default)]
pub struct MockAccountRepository {
    accounts: RwLock<HashMap<Uuid, Account>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_identifier(&self, identifier: &str) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.identifier == identifier)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn create(&self, account: &Account) -> DomainResult<()> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.identifier == account.identifier) {
            return Err(DomainError::Validation {
                message: "identifier already taken".to_string(),
            });
        }
        accounts.insert(account.id, account.clone());
        Ok(())
    }

    async fn set_active(&self, id: Uuid, active: bool) -> DomainResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(AuthError::NotFound)?;
        account.is_active = active;
        account.updated_at = chrono::Utc::now();
        Ok(())
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> DomainResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(&id).ok_or(AuthError::NotFound)?;
        account.password_hash = password_hash.to_string();
        account.updated_at = chrono::Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::account::AccountProfile;

    fn sample_account(identifier: &str) -> Account {
        Account::new(
            identifier.to_string(),
            "$2b$12$hash".to_string(),
            AccountProfile::default(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MockAccountRepository::new();
        let account = sample_account("user@example.com");
        repo.create(&account).await.unwrap();

        let by_id = repo.find_by_id(account.id).await.unwrap().unwrap();
        assert_eq!(by_id.identifier, "user@example.com");

        let by_identifier = repo
            .find_by_identifier("user@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_identifier.id, account.id);
    }

    #[tokio::test]
    async fn test_duplicate_identifier_rejected() {
        let repo = MockAccountRepository::new();
        repo.create(&sample_account("+998901234567")).await.unwrap();
        let result = repo.create(&sample_account("+998901234567")).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn test_set_active() {
        let repo = MockAccountRepository::new();
        let account = sample_account("user@example.com");
        repo.create(&account).await.unwrap();

        repo.set_active(account.id, true).await.unwrap();
        let stored = repo.find_by_id(account.id).await.unwrap().unwrap();
        assert!(stored.is_active);
    }

    #[tokio::test]
    async fn test_set_active_unknown_account() {
        let repo = MockAccountRepository::new();
        let result = repo.set_active(Uuid::new_v4(), true).await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::NotFound))
        ));
    }
}
