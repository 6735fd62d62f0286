//! Account repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainResult;

/// Persistence interface for accounts.
///
/// Implementations must enforce identifier uniqueness.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its contact identifier.
    async fn find_by_identifier(&self, identifier: &str) -> DomainResult<Option<Account>>;

    /// Find an account by id.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>>;

    /// Persist a new account. Fails with a validation error if the
    /// identifier is already taken.
    async fn create(&self, account: &Account) -> DomainResult<()>;

    /// Set the active flag on an account.
    async fn set_active(&self, id: Uuid, active: bool) -> DomainResult<()>;

    /// Replace the stored credential hash.
    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> DomainResult<()>;
}
