//! MySQL account repository
//!
//! Expects the following table:
//!
//! ```sql
//! CREATE TABLE accounts (
//!     id CHAR(36) PRIMARY KEY,
//!     identifier VARCHAR(255) NOT NULL UNIQUE,
//!     password_hash VARCHAR(255) NOT NULL,
//!     first_name VARCHAR(100) NULL,
//!     last_name VARCHAR(100) NULL,
//!     gender VARCHAR(20) NULL,
//!     age TINYINT UNSIGNED NULL,
//!     height SMALLINT UNSIGNED NULL,
//!     weight SMALLINT UNSIGNED NULL,
//!     goal VARCHAR(255) NULL,
//!     level VARCHAR(50) NULL,
//!     is_active BOOLEAN NOT NULL DEFAULT FALSE,
//!     created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
//!     updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
//!     INDEX idx_accounts_identifier (identifier)
//! );
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

use vg_core::domain::entities::account::{Account, AccountProfile};
use vg_core::errors::{DomainError, DomainResult};
use vg_core::repositories::account::repository::AccountRepository;

pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn map_row(row: &MySqlRow) -> DomainResult<Account> {
        let id_str: String = row.try_get("id").map_err(storage_error)?;
        let id = Uuid::parse_str(&id_str).map_err(|e| DomainError::Internal {
            message: format!("invalid account id in storage: {}", e),
        })?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(storage_error)?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(storage_error)?;
        Ok(Account {
            id,
            identifier: row.try_get("identifier").map_err(storage_error)?,
            password_hash: row.try_get("password_hash").map_err(storage_error)?,
            profile: AccountProfile {
                first_name: row.try_get("first_name").map_err(storage_error)?,
                last_name: row.try_get("last_name").map_err(storage_error)?,
                gender: row.try_get("gender").map_err(storage_error)?,
                age: row.try_get::<Option<u8>, _>("age").map_err(storage_error)?,
                height: row
                    .try_get::<Option<u16>, _>("height")
                    .map_err(storage_error)?,
                weight: row
                    .try_get::<Option<u16>, _>("weight")
                    .map_err(storage_error)?,
                goal: row.try_get("goal").map_err(storage_error)?,
                level: row.try_get("level").map_err(storage_error)?,
            },
            is_active: row.try_get("is_active").map_err(storage_error)?,
            created_at,
            updated_at,
        })
    }
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("database error: {}", e),
    }
}

const SELECT_COLUMNS: &str = "id, identifier, password_hash, first_name, last_name, gender, age, \
                              height, weight, goal, level, is_active, created_at, updated_at";

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_identifier(&self, identifier: &str) -> DomainResult<Option<Account>> {
        let query = format!(
            "SELECT {} FROM accounts WHERE identifier = ?",
            SELECT_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Account>> {
        let query = format!("SELECT {} FROM accounts WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        row.as_ref().map(Self::map_row).transpose()
    }

    async fn create(&self, account: &Account) -> DomainResult<()> {
        debug!(account_id = %account.id, "inserting account");
        let result = sqlx::query(
            "INSERT INTO accounts \
             (id, identifier, password_hash, first_name, last_name, gender, age, \
              height, weight, goal, level, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(account.id.to_string())
        .bind(&account.identifier)
        .bind(&account.password_hash)
        .bind(&account.profile.first_name)
        .bind(&account.profile.last_name)
        .bind(&account.profile.gender)
        .bind(account.profile.age)
        .bind(account.profile.height)
        .bind(account.profile.weight)
        .bind(&account.profile.goal)
        .bind(&account.profile.level)
        .bind(account.is_active)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::Validation {
                    message: "identifier already taken".to_string(),
                })
            }
            Err(e) => Err(storage_error(e)),
        }
    }

    async fn set_active(&self, id: Uuid, active: bool) -> DomainResult<()> {
        let result = sqlx::query("UPDATE accounts SET is_active = ?, updated_at = ? WHERE id = ?")
            .bind(active)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        if result.rows_affected() == 0 {
            return Err(vg_core::errors::AuthError::NotFound.into());
        }
        Ok(())
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> DomainResult<()> {
        let result =
            sqlx::query("UPDATE accounts SET password_hash = ?, updated_at = ? WHERE id = ?")
                .bind(password_hash)
                .bind(Utc::now())
                .bind(id.to_string())
                .execute(&self.pool)
                .await
                .map_err(storage_error)?;
        if result.rows_affected() == 0 {
            return Err(vg_core::errors::AuthError::NotFound.into());
        }
        Ok(())
    }
}
