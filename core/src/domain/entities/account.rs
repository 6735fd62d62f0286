//! Account entity
//!
//! An account is identified by a contact identifier (email address or phone
//! number) and starts life inactive until its first verification challenge
//! is answered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional profile attributes collected at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<u8>,
    /// Height in centimeters
    pub height: Option<u16>,
    /// Weight in kilograms
    pub weight: Option<u16>,
    /// Free-form training goal
    pub goal: Option<String>,
    /// Self-reported experience level
    pub level: Option<String>,
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier
    pub id: Uuid,
    /// Contact identifier: email address or phone number
    pub identifier: String,
    /// Bcrypt hash of the account credential
    pub password_hash: String,
    /// Profile attributes
    pub profile: AccountProfile,
    /// Whether the account has completed verification
    pub is_active: bool,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, inactive account.
    pub fn new(identifier: String, password_hash: String, profile: AccountProfile) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            identifier,
            password_hash,
            profile,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the account as verified.
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Replace the stored credential hash.
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
