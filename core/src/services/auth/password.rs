//! Credential hashing helpers

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{DomainError, DomainResult};

/// Hash a plain credential with bcrypt.
pub fn hash_password(password: &str) -> DomainResult<String> {
    hash(password, DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("failed to hash password: {}", e),
    })
}

/// Verify a plain credential against a stored bcrypt hash.
///
/// A malformed stored hash reads as a non-match rather than an error so the
/// caller's failure path stays uniform.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("s3cret-pass").unwrap();
        assert!(verify_password("s3cret-pass", &hashed));
        assert!(!verify_password("wrong-pass", &hashed));
    }

    #[test]
    fn test_malformed_hash_is_non_match() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
