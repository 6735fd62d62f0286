//! Verification code lifecycle
//!
//! Issues 4-digit challenges, stores their hashes with a TTL, and verifies
//! submissions with constant-time comparison and atomic single-use consume.

pub mod config;
pub mod manager;
pub mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationConfig;
pub use manager::{hash_code, VerificationCodeManager};
pub use traits::{ChallengeRecord, ChallengeStore};
