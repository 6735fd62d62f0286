//! Business services

pub mod auth;
pub mod classifier;
pub mod token;
pub mod verification;

pub use auth::AuthService;
pub use token::{TokenConfig, TokenService};
pub use verification::{ChallengeStore, VerificationCodeManager, VerificationConfig};
