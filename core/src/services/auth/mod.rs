//! Registration, verification, recovery and login orchestration

pub mod dispatcher;
pub mod password;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use dispatcher::NotificationDispatcher;
pub use service::AuthService;
pub use types::{CodePurpose, NewRegistration, RegistrationOutcome, ResetRequested};
