//! Repository interfaces and in-memory implementations

pub mod account;

pub use account::mock::MockAccountRepository;
pub use account::repository::AccountRepository;
