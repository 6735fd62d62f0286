//! # Infrastructure Layer
//!
//! Concrete implementations behind the core traits: MySQL account storage,
//! Redis and in-memory challenge stores, SMTP and SMS delivery, and the
//! environment-driven configuration they share.

pub mod cache;
pub mod database;
pub mod notify;

/// Configuration for infrastructure services
pub mod config {
    //! Environment-driven configuration structs.

    /// Database connection settings
    #[derive(Debug, Clone)]
    pub struct DatabaseConfig {
        /// MySQL connection URL
        pub url: String,
        /// Maximum pool connections
        pub max_connections: u32,
    }

    impl DatabaseConfig {
        /// Read from `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
        pub fn from_env() -> Result<Self, super::InfrastructureError> {
            let url = std::env::var("DATABASE_URL").map_err(|_| {
                super::InfrastructureError::Config("DATABASE_URL not set".to_string())
            })?;
            let max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10);
            Ok(Self {
                url,
                max_connections,
            })
        }
    }

    /// Redis connection settings
    #[derive(Debug, Clone)]
    pub struct CacheConfig {
        /// Redis connection URL
        pub url: String,
    }

    impl CacheConfig {
        /// Read from `REDIS_URL`; `None` when unset so callers can fall back
        /// to the in-memory store.
        pub fn from_env() -> Option<Self> {
            std::env::var("REDIS_URL").ok().map(|url| Self { url })
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS gateway error
    #[error("SMS error: {0}")]
    Sms(String),

    /// SMTP delivery error
    #[error("Email error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
