//! Database access

pub mod mysql;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::InfrastructureError;

/// Create a MySQL connection pool.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    info!(
        max_connections = config.max_connections,
        "Creating MySQL connection pool"
    );
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;
    info!("MySQL connection pool created");
    Ok(pool)
}
