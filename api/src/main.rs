//! VeriGate API server entry point

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use vg_api::app::create_app;
use vg_api::routes::auth::AppState;
use vg_core::services::auth::AuthService;
use vg_core::services::token::{TokenConfig, TokenService};
use vg_core::services::verification::{VerificationCodeManager, VerificationConfig};
use vg_infra::cache::ChallengeStoreBackend;
use vg_infra::config::DatabaseConfig;
use vg_infra::database::mysql::MySqlAccountRepository;
use vg_infra::database::create_pool;
use vg_infra::notify::NotificationService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting VeriGate API server");

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let bind_address = format!("{}:{}", server_host, server_port);

    // Account storage
    let db_config = DatabaseConfig::from_env().map_err(io_error)?;
    let pool = create_pool(&db_config).await.map_err(io_error)?;
    let accounts = Arc::new(MySqlAccountRepository::new(pool));

    // Challenge store: Redis when configured, in-memory otherwise
    let store = Arc::new(ChallengeStoreBackend::from_env().await.map_err(io_error)?);
    let verification_config = verification_config_from_env();
    let challenges = Arc::new(VerificationCodeManager::new(store, verification_config));

    // Outbound delivery with per-channel mock fallback
    let dispatcher = Arc::new(NotificationService::from_env().map_err(io_error)?);

    // Token issuance
    let jwt_secret = env::var("JWT_SECRET")
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidInput, "JWT_SECRET not set"))?;
    let tokens = Arc::new(TokenService::new(TokenConfig::new(jwt_secret)));

    let auth_service = Arc::new(AuthService::new(accounts, challenges, dispatcher, tokens));
    let app_state = web::Data::new(AppState { auth_service });

    info!("Server binding to {}", bind_address);
    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}

/// Read verification timing from the environment, defaulting to the
/// historical values (which are intentionally inconsistent and logged as
/// such by the config constructor).
fn verification_config_from_env() -> VerificationConfig {
    let registration = env_duration_secs("REGISTRATION_CODE_TTL_SECS");
    let reset = env_duration_secs("RESET_CODE_TTL_SECS");
    let window = env_duration_secs("VERIFY_WINDOW_SECS");

    match (registration, reset, window) {
        (Some(registration_ttl), Some(reset_ttl), Some(verify_window)) => {
            VerificationConfig::new(registration_ttl, reset_ttl, verify_window)
        }
        _ => {
            warn!("verification TTLs not fully configured, using legacy defaults");
            VerificationConfig::legacy()
        }
    }
}

fn env_duration_secs(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
}

fn io_error(e: vg_infra::InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
}
