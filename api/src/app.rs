//! Application factory
//!
//! Builds the actix-web App with all routes and middleware wired to a
//! generic application state, so integration tests can run the full HTTP
//! surface against mock services.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::verification::traits::ChallengeStore;

use crate::dto::error::ErrorResponse;
use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    forgot_password::forgot_password, login::login, register::register,
    reset_password::reset_password, verify_code::verify_code, AppState,
};

/// Create and configure the application with all dependencies.
pub fn create_app<A, C, N>(
    app_state: web::Data<AppState<A, C, N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    C: ChallengeStore + 'static,
    N: NotificationDispatcher + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<A, C, N>))
                    .route("/verify-code", web::post().to(verify_code::<A, C, N>))
                    .route("/login", web::post().to(login::<A, C, N>))
                    .route("/forgot-password", web::post().to(forgot_password::<A, C, N>))
                    .route("/reset-password", web::post().to(reset_password::<A, C, N>)),
            ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verigate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found",
    ))
}
