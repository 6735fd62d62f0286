//! POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::classifier::mask_identifier;
use vg_core::services::verification::traits::ChallengeStore;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

/// Authenticate and return an access/refresh token pair.
pub async fn login<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: ChallengeStore + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!(
        "Processing login for {}",
        mask_identifier(&request.email_or_phone)
    );

    match state
        .auth_service
        .login(&request.email_or_phone, &request.password)
        .await
    {
        Ok(tokens) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            access: tokens.access_token,
            refresh: tokens.refresh_token,
            expires_in: tokens.expires_in,
        }),
        Err(e) => domain_error_response(&e),
    }
}
