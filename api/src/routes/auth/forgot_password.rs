//! POST /api/v1/auth/forgot-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::verification::traits::ChallengeStore;

use crate::dto::auth::{ForgotPasswordRequest, MessageResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

/// Send a password-reset code to a known account.
pub async fn forgot_password<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    C: ChallengeStore + 'static,
    N: NotificationDispatcher + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .forgot_password(&request.email_or_phone)
        .await
    {
        Ok(requested) => HttpResponse::Ok().json(MessageResponse {
            message: requested.message,
        }),
        Err(e) => domain_error_response(&e),
    }
}
