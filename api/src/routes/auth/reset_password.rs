//! POST /api/v1/auth/reset-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::verification::traits::ChallengeStore;

use crate::dto::auth::{MessageResponse, ResetPasswordRequest};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

/// Verify a reset code and replace the account credential.
pub async fn reset_password<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<ResetPasswordRequest>,
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
        .reset_password(
            &request.email_or_phone,
            &request.verification_code,
            &request.new_password,
        )
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Password reset successfully".to_string(),
        }),
        Err(e) => domain_error_response(&e),
    }
}
