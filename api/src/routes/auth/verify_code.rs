//! POST /api/v1/auth/verify-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::verification::traits::ChallengeStore;

use crate::dto::auth::{MessageResponse, VerifyCodeRequest};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

/// Verify a registration code and activate the account.
pub async fn verify_code<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<VerifyCodeRequest>,
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
        .verify_registration(request.account_id, &request.code)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "Account verified successfully".to_string(),
        }),
        Err(e) => domain_error_response(&e),
    }
}
