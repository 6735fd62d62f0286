//! POST /api/v1/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use vg_core::domain::entities::account::AccountProfile;
use vg_core::repositories::account::repository::AccountRepository;
use vg_core::services::auth::dispatcher::NotificationDispatcher;
use vg_core::services::auth::types::NewRegistration;
use vg_core::services::classifier::mask_identifier;
use vg_core::services::verification::traits::ChallengeStore;

use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};
use crate::routes::auth::AppState;

/// Create an account and send its verification code, or resend the code for
/// an account that is still pending verification.
///
/// Returns 201 on create, 200 on resend.
pub async fn register<A, C, N>(
    state: web::Data<AppState<A, C, N>>,
    request: web::Json<RegisterRequest>,
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
        "Processing registration for {}",
        mask_identifier(&request.email_or_phone)
    );

    let registration = NewRegistration {
        identifier: request.email_or_phone.clone(),
        password: request.password.clone(),
        profile: AccountProfile {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            gender: request.gender.clone(),
            age: request.age,
            height: request.height,
            weight: request.weight,
            goal: request.goal.clone(),
            level: request.level.clone(),
        },
    };

    match state.auth_service.register(registration).await {
        Ok(outcome) if outcome.resent => HttpResponse::Ok().json(RegisterResponse {
            account_id: outcome.account_id,
            message: "Verification code resent".to_string(),
        }),
        Ok(outcome) => HttpResponse::Created().json(RegisterResponse {
            account_id: outcome.account_id,
            message: "Verification code sent".to_string(),
        }),
        Err(e) => domain_error_response(&e),
    }
}
