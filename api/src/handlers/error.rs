//! Domain error to HTTP response mapping

use actix_web::HttpResponse;
use std::collections::HashMap;
use validator::ValidationErrors;

use vg_core::errors::{AuthError, DomainError};

use crate::dto::error::ErrorResponse;

/// Map a domain error to its HTTP response.
///
/// Internal errors are logged with detail and surfaced as an opaque 500.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Validation { message } => HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", message.clone())),
        DomainError::Token(_) => HttpResponse::InternalServerError().json(ErrorResponse::new(
            "internal_error",
            "An internal error occurred",
        )),
        DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    let message = error.to_string();
    match error {
        AuthError::InvalidContact { .. } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("invalid_contact", message))
        }
        AuthError::AlreadyRegistered => {
            HttpResponse::BadRequest().json(ErrorResponse::new("already_registered", message))
        }
        AuthError::NoActiveChallenge => {
            HttpResponse::BadRequest().json(ErrorResponse::new("no_active_challenge", message))
        }
        AuthError::InvalidOrExpired => {
            HttpResponse::BadRequest().json(ErrorResponse::new("invalid_or_expired_code", message))
        }
        AuthError::InvalidCredentials => {
            HttpResponse::BadRequest().json(ErrorResponse::new("invalid_credentials", message))
        }
        AuthError::NotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", message))
        }
        AuthError::DeliveryFailed { .. } => {
            HttpResponse::ServiceUnavailable().json(ErrorResponse::new("delivery_failed", message))
        }
    }
}

/// Map `validator` output to a 400 with per-field messages.
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: HashMap<String, Vec<String>> = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_fields(fields),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vg_core::domain::entities::challenge::Channel;

    #[test]
    fn test_status_codes() {
        let cases: Vec<(DomainError, u16)> = vec![
            (AuthError::AlreadyRegistered.into(), 400),
            (AuthError::NoActiveChallenge.into(), 400),
            (AuthError::InvalidOrExpired.into(), 400),
            (AuthError::InvalidCredentials.into(), 400),
            (AuthError::NotFound.into(), 404),
            (
                AuthError::DeliveryFailed {
                    channel: Channel::Phone,
                }
                .into(),
                503,
            ),
            (
                DomainError::Internal {
                    message: "boom".to_string(),
                },
                500,
            ),
        ];
        for (error, expected) in cases {
            let response = domain_error_response(&error);
            assert_eq!(response.status().as_u16(), expected, "{:?}", error);
        }
    }
}
