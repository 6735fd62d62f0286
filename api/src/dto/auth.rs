//! Auth endpoint DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Request body for POST /api/v1/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address or phone number
    #[validate(length(min = 5, max = 255, message = "Identifier must be 5-255 characters"))]
    pub email_or_phone: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 20, message = "Gender must be at most 20 characters"))]
    pub gender: Option<String>,

    #[validate(range(min = 16, max = 50, message = "Age must be between 16 and 50"))]
    pub age: Option<u8>,

    #[validate(range(min = 140, max = 220, message = "Height must be between 140 and 220"))]
    pub height: Option<u16>,

    #[validate(range(min = 30, max = 200, message = "Weight must be between 30 and 200"))]
    pub weight: Option<u16>,

    #[validate(length(max = 255, message = "Goal must be at most 255 characters"))]
    pub goal: Option<String>,

    #[validate(length(max = 50, message = "Level must be at most 50 characters"))]
    pub level: Option<String>,
}

/// Response body for POST /api/v1/auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub account_id: Uuid,
    pub message: String,
}

/// Request body for POST /api/v1/auth/verify-code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    pub account_id: Uuid,

    #[validate(length(equal = 4, message = "Code must be exactly 4 digits"))]
    pub code: String,
}

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 5, max = 255, message = "Identifier must be 5-255 characters"))]
    pub email_or_phone: String,

    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,
}

/// Response body for POST /api/v1/auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access: String,
    pub refresh: String,
    pub expires_in: i64,
}

/// Request body for POST /api/v1/auth/forgot-password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(length(min = 5, max = 255, message = "Identifier must be 5-255 characters"))]
    pub email_or_phone: String,
}

/// Request body for POST /api/v1/auth/reset-password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 5, max = 255, message = "Identifier must be 5-255 characters"))]
    pub email_or_phone: String,

    #[validate(length(equal = 4, message = "Code must be exactly 4 digits"))]
    pub verification_code: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub new_password: String,
}

/// Generic message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
