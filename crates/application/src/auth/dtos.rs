use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============ JWT Claims ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub token_type: String,
}

impl Claims {
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

// ============ Registration ============

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "crate::auth::validate_phone_number"))]
    pub phone: String,
    #[validate(length(min = 2, max = 20, message = "Username must be between 2-20 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl RegisterRequest {
    pub fn trimmed(self) -> Self {
        Self {
            phone: self.phone.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i32,
    pub username: String,
    pub phone: String,
}

// ============ Login ============

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Phone number or username
    #[validate(length(min = 1, message = "Login field cannot be empty"))]
    pub login_field: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: i32,
    pub username: String,
    pub phone: String,
    pub avatar_ref: Option<String>,
    pub access_token: String,
    pub expires_in: i64,
}

// ============ Password Reset ============

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

// ============ Availability Checks ============

#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

// ============ Profile ============

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: i32,
    pub username: String,
    pub phone: String,
    pub avatar_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(length(min = 2, max = 20, message = "Username must be between 2-20 characters"))]
    pub username: Option<String>,
    /// Blob store key of an already uploaded avatar; empty string clears it
    #[serde(default)]
    #[validate(length(max = 512, message = "Avatar reference must be at most 512 characters"))]
    pub avatar_ref: Option<String>,
}
