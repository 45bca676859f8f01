use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication errors (401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Validation errors (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Not found errors (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limiting errors (429)
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Conflict errors (409) - e.g. duplicate phone or username
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database errors (500 or mapped)
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Password hashing / token signing errors (500)
    #[error("Cryptographic error: {0}")]
    Cryptographic(String),

    /// Configuration errors (500)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors (500)
    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

impl AppError {
    /// Get HTTP status code for the error
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Authentication(_) => 401,
            AppError::Validation(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Conflict(_) => 409,
            AppError::RateLimitExceeded(_) => 429,
            AppError::Database(sea_orm::DbErr::RecordNotFound(_)) => 404,
            AppError::Database(e) if is_unique_violation(e) => 409,
            AppError::Database(_)
            | AppError::Internal(_)
            | AppError::Cryptographic(_)
            | AppError::Configuration(_) => 500,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Authentication(_) => "AUTHENTICATION_FAILED",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) | AppError::Database(sea_orm::DbErr::RecordNotFound(_)) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::RateLimitExceeded(_) => "RATE_LIMITED",
            AppError::Database(e) if is_unique_violation(e) => "CONFLICT",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Cryptographic(_) => "CRYPTOGRAPHIC_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get retry after seconds (for rate limiting)
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            AppError::RateLimitExceeded(_) => Some(60),
            _ => None,
        }
    }

    /// Message safe to show to the caller. Server-side failures never leak
    /// store or crypto details.
    pub fn public_message(&self) -> String {
        if self.status_code() >= 500 {
            "Internal server error, please try again later".to_string()
        } else {
            self.to_string()
        }
    }
}

// Postgres reports "duplicate key value violates unique constraint",
// SQLite reports "UNIQUE constraint failed".
fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    let message = err.to_string();
    message.contains("unique constraint") || message.contains("UNIQUE constraint failed")
}

// Additional From implementations for conversion

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Authentication(format!("JWT error: {}", err))
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::Cryptographic(format!("Password hashing error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| "validation failed".to_string())
                    )
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join(", "))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;
