use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use application::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body shared by every route
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_seconds: Option<u64>,
}

/// Wrapper around AppError to implement ResponseError (which is defined in actix-web)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl fmt::Display for HttpAppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl ResponseError for HttpAppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_code = self.0.error_code();

        // Full detail stays in the logs; the body only gets the public message
        if status_code.is_server_error() {
            tracing::error!(error_code, error = ?self.0, "Request failed");
        } else if status_code == StatusCode::UNAUTHORIZED || status_code == StatusCode::FORBIDDEN {
            tracing::warn!(error_code, error_message = %self.0, "Auth error");
        }

        let mut response = HttpResponse::build(status_code);
        if let Some(retry_after) = self.0.retry_after_seconds() {
            response.insert_header(("Retry-After", retry_after.to_string()));
        }

        response.json(ErrorResponse {
            success: false,
            message: self.0.public_message(),
            error_code: error_code.to_string(),
            retry_after_seconds: self.0.retry_after_seconds(),
        })
    }
}

/// Turns body and query extraction failures into the shared error envelope.
pub fn payload_error(err: impl fmt::Display) -> actix_web::Error {
    HttpAppError(AppError::Validation(err.to_string())).into()
}
