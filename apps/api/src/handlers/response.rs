use actix_web::HttpResponse;
use serde::Serialize;

/// Success envelope. `data` is left out for message-only replies.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: message.to_string(),
        data: Some(data),
    })
}

pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse {
        success: true,
        message: message.to_string(),
        data: Some(data),
    })
}

pub fn ok_message(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> {
        success: true,
        message: message.to_string(),
        data: None,
    })
}
