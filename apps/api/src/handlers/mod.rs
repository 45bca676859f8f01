pub mod auth;
pub mod error_handler;
pub mod family;
pub mod health;
pub mod points;
pub mod profile;
pub mod radar;
pub mod rankings;
pub mod realtime;
pub mod response;
pub mod status;

pub type HandlerResult = Result<actix_web::HttpResponse, error_handler::HttpAppError>;
