use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use application::auth::dtos::Claims;
use application::AppError;
use futures::future::{ready, Ready};

use crate::handlers::error_handler::HttpAppError;

/// Caller identity taken from the bearer token `AuthMiddleware` verified.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i32,
}

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req.extensions().get::<Claims>().and_then(Claims::user_id);

        ready(match user_id {
            Some(user_id) => Ok(AuthUser { user_id }),
            None => Err(HttpAppError(AppError::Authentication("Missing or invalid access token".to_string())).into()),
        })
    }
}
