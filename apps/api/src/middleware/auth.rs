use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::task::{Context, Poll};

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::warn;

use crate::config::Config;
use crate::handlers::error_handler::HttpAppError;
use application::auth::dtos::Claims;
use application::AppError;

/// Verifies a bearer token when one is presented and stores its claims in
/// the request extensions. Requests without a token pass through; routes
/// that need a caller reject them through the `AuthUser` extractor.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(token) = bearer_token(&req) {
            if let Some(config) = req.app_data::<web::Data<Config>>() {
                let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
                let mut validation = Validation::new(Algorithm::HS256);
                validation.validate_exp = true;

                match decode::<Claims>(&token, &decoding_key, &validation) {
                    Ok(token_data) if token_data.claims.token_type == "access" => {
                        req.extensions_mut().insert(token_data.claims);
                    }
                    Ok(_) | Err(_) => {
                        warn!(path = %req.path(), "Rejected bearer token");
                        return Box::pin(async move {
                            Err(HttpAppError(AppError::Authentication(
                                "Invalid or expired token".to_string(),
                            ))
                            .into())
                        });
                    }
                }
            }
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .map(|t| t.trim().to_string())
}
