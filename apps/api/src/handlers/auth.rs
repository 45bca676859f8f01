use actix_web::{get, post, web};
use application::auth::{
    dtos::{LoginRequest, RegisterRequest, ResetPasswordRequest},
    use_cases::{
        CheckPhoneUseCase, CheckUsernameUseCase, LoginUseCase, RegisterUseCase, ResetPasswordUseCase,
    },
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use super::{response, HandlerResult};
use crate::config::Config;

#[derive(Deserialize)]
pub struct UsernameQuery {
    #[serde(default)]
    username: String,
}

#[derive(Deserialize)]
pub struct PhoneQuery {
    #[serde(default)]
    phone: String,
}

#[post("/register")]
pub async fn register(db: web::Data<DatabaseConnection>, body: web::Json<RegisterRequest>) -> HandlerResult {
    let registered = RegisterUseCase::execute(&db, body.into_inner()).await?;
    Ok(response::created("Registration successful", registered))
}

#[post("/login")]
pub async fn login(
    db: web::Data<DatabaseConnection>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> HandlerResult {
    let session = LoginUseCase::execute(&db, &config.auth_config(), body.into_inner()).await?;
    Ok(response::ok("Login successful", session))
}

#[post("/reset-password")]
pub async fn reset_password(
    db: web::Data<DatabaseConnection>,
    body: web::Json<ResetPasswordRequest>,
) -> HandlerResult {
    ResetPasswordUseCase::execute(&db, body.into_inner()).await?;
    Ok(response::ok_message("Password reset successful"))
}

#[get("/check-username")]
pub async fn check_username(db: web::Data<DatabaseConnection>, query: web::Query<UsernameQuery>) -> HandlerResult {
    let result = CheckUsernameUseCase::execute(&db, &query.username).await?;
    Ok(response::ok("Username checked", result))
}

#[get("/check-phone")]
pub async fn check_phone(db: web::Data<DatabaseConnection>, query: web::Query<PhoneQuery>) -> HandlerResult {
    let result = CheckPhoneUseCase::execute(&db, &query.phone).await?;
    Ok(response::ok("Phone number checked", result))
}
