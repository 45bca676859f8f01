use actix_web::{get, put, web};
use application::auth::{
    dtos::UpdateProfileRequest,
    use_cases::{GetProfileUseCase, UpdateProfileUseCase},
};
use sea_orm::DatabaseConnection;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[get("")]
pub async fn get_profile(user: AuthUser, db: web::Data<DatabaseConnection>) -> HandlerResult {
    let profile = GetProfileUseCase::execute(&db, user.user_id).await?;
    Ok(response::ok("Profile loaded", profile))
}

#[put("")]
pub async fn update_profile(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpdateProfileRequest>,
) -> HandlerResult {
    let profile = UpdateProfileUseCase::execute(&db, user.user_id, body.into_inner()).await?;
    Ok(response::ok("Profile updated", profile))
}
