use actix_web::{delete, get, post, web};
use application::family::{
    dtos::AddFamilyMemberRequest,
    use_cases::{AddFamilyMemberUseCase, ListFamilyMembersUseCase, RemoveFamilyMemberUseCase},
};
use sea_orm::DatabaseConnection;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[post("")]
pub async fn add_member(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<AddFamilyMemberRequest>,
) -> HandlerResult {
    AddFamilyMemberUseCase::execute(&db, user.user_id, body.into_inner()).await?;
    Ok(response::ok_message("Family member added"))
}

#[get("")]
pub async fn list_members(user: AuthUser, db: web::Data<DatabaseConnection>) -> HandlerResult {
    let members = ListFamilyMembersUseCase::execute(&db, user.user_id).await?;
    Ok(response::ok("Family members loaded", members))
}

#[delete("/{member_id}")]
pub async fn remove_member(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> HandlerResult {
    let removed = RemoveFamilyMemberUseCase::execute(&db, user.user_id, path.into_inner()).await?;
    let message = if removed.removed == 0 {
        "No family relationship to remove"
    } else {
        "Family member removed"
    };
    Ok(response::ok(message, removed))
}
