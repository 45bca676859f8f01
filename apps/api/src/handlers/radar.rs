use actix_web::{post, web};
use application::calendar;
use application::radar::{broadcast::BroadcastUseCase, dtos::BroadcastRequest};
use sea_orm::DatabaseConnection;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[post("/broadcast")]
pub async fn broadcast(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<BroadcastRequest>,
) -> HandlerResult {
    let outcome = BroadcastUseCase::execute(&db, user.user_id, &body.code, calendar::unix_now()).await?;
    let message = if outcome.matched {
        "Matched, family member added"
    } else {
        "Waiting for a match"
    };
    Ok(response::ok(message, outcome))
}
