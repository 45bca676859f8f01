use actix_web::{get, post, web};
use application::calendar;
use application::realtime::{
    dtos::{SampleQuery, SubmitSampleRequest},
    use_cases::{ListSamplesUseCase, SubmitSampleUseCase},
};
use sea_orm::DatabaseConnection;

use super::{response, HandlerResult};
use crate::extractors::AuthUser;

#[post("/samples")]
pub async fn submit_sample(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SubmitSampleRequest>,
) -> HandlerResult {
    let stored = SubmitSampleUseCase::execute(&db, user.user_id, body.into_inner(), calendar::today()).await?;
    Ok(response::ok("Realtime data saved", stored))
}

#[get("/samples")]
pub async fn list_samples(
    user: AuthUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<SampleQuery>,
) -> HandlerResult {
    let samples = ListSamplesUseCase::execute(&db, user.user_id, query.into_inner(), calendar::today()).await?;
    Ok(response::ok("Realtime data loaded", samples))
}
