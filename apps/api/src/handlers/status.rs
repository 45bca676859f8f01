use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

#[get("/api/health-check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Service is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
