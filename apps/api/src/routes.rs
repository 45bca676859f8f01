use actix_web::web;

use crate::handlers::error_handler::payload_error;
use crate::handlers::{auth, family, health, points, profile, radar, rankings, realtime, status};
use crate::middleware::rate_limit::PerIpRateLimitMiddleware;

/// Registers every route. `auth_rate_limit` guards the credential endpoints
/// on top of whatever global limit the app is wrapped in.
pub fn configure(cfg: &mut web::ServiceConfig, auth_rate_limit: PerIpRateLimitMiddleware) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| payload_error(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _| payload_error(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _| payload_error(err)))
        .service(status::health_check)
        .service(
            web::scope("/api/v1/auth")
                .wrap(auth_rate_limit)
                .service(auth::register)
                .service(auth::login)
                .service(auth::reset_password)
                .service(auth::check_username)
                .service(auth::check_phone),
        )
        .service(
            web::scope("/api/v1/profile")
                .service(profile::get_profile)
                .service(profile::update_profile),
        )
        .service(
            web::scope("/api/v1/health")
                .service(health::submit_record)
                .service(health::list_records)
                .service(health::today_overview)
                .service(health::weekly_trend),
        )
        .service(
            web::scope("/api/v1/realtime")
                .service(realtime::submit_sample)
                .service(realtime::list_samples),
        )
        .service(
            web::scope("/api/v1/points")
                .service(points::record_steps)
                .service(points::add_points)
                .service(points::balance)
                .service(points::history),
        )
        .service(
            web::scope("/api/v1/rankings")
                .service(rankings::steps_ranking)
                .service(rankings::points_ranking),
        )
        .service(
            web::scope("/api/v1/family")
                .service(family::add_member)
                .service(family::list_members)
                .service(family::remove_member),
        )
        .service(web::scope("/api/v1/radar").service(radar::broadcast));
}
