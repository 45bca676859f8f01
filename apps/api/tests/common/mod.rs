#![allow(dead_code)]

use api::config::Config;
use application::auth::dtos::{LoginRequest, RegisterRequest};
use application::auth::use_cases::{LoginUseCase, RegisterUseCase};
use sea_orm::DatabaseConnection;

pub const JWT_SECRET: &str = "integration-test-secret";

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 900,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        rate_limit_per_minute: 1000,
        auth_rate_limit_per_minute: 1000,
        run_migrations: true,
    }
}

pub async fn test_db() -> DatabaseConnection {
    infrastructure::database::init_in_memory()
        .await
        .expect("in-memory database")
}

/// Registers a user and returns its id with a bearer header value.
pub async fn seed_user(db: &DatabaseConnection, phone: &str, username: &str) -> (i32, String) {
    let registered = RegisterUseCase::execute(
        db,
        RegisterRequest {
            phone: phone.to_string(),
            username: username.to_string(),
            password: "secret123".to_string(),
        },
    )
    .await
    .expect("register");

    let session = LoginUseCase::execute(
        db,
        &test_config().auth_config(),
        LoginRequest {
            login_field: username.to_string(),
            password: "secret123".to_string(),
        },
    )
    .await
    .expect("login");

    (registered.user_id, format!("Bearer {}", session.access_token))
}

/// Builds the full service around `$db`: token verification, a global
/// per-IP limit and the stricter auth-scope limit.
macro_rules! spawn_app {
    ($db:expr) => {
        spawn_app!($db, 1000, 1000)
    };
    ($db:expr, $global_limit:expr, $auth_limit:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(api::middleware::auth::AuthMiddleware)
                .wrap(api::middleware::rate_limit::PerIpRateLimitMiddleware::new($global_limit))
                .app_data(actix_web::web::Data::new($db.clone()))
                .app_data(actix_web::web::Data::new(common::test_config()))
                .configure(|cfg| {
                    api::routes::configure(
                        cfg,
                        api::middleware::rate_limit::PerIpRateLimitMiddleware::new($auth_limit),
                    )
                }),
        )
        .await
    };
}
