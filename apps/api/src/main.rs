use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::Config;
use api::middleware::auth::AuthMiddleware;
use api::middleware::rate_limit::PerIpRateLimitMiddleware;
use api::routes;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    tracing::info!("Starting healthmate API server...");

    let db = infrastructure::database::init_database(&config.database_url, config.database_max_connections).await?;
    if config.run_migrations {
        infrastructure::database::run_migrations(&db).await?;
    }

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    let global_rate_limit = PerIpRateLimitMiddleware::new(config.rate_limit_per_minute);
    let auth_rate_limit = PerIpRateLimitMiddleware::new(config.auth_rate_limit_per_minute);

    let db_data = web::Data::new(db);
    let config_data = web::Data::new(config);

    tracing::info!("Server listening on {}", server_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let auth_rate_limit = auth_rate_limit.clone();

        App::new()
            .wrap(AuthMiddleware)
            .wrap(global_rate_limit.clone())
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .configure(move |cfg| routes::configure(cfg, auth_rate_limit))
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,api=debug,application=debug,actix_web=info".into());

    let is_json = std::env::var("LOG_FORMAT").unwrap_or_default() == "json";

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
