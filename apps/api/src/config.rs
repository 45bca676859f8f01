use std::fmt::Display;
use std::str::FromStr;

use application::auth::use_cases::AuthConfig;
use application::{AppError, AppResult};

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub jwt_expiration: i64,
    pub server_host: String,
    pub server_port: u16,
    pub rate_limit_per_minute: u32,
    pub auth_rate_limit_per_minute: u32,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration: env_or("JWT_EXPIRATION", 7 * 24 * 3600)?,
            server_host: env_or("SERVER_HOST", "0.0.0.0".to_string())?,
            server_port: env_or("SERVER_PORT", 8080)?,
            rate_limit_per_minute: env_or("RATE_LIMIT_PER_MINUTE", 100)?,
            auth_rate_limit_per_minute: env_or("AUTH_RATE_LIMIT_PER_MINUTE", 10)?,
            run_migrations: env_or("RUN_MIGRATIONS", true)?,
        })
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            jwt_expiration: self.jwt_expiration,
        }
    }
}

fn required(key: &str) -> AppResult<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Configuration(format!("{} must be set", key))),
    }
}

fn env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse().map_err(|e| {
            AppError::Configuration(format!("{} has an invalid value '{}': {}", key, raw, e))
        }),
        _ => Ok(default),
    }
}
