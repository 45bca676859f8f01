pub mod auth;
pub mod calendar;
pub mod error;
pub mod family;
pub mod health;
pub mod points;
pub mod radar;
pub mod realtime;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AppError, AppResult};
