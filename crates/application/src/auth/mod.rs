pub mod dtos;
pub mod use_cases;
mod validation;

pub use validation::{is_phone_number, validate_phone_number, PHONE_REGEX};
