use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Mainland mobile number: 11 digits starting with 13-19
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

/// Custom validator for phone number
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone_number").with_message("Invalid phone number format".into()))
    }
}

/// Login accepts either a phone number or a username in the same field.
pub fn is_phone_number(login_field: &str) -> bool {
    PHONE_REGEX.is_match(login_field)
}
