//! Rules for the short-lived radar broadcast used to pair nearby users.
//! Expiry is data-level: a session is live while `now < expires_at`.

pub const RADAR_SESSION_TTL_SECONDS: i64 = 5 * 60;
pub const MAX_CODE_LENGTH: usize = 32;

pub fn expires_at(now: i64) -> i64 {
    now + RADAR_SESSION_TTL_SECONDS
}

/// Trimmed code, or `None` if it is blank or too long.
pub fn normalize_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.is_empty() || code.chars().count() > MAX_CODE_LENGTH {
        return None;
    }
    Some(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_expire_after_five_minutes() {
        assert_eq!(expires_at(1_700_000_000), 1_700_000_300);
    }

    #[test]
    fn codes_are_trimmed_and_bounded() {
        assert_eq!(normalize_code("  X7Q "), Some("X7Q".to_string()));
        assert_eq!(normalize_code("   "), None);
        assert_eq!(normalize_code(&"A".repeat(MAX_CODE_LENGTH)).map(|c| c.len()), Some(32));
        assert_eq!(normalize_code(&"A".repeat(MAX_CODE_LENGTH + 1)), None);
    }
}
