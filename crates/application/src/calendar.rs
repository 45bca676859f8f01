//! Date policy applied at the request boundary. Use cases always receive an
//! explicit date; "today" is decided here and nowhere else.

use chrono::{DateTime, Days, FixedOffset, Local, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The requested date, or today when the caller left it out.
pub fn resolve_date(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(today)
}

pub fn now() -> DateTime<FixedOffset> {
    Utc::now().into()
}

/// Wall clock in unix seconds, the unit radar expiry is compared in.
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

/// Inclusive window of `days` calendar days ending at `end`.
/// Windows shorter than one day collapse to `end` itself.
pub fn window_ending(end: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let span = u64::from(days.max(1) - 1);
    let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_date_defaults_to_today() {
        let explicit = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(resolve_date(Some(explicit)), explicit);
        assert_eq!(resolve_date(None), today());
    }

    #[test]
    fn window_is_inclusive() {
        let end = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let (start, last) = window_ending(end, 7);
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 2, 23).unwrap());
        assert_eq!(last, end);

        assert_eq!(window_ending(end, 1), (end, end));
        assert_eq!(window_ending(end, 0), (end, end));
    }
}
