//! Sample timestamps arrive either as a bare `HH:MM` (on the record date) or
//! as a full `YYYY-MM-DD HH:MM`. Stored at minute resolution.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{AppError, AppResult};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Resolves the date the sample is filed under and its full timestamp.
///
/// A bare time is placed on `record_date`, or on `today` when that is absent.
/// A full timestamp keeps its own date and is filed under it unless the
/// caller named a record date explicitly.
pub fn resolve(
    raw: &str,
    record_date: Option<NaiveDate>,
    today: NaiveDate,
) -> AppResult<(NaiveDate, NaiveDateTime)> {
    let raw = raw.trim();

    match raw.split_once(' ') {
        Some((date_part, time_part)) => {
            let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map_err(|_| invalid(raw))?;
            let time = parse_time(time_part.trim()).ok_or_else(|| invalid(raw))?;
            Ok((record_date.unwrap_or(date), date.and_time(time)))
        }
        None => {
            let time = parse_time(raw).ok_or_else(|| invalid(raw))?;
            let date = record_date.unwrap_or(today);
            Ok((date, date.and_time(time)))
        }
    }
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let (hour, minute) = raw.split_once(':')?;
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !all_digits(hour) || !all_digits(minute) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn all_digits(raw: &str) -> bool {
    raw.bytes().all(|b| b.is_ascii_digit())
}

fn invalid(raw: &str) -> AppError {
    AppError::Validation(format!(
        "Invalid timestamp '{}', expected HH:MM or YYYY-MM-DD HH:MM",
        raw
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bare_time_lands_on_record_date() {
        let today = date(2026, 3, 10);

        let (filed, at) = resolve("08:05", None, today).unwrap();
        assert_eq!(filed, today);
        assert_eq!(at, today.and_hms_opt(8, 5, 0).unwrap());

        let explicit = date(2026, 3, 1);
        let (filed, at) = resolve("23:59", Some(explicit), today).unwrap();
        assert_eq!(filed, explicit);
        assert_eq!(at, explicit.and_hms_opt(23, 59, 0).unwrap());
    }

    #[test]
    fn full_timestamp_keeps_its_date() {
        let today = date(2026, 3, 10);

        let (filed, at) = resolve("2026-02-28 07:30", None, today).unwrap();
        assert_eq!(filed, date(2026, 2, 28));
        assert_eq!(at, date(2026, 2, 28).and_hms_opt(7, 30, 0).unwrap());
        assert_eq!(at.format(TIMESTAMP_FORMAT).to_string(), "2026-02-28 07:30");
    }

    #[test]
    fn out_of_range_times_are_rejected() {
        let today = date(2026, 3, 10);
        for raw in [
            "24:00", "12:60", "7", "ab:cd", "12:5", "", "2026-13-01 10:00", "2026-03-01 25:00",
            "+7:05", "007:05", "07:+5", " 7:05x", "2026-03-01 +9:00",
        ] {
            assert!(
                matches!(resolve(raw, None, today), Err(AppError::Validation(_))),
                "{raw} should be rejected"
            );
        }
        assert!(resolve("0:00", None, today).is_ok());
    }
}
