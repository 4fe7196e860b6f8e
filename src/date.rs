//! Flexible date-string parsing
//!
//! User-supplied dates may be a bare day (`"15"`), a month-day pair
//! (`"3-15"`) or a full year-month-day (`"2024-3-15"`). Partial inputs are
//! completed from today's calendar before parsing.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
    #[error("unrecognized date: {0}")]
    Unparseable(String),
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a loosely-formatted date string into a calendar date.
pub fn parse_flexible(input: &str) -> Result<NaiveDate, DateError> {
    parse_flexible_at(input, Local::now().date_naive())
}

/// Normalizes a loosely-formatted date string into the unpadded
/// `Y-M-D` form the Wunderlist API accepts.
///
/// Display code renders dates zero-padded; the API form deliberately
/// stays unpadded. The two must not be unified.
pub fn normalize(input: &str) -> Result<String, DateError> {
    Ok(api_date_string(parse_flexible(input)?))
}

/// Renders a date in the unpadded form the remote API accepts.
pub fn api_date_string(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

fn parse_flexible_at(input: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let separators = input.chars().filter(|c| !c.is_ascii_digit()).count();
    let candidate = match separators {
        // Bare day number: complete with the current year and month.
        0 => format!("{}-{}-{}", today.year(), today.month(), input),
        // Month and day: complete with the current year.
        1 => format!("{}-{}", today.year(), input),
        // Full year-month-day, taken as given.
        _ => input.to_string(),
    };

    NaiveDate::parse_from_str(&candidate, DATE_FORMAT)
        .map_err(|_| DateError::Unparseable(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bare_day_completed_from_today() {
        let today = day(2024, 6, 1);
        assert_eq!(parse_flexible_at("15", today).unwrap(), day(2024, 6, 15));
    }

    #[test]
    fn test_month_day_completed_from_today() {
        let today = day(2024, 6, 1);
        assert_eq!(parse_flexible_at("3-15", today).unwrap(), day(2024, 3, 15));
    }

    #[test]
    fn test_full_date_taken_as_given() {
        let today = day(2024, 6, 1);
        assert_eq!(
            parse_flexible_at("2023-3-15", today).unwrap(),
            day(2023, 3, 15)
        );
    }

    #[test]
    fn test_zero_padded_input_accepted() {
        let today = day(2024, 6, 1);
        assert_eq!(
            parse_flexible_at("2024-03-05", today).unwrap(),
            day(2024, 3, 5)
        );
    }

    #[test]
    fn test_non_dash_separator_rejected() {
        let today = day(2024, 6, 1);
        assert!(parse_flexible_at("3/15", today).is_err());
        assert!(parse_flexible_at("2024/3/15", today).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let today = day(2024, 6, 1);
        assert!(parse_flexible_at("13-45", today).is_err());
        assert!(parse_flexible_at("32", today).is_err());
        assert!(parse_flexible_at("2024-2-30", today).is_err());
    }

    #[test]
    fn test_empty_and_garbage_rejected() {
        let today = day(2024, 6, 1);
        assert!(parse_flexible_at("", today).is_err());
        assert!(parse_flexible_at("soon", today).is_err());
        assert!(parse_flexible_at("1-2-3-4", today).is_err());
    }

    #[test]
    fn test_api_string_is_unpadded() {
        assert_eq!(api_date_string(day(2024, 3, 5)), "2024-3-5");
        assert_eq!(api_date_string(day(2024, 12, 25)), "2024-12-25");
    }

    #[test]
    fn test_normalize_round_trip() {
        // Re-normalizing the unpadded form yields the same date.
        let today = day(2024, 6, 1);
        let first = parse_flexible_at("2024-03-05", today).unwrap();
        let rendered = api_date_string(first);
        assert_eq!(rendered, "2024-3-5");
        assert_eq!(parse_flexible_at(&rendered, today).unwrap(), first);
    }
}
