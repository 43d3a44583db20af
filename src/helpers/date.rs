//! Date helper functions

use chrono::{DateTime, TimeZone};

use crate::content::parse_date_string;

/// Format a date for display (like "Jan 15, 2024")
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Format a raw date string for display.
///
/// Unparseable input is returned verbatim rather than failing.
pub fn format_date_str(value: &str) -> String {
    match parse_date_string(value) {
        Some(date) => format_date(&date),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date), "Jan 15, 2024");
    }

    #[test]
    fn test_format_date_single_digit_day() {
        let date = Local.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date), "Jun 5, 2024");
    }

    #[test]
    fn test_format_date_str() {
        assert_eq!(format_date_str("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date_str("2024/03/02"), "Mar 2, 2024");
    }

    #[test]
    fn test_format_date_str_invalid_input_returned_verbatim() {
        assert_eq!(format_date_str("not a date"), "not a date");
        assert_eq!(format_date_str(""), "");
    }
}
