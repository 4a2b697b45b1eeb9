/// Utilities for date and time formatting
///
/// The API sends ISO dates (`2025-01-15`) and RFC 3339 timestamps.
/// Anything unparseable is shown as received.
use chrono::{DateTime, NaiveDate};

/// Format an ISO date or timestamp as `Jan 15, 2025`
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format an RFC 3339 timestamp as `Jan 15, 2025 14:02`, in the
/// timestamp's own offset
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "Mar 15, 2024 14:02"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+05:45"),
            "Dec 31, 2024 23:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-01-05"), "Jan 5, 2025");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date(""), "");
    }
}
