//! Display formatting for dates and amounts.

use chrono::{Datelike, NaiveDate};

use crate::calendar::month_name;

/// Currency suffix the backend prices are expressed in
pub const CURRENCY: &str = "TMT";

/// e.g. "10 March 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// e.g. "10.03.2024"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Wire format for date query parameters, e.g. "2024-03-10"
pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// e.g. "1250.00 TMT"
pub fn format_amount(amount: f64) -> String {
    format!("{:.2} {}", amount, CURRENCY)
}

/// Parse the calendar day out of an ISO date or RFC 3339 timestamp.
///
/// The time-of-day and offset are ignored: "2024-03-10T23:30:00+05:00" is 10 March.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next()?;
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "5 March 2024");
        assert_eq!(format_short_date(date), "05.03.2024");
        assert_eq!(format_query_date(date), "2024-03-05");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1250.0), "1250.00 TMT");
        assert_eq!(format_amount(12.5), "12.50 TMT");
        assert_eq!(format_amount(0.126), "0.13 TMT");
    }

    #[test]
    fn test_parse_calendar_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 10);
        assert_eq!(parse_calendar_date("2024-03-10"), expected);
        assert_eq!(parse_calendar_date("2024-03-10T23:30:00+05:00"), expected);
        assert_eq!(parse_calendar_date("2024-03-10T00:00:00.000Z"), expected);
        assert_eq!(parse_calendar_date("invalid-date"), None);
        assert_eq!(parse_calendar_date(""), None);
    }
}
