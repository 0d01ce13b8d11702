/// Utilities for date formatting and form parsing
use chrono::NaiveDate;

/// Example: 2024-03-05 -> "March 5, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Value for an `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: '{}'", value))
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2024");
    }

    #[test]
    fn test_invalid_input_date() {
        assert!(parse_input_date("15.03.2024").is_err());
        assert!(parse_input_date("").is_err());
    }

    #[test]
    fn test_input_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(to_input_value(date), "2024-12-31");
        assert_eq!(parse_input_date(" 2024-12-31 "), Ok(date));
    }
}
