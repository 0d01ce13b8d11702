//! Money and number formatting for cards and tables

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Insert a comma every three digits of the integer part
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Formats money with 2 decimals and thousands separators
///
/// # Examples
///
/// ```
/// # use rust_decimal::Decimal;
/// # use frontend::shared::number_format::format_money;
/// assert_eq!(format_money(Decimal::new(123456789, 2)), "$1,234,567.89");
/// ```
pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.2}", rounded);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let grouped = group_thousands(integer_part);
    match grouped.strip_prefix('-') {
        Some(abs) => format!("-${}.{}", abs, decimal_part),
        None => format!("${}.{}", grouped, decimal_part),
    }
}

/// Formats an integer count with thousands separators
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Parse a price typed into a form ("1,299.99", "$15", "0.5")
pub fn parse_money(input: &str) -> Result<Decimal, String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    let value = Decimal::from_str(&cleaned).map_err(|_| format!("Invalid amount: '{}'", input))?;
    if value.is_sign_negative() {
        return Err("Amount cannot be negative".to_string());
    }
    Ok(value)
}

/// Parse a non-negative whole number typed into a form
pub fn parse_count(input: &str) -> Result<u32, String> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid number: '{}'", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(format_money(Decimal::new(123456789, 2)), "$1,234,567.89");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::new(-123456, 2)), "-$1,234.56");
        assert_eq!(format_money(Decimal::from(100)), "$100.00");
    }

    #[test]
    fn test_format_money_rounds_repeating_average() {
        let average = Decimal::from(70) / Decimal::from(3);
        assert_eq!(format_money(average), "$23.33");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("1,299.99"), Ok(Decimal::new(129999, 2)));
        assert_eq!(parse_money(" $15 "), Ok(Decimal::from(15)));
        assert!(parse_money("abc").is_err());
        assert!(parse_money("-3").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(" 12 "), Ok(12));
        assert!(parse_count("-1").is_err());
        assert!(parse_count("1.5").is_err());
    }
}
