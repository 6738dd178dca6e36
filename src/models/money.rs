//! Amount parsing and formatting
//!
//! Entered amounts are free-form text from the entry dialog; they must parse
//! as a finite, non-negative number. Formatting (two decimal places, thousands
//! separator) is applied at render time only and never mutates stored values.

use std::fmt;

/// Parse a user-entered amount.
///
/// Accepts plain decimal notation ("100", "12.5", "0.05"). Rejects anything
/// non-numeric, non-finite, or negative — expenses are expressed through the
/// record kind, not a sign.
pub fn parse_amount(s: &str) -> Result<f64, AmountParseError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let value: f64 = s
        .parse()
        .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::InvalidFormat(s.to_string()));
    }

    if value < 0.0 {
        return Err(AmountParseError::Negative(s.to_string()));
    }

    Ok(value)
}

/// Format a home-currency value with two decimal places and thousands
/// separators, e.g. `-1234.5` becomes `-1,234.50`.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());

    let (int_part, frac_part) = formatted
        .split_once('.')
        .expect("two-decimal format always contains a dot");

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}.{}", grouped, frac_part)
    } else {
        format!("{}.{}", grouped, frac_part)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is required"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            AmountParseError::Negative(s) => write!(f, "Amount must be non-negative: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert_eq!(parse_amount("100").unwrap(), 100.0);
        assert_eq!(parse_amount("12.5").unwrap(), 12.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
        assert_eq!(parse_amount("  0.05 ").unwrap(), 0.05);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_amount("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_amount("12.3.4"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert_eq!(parse_amount(""), Err(AmountParseError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountParseError::Empty));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            parse_amount("-5"),
            Err(AmountParseError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_amount("inf"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_amount("NaN"),
            Err(AmountParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(3200.0), "3,200.00");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(1000000.0), "1,000,000.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(50.0), "50.00");
    }
}
