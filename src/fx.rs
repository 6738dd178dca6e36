//! Currency conversion
//!
//! Converts an entered amount into the home currency at the session's
//! user-adjustable rate. Conversion happens once, at record entry time;
//! later rate changes never back-apply to stored records.

use crate::models::Currency;

/// Lowest accepted conversion rate
pub const MIN_RATE: f64 = 1.0;

/// Highest accepted conversion rate
pub const MAX_RATE: f64 = 100.0;

/// Default foreign-to-home rate (USD to TWD in the original deployment)
pub const DEFAULT_RATE: f64 = 32.0;

/// Increment applied by the rate adjustment keys
pub const RATE_STEP: f64 = 0.1;

/// Convert an entered amount into the home currency.
///
/// Home amounts pass through unchanged; foreign amounts are multiplied by
/// `rate`. No rounding is applied here — formatting to two decimal places is
/// purely a display concern.
pub fn convert(amount: f64, currency: Currency, rate: f64) -> f64 {
    match currency {
        Currency::Home => amount,
        Currency::Foreign => amount * rate,
    }
}

/// Clamp a rate into the accepted `[MIN_RATE, MAX_RATE]` range.
pub fn clamp_rate(rate: f64) -> f64 {
    rate.clamp(MIN_RATE, MAX_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_currency_is_identity() {
        for amount in [0.0, 0.01, 100.0, 98765.43] {
            assert_eq!(convert(amount, Currency::Home, 32.0), amount);
            assert_eq!(convert(amount, Currency::Home, 1.0), amount);
        }
    }

    #[test]
    fn test_foreign_currency_multiplies_by_rate() {
        let converted = convert(100.0, Currency::Foreign, 32.0);
        assert!((converted - 3200.0).abs() < 1e-9);

        let converted = convert(12.34, Currency::Foreign, 30.5);
        assert!((converted - 12.34 * 30.5).abs() / (12.34 * 30.5) < 1e-9);
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        assert_eq!(convert(0.0, Currency::Foreign, 77.7), 0.0);
    }

    #[test]
    fn test_clamp_rate_bounds() {
        assert_eq!(clamp_rate(0.5), MIN_RATE);
        assert_eq!(clamp_rate(250.0), MAX_RATE);
        assert_eq!(clamp_rate(32.0), 32.0);
        assert_eq!(clamp_rate(MIN_RATE), MIN_RATE);
        assert_eq!(clamp_rate(MAX_RATE), MAX_RATE);
    }
}
