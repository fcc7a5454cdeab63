use super::ports::AmountParser;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Minor-unit precision of every reported amount.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds to cents, half away from zero (`0.005` becomes `0.01`).
///
/// Every rounded figure the core reports goes through this function.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a caller-supplied float into a decimal amount.
///
/// `NaN`, infinities and values outside the decimal range come back as `None`,
/// which the core treats as an unused amount.
pub fn amount_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        tracing::warn!(value = ?value, "non-finite amount treated as empty");
        return None;
    }
    let amount = Decimal::from_f64(value);
    if amount.is_none() {
        tracing::warn!(value = ?value, "amount out of decimal range treated as empty");
    }
    amount
}

/// Units of local currency per one unit of base currency.
///
/// A rate that is absent, zero or negative is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExchangeRate(Option<Decimal>);

impl ExchangeRate {
    pub fn new(rate: Option<Decimal>) -> Self {
        Self(rate)
    }

    pub fn unavailable() -> Self {
        Self(None)
    }

    /// The rate, if it can be divided by.
    pub fn usable(&self) -> Option<Decimal> {
        self.0.filter(|rate| *rate > Decimal::ZERO)
    }

    pub fn is_available(&self) -> bool {
        self.usable().is_some()
    }

    /// Reads a rate typed as text. Empty input means no rate; text that does
    /// not parse is logged and also leaves the rate unavailable.
    pub fn parse<P: AmountParser>(text: Option<&str>, parser: &P) -> Self {
        let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
            return Self::unavailable();
        };
        let rate = parser.parse_amount(text);
        if rate.is_none() {
            tracing::warn!(rate = text, "unreadable exchange rate treated as unavailable");
        }
        Self(rate)
    }
}

impl From<Decimal> for ExchangeRate {
    fn from(rate: Decimal) -> Self {
        Self(Some(rate))
    }
}

impl From<Option<Decimal>> for ExchangeRate {
    fn from(rate: Option<Decimal>) -> Self {
        Self(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::locale_parser::LocaleAmountParser;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(dec!(0.005)), dec!(0.01));
        assert_eq!(round2(dec!(0.004)), dec!(0.00));
        assert_eq!(round2(dec!(-0.005)), dec!(-0.01));
        assert_eq!(round2(dec!(2.675)), dec!(2.68));
        assert_eq!(round2(dec!(10.125)), dec!(10.13));
    }

    #[test]
    fn test_amount_from_f64_rejects_non_finite() {
        assert_eq!(amount_from_f64(f64::NAN), None);
        assert_eq!(amount_from_f64(f64::INFINITY), None);
        assert_eq!(amount_from_f64(f64::NEG_INFINITY), None);
        assert_eq!(amount_from_f64(f64::MAX), None);
        assert_eq!(amount_from_f64(12.5), Some(dec!(12.5)));
    }

    #[test]
    fn test_exchange_rate_usability() {
        assert_eq!(ExchangeRate::from(dec!(50)).usable(), Some(dec!(50)));
        assert!(!ExchangeRate::from(dec!(0)).is_available());
        assert!(!ExchangeRate::from(dec!(-3)).is_available());
        assert!(!ExchangeRate::unavailable().is_available());
        assert!(!ExchangeRate::default().is_available());
    }

    #[test]
    fn test_parse_rate_text() {
        let parser = LocaleAmountParser::new();
        assert_eq!(ExchangeRate::parse(Some("36,5"), &parser).usable(), Some(dec!(36.5)));
        assert_eq!(ExchangeRate::parse(Some("  "), &parser), ExchangeRate::unavailable());
        assert_eq!(ExchangeRate::parse(None, &parser), ExchangeRate::unavailable());
        assert!(!ExchangeRate::parse(Some("n/a"), &parser).is_available());
    }
}
