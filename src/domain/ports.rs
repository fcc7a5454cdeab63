use rust_decimal::Decimal;

/// Turns user-entered amount text into a number.
///
/// Implementations deal with locale decimal separators and return `None` for
/// anything that is not a number.
pub trait AmountParser: Send + Sync {
    fn parse_amount(&self, input: &str) -> Option<Decimal>;
}
