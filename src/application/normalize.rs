use crate::domain::currency::{CurrencyClass, LocalCurrencyMethods};
use crate::domain::money::ExchangeRate;
use crate::domain::payment::PaymentEntry;
use rust_decimal::Decimal;

/// Values a single entry in base currency. Unrounded.
///
/// Inert entries contribute zero. A local-currency entry also contributes zero
/// while no usable exchange rate exists, so the case stays incomplete instead
/// of being valued at a guess.
pub fn to_base_currency(
    entry: &PaymentEntry,
    rate: ExchangeRate,
    methods: &LocalCurrencyMethods,
) -> Decimal {
    let Some(amount) = entry.usable_amount() else {
        return Decimal::ZERO;
    };

    match methods.classify(entry.method()) {
        CurrencyClass::Base => amount,
        CurrencyClass::Local => match rate.usable() {
            Some(rate) => amount.checked_div(rate).unwrap_or_else(|| {
                tracing::warn!(%amount, %rate, "local-currency conversion overflowed");
                Decimal::ZERO
            }),
            None => {
                tracing::debug!(
                    method = entry.method(),
                    %amount,
                    "no usable exchange rate, local-currency entry not counted"
                );
                Decimal::ZERO
            }
        },
    }
}

/// Sums the base-currency value of every entry. Unrounded.
pub fn total_in_base_currency(
    entries: &[PaymentEntry],
    rate: ExchangeRate,
    methods: &LocalCurrencyMethods,
) -> Decimal {
    entries
        .iter()
        .map(|entry| to_base_currency(entry, rate, methods))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
