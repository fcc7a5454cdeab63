use super::normalize::total_in_base_currency;
use crate::domain::currency::LocalCurrencyMethods;
use crate::domain::money::{ExchangeRate, round2};
use crate::domain::payment::{PaymentEntry, PaymentStatus};
use crate::domain::record::DenormalizedPaymentRecord;
use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of comparing what was paid against what was billed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReconciliationResult {
    /// `None` while nothing has been billed yet.
    pub status: Option<PaymentStatus>,
    pub is_complete: bool,
    /// Paid total in base currency, rounded to cents.
    pub paid: Decimal,
    /// Never negative; exactly zero when complete.
    pub missing_amount: Decimal,
}

impl ReconciliationResult {
    fn unset() -> Self {
        Self {
            status: None,
            is_complete: false,
            paid: Decimal::ZERO,
            missing_amount: Decimal::ZERO,
        }
    }

    fn paid(paid: Decimal) -> Self {
        Self {
            status: Some(PaymentStatus::Paid),
            is_complete: true,
            paid,
            missing_amount: Decimal::ZERO,
        }
    }
}

/// Decides whether a billed total has been covered by `entries`.
///
/// A billed total of zero means nothing has been billed yet and yields no
/// status at all. Otherwise the paid total is rounded to cents before the
/// comparison, and a shortfall that rounds to zero still counts as paid.
pub fn reconcile(
    entries: &[PaymentEntry],
    billed_total: Decimal,
    rate: ExchangeRate,
    methods: &LocalCurrencyMethods,
) -> ReconciliationResult {
    let billed = round2(billed_total);
    if billed <= Decimal::ZERO {
        return ReconciliationResult::unset();
    }

    let paid = round2(total_in_base_currency(entries, rate, methods));
    if paid >= billed {
        return ReconciliationResult::paid(paid);
    }

    let missing_amount = round2(billed - paid);
    if missing_amount.is_zero() {
        return ReconciliationResult::paid(paid);
    }

    ReconciliationResult {
        status: Some(PaymentStatus::Incomplete),
        is_complete: false,
        paid,
        missing_amount,
    }
}

/// Reconciles a persisted case record.
///
/// Unlike [`reconcile`], a record whose billed total is zero is reported as
/// paid: a case that costs nothing needs no payment.
pub fn reconcile_record(
    record: &DenormalizedPaymentRecord,
    methods: &LocalCurrencyMethods,
) -> ReconciliationResult {
    if round2(record.billed_total).is_zero() {
        return ReconciliationResult::paid(Decimal::ZERO);
    }
    reconcile(&record.entries(), record.billed_total, record.exchange_rate, methods)
}
