use super::normalize::total_in_base_currency;
use crate::domain::currency::LocalCurrencyMethods;
use crate::domain::money::{ExchangeRate, round2};
use crate::domain::payment::PaymentEntry;
use miette::Diagnostic;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// Largest excess over the billed total that is still accepted: one cent.
pub const OVERPAYMENT_TOLERANCE: Decimal = dec!(0.01);

/// Why a payment submission was rejected.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Serialize)]
pub enum SubmissionError {
    #[error(
        "paid total ({}) exceeds billed total ({}) by {}",
        cents(.paid),
        cents(.billed),
        cents(.excess)
    )]
    #[diagnostic(
        code(payrecon::overpayment),
        help(
            "payments may exceed the billed total by at most 0.01; remove or correct a payment"
        )
    )]
    Overpayment {
        paid: Decimal,
        billed: Decimal,
        excess: Decimal,
    },
}

fn cents(value: &Decimal) -> String {
    format!("{:.2}", round2(*value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Unrounded paid total in base currency.
    pub total_paid_base: Decimal,
    pub error: Option<SubmissionError>,
}

impl ValidationResult {
    fn valid(total_paid_base: Decimal) -> Self {
        Self {
            is_valid: true,
            total_paid_base,
            error: None,
        }
    }

    /// Message to show the person submitting, when the submission is rejected.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Checks a new payment submission for gross overpayment.
///
/// Stricter than [`super::reconcile::reconcile`], which accepts any
/// overpayment as paid: here the paid total may exceed the billed total by at
/// most [`OVERPAYMENT_TOLERANCE`].
pub fn validate_submission(
    entries: &[PaymentEntry],
    billed_total: Decimal,
    rate: ExchangeRate,
    methods: &LocalCurrencyMethods,
) -> ValidationResult {
    let active: Vec<PaymentEntry> = entries.iter().filter(|e| !e.is_inert()).cloned().collect();
    if active.is_empty() {
        return ValidationResult::valid(Decimal::ZERO);
    }

    let total_paid_base = total_in_base_currency(&active, rate, methods);
    let difference = total_paid_base.saturating_sub(billed_total);
    if difference > OVERPAYMENT_TOLERANCE {
        return ValidationResult {
            is_valid: false,
            total_paid_base,
            error: Some(SubmissionError::Overpayment {
                paid: total_paid_base,
                billed: billed_total,
                excess: difference,
            }),
        };
    }

    ValidationResult::valid(total_paid_base)
}
