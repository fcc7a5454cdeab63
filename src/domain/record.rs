use super::money::ExchangeRate;
use super::payment::PaymentEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of payment slots a persisted case record carries.
pub const SLOT_COUNT: usize = 4;

/// One `(method_i, amount_i, reference_i)` triple of a persisted record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentSlot {
    pub method: Option<String>,
    pub amount: Option<Decimal>,
    pub reference: Option<String>,
}

impl PaymentSlot {
    pub fn new(method: impl Into<String>, amount: Decimal) -> Self {
        Self {
            method: Some(method.into()),
            amount: Some(amount),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    fn to_entry(&self) -> Option<PaymentEntry> {
        let method = self.method.as_deref().filter(|m| !m.trim().is_empty())?;
        let amount = self.amount.filter(|a| *a > Decimal::ZERO)?;
        Some(PaymentEntry {
            method: Some(method.to_string()),
            amount: Some(amount),
            reference: Some(self.reference.clone().unwrap_or_default()),
        })
    }
}

/// The persisted, fixed-arity shape of a billed case's payments.
///
/// Carries the billed total and the exchange rate captured at billing time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DenormalizedPaymentRecord {
    pub case_id: String,
    pub billed_total: Decimal,
    pub exchange_rate: ExchangeRate,
    pub slots: [PaymentSlot; SLOT_COUNT],
}

impl DenormalizedPaymentRecord {
    pub fn new(
        case_id: impl Into<String>,
        billed_total: Decimal,
        exchange_rate: ExchangeRate,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            billed_total,
            exchange_rate,
            slots: Default::default(),
        }
    }

    /// Fills slot `number` (1-based). Numbers outside `1..=4` are ignored.
    pub fn with_slot(mut self, number: usize, slot: PaymentSlot) -> Self {
        if let Some(target) = number.checked_sub(1).and_then(|i| self.slots.get_mut(i)) {
            *target = slot;
        }
        self
    }

    /// Projects the populated slots into payment entries, in slot order.
    ///
    /// Slots missing a method or a positive amount are skipped. References are
    /// carried through, empty when absent.
    pub fn entries(&self) -> Vec<PaymentEntry> {
        self.slots.iter().filter_map(PaymentSlot::to_entry).collect()
    }
}
