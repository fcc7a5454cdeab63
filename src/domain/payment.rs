use super::money::amount_from_f64;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of payment against a case.
///
/// An entry with no method, or without a positive amount, is inert: it is
/// carried along but never counted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub method: Option<String>,
    pub amount: Option<Decimal>,
    /// Free-text transaction reference. Never used in calculation.
    pub reference: Option<String>,
}

impl PaymentEntry {
    pub fn new(method: impl Into<String>, amount: Decimal) -> Self {
        Self {
            method: Some(method.into()),
            amount: Some(amount),
            reference: None,
        }
    }

    /// Builds an entry from a float amount, dropping non-finite values.
    pub fn from_f64(method: impl Into<String>, amount: f64) -> Self {
        Self {
            method: Some(method.into()),
            amount: amount_from_f64(amount),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// The method label, if it is non-blank.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref().filter(|method| !method.trim().is_empty())
    }

    /// The amount, if this entry counts toward the paid total.
    pub fn usable_amount(&self) -> Option<Decimal> {
        self.method()?;
        self.amount.filter(|amount| *amount > Decimal::ZERO)
    }

    pub fn is_inert(&self) -> bool {
        self.usable_amount().is_none()
    }
}

/// Completion status of a billed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Incomplete,
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "Incomplete"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}
