//! Multi-currency payment reconciliation for billed cases.
//!
//! A case is billed in a base currency and paid through up to four entries,
//! some of which may be denominated in a local currency that needs a daily
//! exchange rate. The crate decides whether such a case is fully paid and
//! guards new submissions against overpayment.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::reconcile::{ReconciliationResult, reconcile, reconcile_record};
pub use application::validate::{SubmissionError, ValidationResult, validate_submission};
pub use domain::currency::{CurrencyClass, LocalCurrencyMethods};
pub use domain::money::ExchangeRate;
pub use domain::payment::{PaymentEntry, PaymentStatus};
pub use domain::record::{DenormalizedPaymentRecord, PaymentSlot};
