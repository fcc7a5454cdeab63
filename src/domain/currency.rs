use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which currency a payment method is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyClass {
    /// Same currency as the billed total; counted at face value.
    Base,
    /// Needs an exchange rate before it can be compared to the billed total.
    Local,
}

/// The configured set of payment-method labels that are paid in local currency.
///
/// Labels are stored trimmed and lowercased. Any method not in the set,
/// including an empty one, classifies as [`CurrencyClass::Base`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalCurrencyMethods {
    labels: BTreeSet<String>,
}

fn normalize(method: &str) -> String {
    method.trim().to_lowercase()
}

impl LocalCurrencyMethods {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels = labels
            .into_iter()
            .map(|label| normalize(label.as_ref()))
            .filter(|label| !label.is_empty())
            .collect();
        Self { labels }
    }

    pub fn classify(&self, method: Option<&str>) -> CurrencyClass {
        match method {
            Some(method) if self.labels.contains(&normalize(method)) => CurrencyClass::Local,
            _ => CurrencyClass::Base,
        }
    }

    pub fn is_local_currency_method(&self, method: Option<&str>) -> bool {
        self.classify(method) == CurrencyClass::Local
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for LocalCurrencyMethods {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
