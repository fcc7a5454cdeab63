use crate::domain::currency::LocalCurrencyMethods;
use crate::error::{ReconError, Result};
use serde::Deserialize;
use std::path::Path;

/// Lab-specific reconciliation settings, read from TOML.
///
/// ```toml
/// local_currency_methods = ["POS terminal", "mobile transfer", "bank transfer"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReconConfig {
    #[serde(default)]
    pub local_currency_methods: Vec<String>,
}

impl ReconConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ReconError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<()> {
        if let Some(position) = self
            .local_currency_methods
            .iter()
            .position(|label| label.trim().is_empty())
        {
            return Err(ReconError::Config(format!(
                "local_currency_methods[{position}] is blank"
            )));
        }
        Ok(())
    }

    /// Adds labels given outside the file, e.g. on the command line.
    pub fn extend_methods<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_currency_methods
            .extend(labels.into_iter().map(Into::into));
    }

    pub fn local_currency_methods(&self) -> LocalCurrencyMethods {
        LocalCurrencyMethods::new(&self.local_currency_methods)
    }
}
