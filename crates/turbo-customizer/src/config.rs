//! Customizer configuration.
//!
//! Configuration only shapes the interactive session. It never changes how
//! selections are matched against variants.

use crate::error::CustomizerError;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line by default.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// How a new session's selection starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InitialSelection {
    /// Each axis on its first declared value.
    #[default]
    FirstValue,
    /// Nothing chosen.
    Empty,
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizerConfig {
    /// Starting selection.
    pub initial_selection: InitialSelection,
    /// Starting quantity.
    pub default_quantity: i64,
    /// Largest quantity a session accepts.
    pub max_quantity: i64,
}

impl Default for CustomizerConfig {
    fn default() -> Self {
        Self {
            initial_selection: InitialSelection::FirstValue,
            default_quantity: 1,
            max_quantity: MAX_QUANTITY_PER_ITEM,
        }
    }
}

impl CustomizerConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, CustomizerError> {
        let config: CustomizerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Start sessions with nothing chosen.
    pub fn with_empty_selection(mut self) -> Self {
        self.initial_selection = InitialSelection::Empty;
        self
    }

    /// Set the quantity limit.
    pub fn with_max_quantity(mut self, max_quantity: i64) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    pub fn validate(&self) -> Result<(), CustomizerError> {
        if self.default_quantity < 1 {
            return Err(CustomizerError::ConfigError(format!(
                "default_quantity must be at least 1, got {}",
                self.default_quantity
            )));
        }
        if self.default_quantity > self.max_quantity {
            return Err(CustomizerError::ConfigError(format!(
                "default_quantity {} exceeds max_quantity {}",
                self.default_quantity, self.max_quantity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CustomizerConfig::default();
        assert_eq!(config.initial_selection, InitialSelection::FirstValue);
        assert_eq!(config.default_quantity, 1);
        assert_eq!(config.max_quantity, 9999);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CustomizerConfig::from_toml_str("initial_selection = \"empty\"\n").unwrap();
        assert_eq!(config.initial_selection, InitialSelection::Empty);
        assert_eq!(config.default_quantity, 1);

        let config = CustomizerConfig::from_toml_str("").unwrap();
        assert_eq!(config, CustomizerConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        let err = CustomizerConfig::from_toml_str("default_quantity = 0").unwrap_err();
        assert!(matches!(err, CustomizerError::ConfigError(_)));

        let err = CustomizerConfig::from_toml_str("default_quantity = 5\nmax_quantity = 2").unwrap_err();
        assert!(matches!(err, CustomizerError::ConfigError(_)));

        let err = CustomizerConfig::from_toml_str("initial_selection = \"random\"").unwrap_err();
        assert!(matches!(err, CustomizerError::ConfigError(_)));
    }
}
