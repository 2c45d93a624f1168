//! Customizer error types.

use thiserror::Error;

/// Errors that can occur while configuring a catalog item.
///
/// Resolution outcomes such as "no matching variant" are not errors; see
/// [`crate::resolver::Resolution`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustomizerError {
    /// The option axis is not declared on the catalog item.
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Product missing from a storefront payload.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for CustomizerError {
    fn from(e: serde_json::Error) -> Self {
        CustomizerError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CustomizerError {
    fn from(e: toml::de::Error) -> Self {
        CustomizerError::ConfigError(e.to_string())
    }
}
