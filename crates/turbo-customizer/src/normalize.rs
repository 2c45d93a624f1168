//! Case-insensitive comparison of option names and values.
//!
//! All matching in this crate goes through [`normalize`]. Display strings are
//! kept as given; only lookup keys are folded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fold a name or value for comparison: trim surrounding whitespace, then
/// lower-case.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A normalized lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
    /// Build a key from a display string.
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the raw string was blank.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OptionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Red "), "red");
        assert_eq!(normalize("XL"), "xl");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_option_key() {
        let key = OptionKey::new(" Size ");
        assert_eq!(key.as_str(), "size");
        assert_eq!(key, OptionKey::from("SIZE"));
        assert!(OptionKey::new("   ").is_blank());
    }
}
