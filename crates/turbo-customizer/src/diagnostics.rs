//! Data-quality diagnostics raised while indexing a catalog item.
//!
//! Malformed upstream data never fails indexing. Each problem is logged via
//! `tracing` and kept on the index so callers can surface it.

use crate::ids::VariantId;
use serde::Serialize;
use std::fmt;

/// A non-fatal problem found in catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataQualityWarning {
    /// An option axis with a blank name was skipped.
    BlankOptionName,
    /// An option axis was declared twice; the first declaration wins.
    DuplicateOption { option: String },
    /// A blank value was dropped from an option axis.
    BlankOptionValue { option: String },
    /// A value appeared twice on one axis; the first spelling wins.
    DuplicateOptionValue { option: String, value: String },
    /// A variant names an option the item does not declare.
    UndeclaredOption { variant: VariantId, option: String },
    /// A variant names the same axis twice; the first pair keys the variant.
    DuplicateAxis { variant: VariantId, option: String },
    /// Two variants share a canonical key; the first-listed wins lookups.
    DuplicateTuple {
        key: String,
        kept: VariantId,
        shadowed: VariantId,
    },
}

impl DataQualityWarning {
    /// Log this warning.
    pub(crate) fn emit(&self) {
        tracing::warn!(warning = %self, "catalog data-quality issue");
    }
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankOptionName => write!(f, "option with blank name skipped"),
            Self::DuplicateOption { option } => {
                write!(f, "option '{}' declared more than once", option)
            }
            Self::BlankOptionValue { option } => {
                write!(f, "blank value dropped from option '{}'", option)
            }
            Self::DuplicateOptionValue { option, value } => {
                write!(f, "option '{}' lists value '{}' more than once", option, value)
            }
            Self::UndeclaredOption { variant, option } => {
                write!(f, "variant {} names undeclared option '{}'", variant, option)
            }
            Self::DuplicateAxis { variant, option } => {
                write!(f, "variant {} sets option '{}' more than once", variant, option)
            }
            Self::DuplicateTuple { key, kept, shadowed } => write!(
                f,
                "variants {} and {} share options [{}]; keeping {}",
                kept, shadowed, key, kept
            ),
        }
    }
}
