//! Interactive customization session for one shopper and one catalog item.

use crate::config::{CustomizerConfig, InitialSelection};
use crate::engine::VariantEngine;
use crate::error::CustomizerError;
use crate::ids::VariantId;
use crate::resolver::Resolution;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Request to add the resolved variant to a cart. Cart mutation happens
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineRequest {
    pub variant_id: VariantId,
    pub quantity: i64,
}

/// Selection, quantity, and the shared engine they resolve against.
///
/// The session is the single writer of its selection; resolving borrows it
/// immutably, so mutation and resolution cannot interleave.
#[derive(Debug, Clone)]
pub struct CustomizationSession {
    engine: Arc<VariantEngine>,
    selection: Selection,
    quantity: i64,
    max_quantity: i64,
}

impl CustomizationSession {
    /// Start a session. Fails with [`CustomizerError::ConfigError`] if the
    /// config does not validate.
    pub fn new(
        engine: Arc<VariantEngine>,
        config: &CustomizerConfig,
    ) -> Result<Self, CustomizerError> {
        config.validate()?;
        let selection = match config.initial_selection {
            InitialSelection::FirstValue => engine.default_selection(),
            InitialSelection::Empty => engine.empty_selection(),
        };
        Ok(Self {
            engine,
            selection,
            quantity: config.default_quantity,
            max_quantity: config.max_quantity,
        })
    }

    pub fn engine(&self) -> &VariantEngine {
        &self.engine
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Choose a value on an axis.
    pub fn select(&mut self, name: &str, value: impl Into<String>) -> Result<(), CustomizerError> {
        self.selection.set_value(name, value)
    }

    /// Remove the choice on an axis.
    pub fn clear(&mut self, name: &str) -> Result<(), CustomizerError> {
        self.selection.clear(name)
    }

    /// Set the quantity. Out-of-range values are rejected and the current
    /// quantity kept.
    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), CustomizerError> {
        if quantity < 1 {
            return Err(CustomizerError::InvalidQuantity(quantity));
        }
        if quantity > self.max_quantity {
            return Err(CustomizerError::QuantityExceedsLimit(quantity, self.max_quantity));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// Resolve the current selection.
    pub fn resolution(&self) -> Resolution<'_> {
        self.engine.resolve(&self.selection)
    }

    /// Whether the purchase action should be enabled.
    pub fn can_add_to_cart(&self) -> bool {
        self.resolution().is_purchasable()
    }

    /// The cart line to add, when the selection resolves to a purchasable
    /// variant.
    pub fn cart_line(&self) -> Option<CartLineRequest> {
        let resolution = self.resolution();
        if !resolution.is_purchasable() {
            return None;
        }
        resolution.variant().map(|variant| CartLineRequest {
            variant_id: variant.id.clone(),
            quantity: self.quantity,
        })
    }

    /// Snapshot of the current state for display.
    pub fn summary(&self) -> SelectionSummary {
        let resolution = self.resolution();
        SelectionSummary {
            choices: self
                .selection
                .axes()
                .iter()
                .map(|axis| AxisSummary {
                    name: axis.name.clone(),
                    value: axis.chosen().map(str::to_string),
                })
                .collect(),
            quantity: self.quantity,
            matching: resolution.variant().map(|variant| MatchingVariant {
                id: variant.id.clone(),
                title: variant.display_title(),
                available_for_sale: variant.available_for_sale,
            }),
            ambiguous: resolution.is_ambiguous(),
        }
    }
}

/// One axis in a [`SelectionSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisSummary {
    pub name: String,
    pub value: Option<String>,
}

/// The variant a summary resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchingVariant {
    pub id: VariantId,
    pub title: String,
    pub available_for_sale: bool,
}

/// Human-readable view of a session.
///
/// ```text
/// Selected: Red / No size – Qty: 2
/// Matching variant: Red / S (v1)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummary {
    pub choices: Vec<AxisSummary>,
    pub quantity: i64,
    pub matching: Option<MatchingVariant>,
    pub ambiguous: bool,
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let choices: Vec<String> = self
            .choices
            .iter()
            .map(|axis| match &axis.value {
                Some(value) => value.clone(),
                None => format!("No {}", axis.name.to_lowercase()),
            })
            .collect();
        let choices = if choices.is_empty() {
            "Default".to_string()
        } else {
            choices.join(" / ")
        };
        writeln!(f, "Selected: {} – Qty: {}", choices, self.quantity)?;

        match &self.matching {
            Some(variant) => write!(f, "Matching variant: {} ({})", variant.title, variant.id),
            None => write!(f, "Matching variant: None found (check options)"),
        }
    }
}
