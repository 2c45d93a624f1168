//! Selection State: the shopper's current choice per option axis.

use crate::error::CustomizerError;
use crate::normalize::OptionKey;
use crate::option_index::OptionIndex;
use serde::Serialize;

/// Current choice on one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisChoice {
    /// Axis name as declared.
    pub name: String,
    #[serde(skip)]
    key: OptionKey,
    /// Chosen value, spelled as the caller gave it.
    pub value: Option<String>,
}

impl AxisChoice {
    /// The chosen value, if it is non-blank.
    pub fn chosen(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// At most one chosen value per declared axis.
///
/// The axis set is fixed at creation from an [`OptionIndex`]; only
/// [`set_value`](Self::set_value) and [`clear`](Self::clear) change choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    axes: Vec<AxisChoice>,
}

impl Selection {
    /// A selection with no axis chosen.
    pub fn empty(options: &OptionIndex) -> Self {
        Self {
            axes: options
                .iter()
                .map(|option| AxisChoice {
                    name: option.name.clone(),
                    key: option.key.clone(),
                    value: None,
                })
                .collect(),
        }
    }

    /// Each axis set to its first declared value; axes with no values stay
    /// unset.
    pub fn with_defaults(options: &OptionIndex) -> Self {
        Self {
            axes: options
                .iter()
                .map(|option| AxisChoice {
                    name: option.name.clone(),
                    key: option.key.clone(),
                    value: option.first_value().map(str::to_string),
                })
                .collect(),
        }
    }

    /// Choose a value on an axis, replacing any previous choice.
    ///
    /// Fails with [`CustomizerError::UnknownOption`] if the axis is not
    /// declared; the selection is then unchanged.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), CustomizerError> {
        let axis = self.axis_mut(name)?;
        axis.value = Some(value.into());
        Ok(())
    }

    /// Remove the choice on an axis.
    pub fn clear(&mut self, name: &str) -> Result<(), CustomizerError> {
        let axis = self.axis_mut(name)?;
        axis.value = None;
        Ok(())
    }

    fn axis_mut(&mut self, name: &str) -> Result<&mut AxisChoice, CustomizerError> {
        let key = OptionKey::new(name);
        self.axes
            .iter_mut()
            .find(|axis| axis.key == key)
            .ok_or_else(|| CustomizerError::UnknownOption(name.to_string()))
    }

    /// Current value on an axis (case-insensitive name lookup).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.value_for_key(&OptionKey::new(name))
    }

    pub(crate) fn value_for_key(&self, key: &OptionKey) -> Option<&str> {
        self.axes
            .iter()
            .find(|axis| &axis.key == key)
            .and_then(AxisChoice::chosen)
    }

    /// Axes in declared order.
    pub fn axes(&self) -> &[AxisChoice] {
        &self.axes
    }

    /// Whether every axis has a value.
    pub fn is_complete(&self) -> bool {
        self.axes.iter().all(|axis| axis.chosen().is_some())
    }

    /// Whether no axis has a value.
    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(|axis| axis.chosen().is_none())
    }
}
