//! Option Index: declared option axes, normalized for case-insensitive lookup.

use crate::catalog::ProductOption;
use crate::diagnostics::DataQualityWarning;
use crate::normalize::OptionKey;
use std::collections::{HashMap, HashSet};

/// One declared axis after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedOption {
    /// Name as declared, for display.
    pub name: String,
    /// Normalized name.
    pub key: OptionKey,
    /// De-duplicated values, display order and spelling preserved.
    pub values: Vec<String>,
}

impl IndexedOption {
    /// The first declared value, used as the default choice.
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Whether `value` is one of the declared values (case-insensitive).
    pub fn has_value(&self, value: &str) -> bool {
        let key = OptionKey::new(value);
        self.values.iter().any(|v| OptionKey::new(v) == key)
    }
}

/// Case-insensitive index over an item's option axes.
///
/// Built once per catalog item and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct OptionIndex {
    options: Vec<IndexedOption>,
    positions: HashMap<OptionKey, usize>,
    warnings: Vec<DataQualityWarning>,
}

impl OptionIndex {
    /// Build the index. Never fails; empty input yields an empty index.
    pub fn build(options: &[ProductOption]) -> Self {
        let mut index = OptionIndex::default();

        for option in options {
            let key = OptionKey::new(&option.name);
            if key.is_blank() {
                index.warn(DataQualityWarning::BlankOptionName);
                continue;
            }
            if index.positions.contains_key(&key) {
                index.warn(DataQualityWarning::DuplicateOption {
                    option: option.name.clone(),
                });
                continue;
            }

            let mut seen = HashSet::new();
            let mut values = Vec::with_capacity(option.values.len());
            for value in &option.values {
                let value_key = OptionKey::new(value);
                if value_key.is_blank() {
                    index.warn(DataQualityWarning::BlankOptionValue {
                        option: option.name.clone(),
                    });
                } else if !seen.insert(value_key) {
                    index.warn(DataQualityWarning::DuplicateOptionValue {
                        option: option.name.clone(),
                        value: value.clone(),
                    });
                } else {
                    values.push(value.clone());
                }
            }

            index.positions.insert(key.clone(), index.options.len());
            index.options.push(IndexedOption {
                name: option.name.clone(),
                key,
                values,
            });
        }

        index
    }

    fn warn(&mut self, warning: DataQualityWarning) {
        warning.emit();
        self.warnings.push(warning);
    }

    /// Find an axis by name (case-insensitive exact match).
    pub fn find(&self, name: &str) -> Option<&IndexedOption> {
        self.position(name).map(|i| &self.options[i])
    }

    /// Declared position of an axis.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.position_of_key(&OptionKey::new(name))
    }

    pub(crate) fn position_of_key(&self, key: &OptionKey) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// Axes in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Problems found while building.
    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }
}
