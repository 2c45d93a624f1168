//! Variant Index: variants keyed by their normalized option tuple.

use crate::catalog::Variant;
use crate::diagnostics::DataQualityWarning;
use crate::normalize::OptionKey;
use crate::option_index::OptionIndex;
use std::collections::HashMap;
use std::fmt;

/// Normalized option values of a variant, one slot per declared axis in
/// declared order. `None` marks an axis the variant leaves unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalKey(Vec<Option<OptionKey>>);

impl CanonicalKey {
    pub fn new(slots: Vec<Option<OptionKey>>) -> Self {
        Self(slots)
    }

    /// Build a fully specified key from display values in declared order.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            values
                .into_iter()
                .map(|v| Some(OptionKey::new(v.as_ref())))
                .collect(),
        )
    }

    pub fn slots(&self) -> &[Option<OptionKey>] {
        &self.0
    }

    /// Whether every axis has a value.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Some(key) => write!(f, "{}", key)?,
                None => f.write_str("*")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct KeyEntry {
    first: usize,
    count: usize,
}

/// Exact-match index from canonical key to variant position.
///
/// Positions refer to the variant slice the index was built from. Built once
/// and never mutated; rebuild when the catalog item changes.
#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    keys: Vec<CanonicalKey>,
    by_key: HashMap<CanonicalKey, KeyEntry>,
    has_duplicate_axes: bool,
    warnings: Vec<DataQualityWarning>,
}

impl VariantIndex {
    /// Build the index. Never fails: on a key collision the first-listed
    /// variant is kept and a warning recorded.
    pub fn build(variants: &[Variant], options: &OptionIndex) -> Self {
        let mut index = VariantIndex {
            keys: Vec::with_capacity(variants.len()),
            by_key: HashMap::with_capacity(variants.len()),
            ..Default::default()
        };

        for (position, variant) in variants.iter().enumerate() {
            let key = index.canonical_key(variant, options);

            match index.by_key.get_mut(&key) {
                Some(entry) => {
                    entry.count += 1;
                    let kept = variants[entry.first].id.clone();
                    index.warn(DataQualityWarning::DuplicateTuple {
                        key: key.to_string(),
                        kept,
                        shadowed: variant.id.clone(),
                    });
                }
                None => {
                    index.by_key.insert(
                        key.clone(),
                        KeyEntry {
                            first: position,
                            count: 1,
                        },
                    );
                }
            }
            index.keys.push(key);
        }

        index
    }

    fn canonical_key(&mut self, variant: &Variant, options: &OptionIndex) -> CanonicalKey {
        let mut slots: Vec<Option<OptionKey>> = vec![None; options.len()];

        for pair in &variant.selected_options {
            let Some(axis) = options.position(&pair.name) else {
                self.warn(DataQualityWarning::UndeclaredOption {
                    variant: variant.id.clone(),
                    option: pair.name.clone(),
                });
                continue;
            };
            if slots[axis].is_some() {
                self.has_duplicate_axes = true;
                self.warn(DataQualityWarning::DuplicateAxis {
                    variant: variant.id.clone(),
                    option: pair.name.clone(),
                });
                continue;
            }
            let value = OptionKey::new(&pair.value);
            if !value.is_blank() {
                slots[axis] = Some(value);
            }
        }

        CanonicalKey(slots)
    }

    fn warn(&mut self, warning: DataQualityWarning) {
        warning.emit();
        self.warnings.push(warning);
    }

    /// Position of the first-listed variant with exactly this key. O(1).
    pub fn position_of(&self, key: &CanonicalKey) -> Option<usize> {
        self.by_key.get(key).map(|entry| entry.first)
    }

    /// Variant with exactly this key, first-listed on collision.
    pub fn lookup_exact<'v>(&self, variants: &'v [Variant], key: &CanonicalKey) -> Option<&'v Variant> {
        self.position_of(key).and_then(|i| variants.get(i))
    }

    /// Number of variants sharing this key.
    pub fn count_of(&self, key: &CanonicalKey) -> usize {
        self.by_key.get(key).map_or(0, |entry| entry.count)
    }

    /// Canonical key of the variant at `position`.
    pub fn key_at(&self, position: usize) -> Option<&CanonicalKey> {
        self.keys.get(position)
    }

    /// Whether a complete selection can be answered by key equality alone.
    ///
    /// False when some variant names an axis twice, since the scan may then
    /// match on a pair the key ignored.
    pub fn supports_exact_lookup(&self) -> bool {
        !self.has_duplicate_axes
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Problems found while building.
    pub fn warnings(&self) -> &[DataQualityWarning] {
        &self.warnings
    }
}
