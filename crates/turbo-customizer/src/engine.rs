//! Variant engine: a catalog item with its indexes, built once.

use crate::catalog::{CatalogItem, Variant};
use crate::diagnostics::DataQualityWarning;
use crate::option_index::OptionIndex;
use crate::resolver::{self, Resolution};
use crate::selection::Selection;
use crate::variant_index::{CanonicalKey, VariantIndex};

/// Read-only resolution state for one catalog item.
///
/// Never mutated after construction, so it can be shared behind an `Arc`
/// across any number of sessions. When the item changes, build a new engine.
#[derive(Debug, Clone)]
pub struct VariantEngine {
    item: CatalogItem,
    options: OptionIndex,
    variants: VariantIndex,
}

impl VariantEngine {
    /// Index a catalog item.
    pub fn new(item: CatalogItem) -> Self {
        let options = OptionIndex::build(&item.options);
        let variants = VariantIndex::build(&item.variants, &options);

        tracing::debug!(
            product = %item.id,
            options = options.len(),
            variants = variants.len(),
            warnings = options.warnings().len() + variants.warnings().len(),
            "indexed catalog item"
        );

        Self {
            item,
            options,
            variants,
        }
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    pub fn options(&self) -> &OptionIndex {
        &self.options
    }

    pub fn variant_index(&self) -> &VariantIndex {
        &self.variants
    }

    /// Variants in catalog order.
    pub fn variants(&self) -> &[Variant] {
        &self.item.variants
    }

    /// All data-quality warnings from both indexes.
    pub fn warnings(&self) -> impl Iterator<Item = &DataQualityWarning> {
        self.options.warnings().iter().chain(self.variants.warnings())
    }

    /// A selection with nothing chosen.
    pub fn empty_selection(&self) -> Selection {
        Selection::empty(&self.options)
    }

    /// A selection with each axis on its first value.
    pub fn default_selection(&self) -> Selection {
        Selection::with_defaults(&self.options)
    }

    /// Resolve a selection made against this engine's options.
    pub fn resolve(&self, selection: &Selection) -> Resolution<'_> {
        resolver::resolve(selection, &self.options, &self.variants, &self.item.variants)
    }

    /// Variant with exactly this canonical key.
    pub fn lookup_exact(&self, key: &CanonicalKey) -> Option<&Variant> {
        self.variants.lookup_exact(&self.item.variants, key)
    }

    /// Canonical key of a complete selection.
    pub fn key_for(&self, selection: &Selection) -> Option<CanonicalKey> {
        let requirements = resolver::requirements(selection, &self.options);
        if requirements.len() != self.options.len() {
            return None;
        }
        Some(CanonicalKey::new(
            requirements.into_iter().map(|r| Some(r.value)).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn item() -> CatalogItem {
        CatalogItem::new("prod-1", "Heavy Tee")
            .with_option("Color", ["Red", "Blue"])
            .with_option("Size", ["S", "M"])
            .with_variant(Variant::new("v1", "Red / S").with_option("Color", "Red").with_option("Size", "S"))
            .with_variant(Variant::new("v2", "Blue / M").with_option("Color", "Blue").with_option("Size", "M"))
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VariantEngine>();

        let engine = Arc::new(VariantEngine::new(item()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    let selection = engine.default_selection();
                    engine.resolve(&selection).variant().map(|v| v.id.to_string())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().as_deref(), Some("v1"));
        }
    }

    #[test]
    fn test_key_for_complete_selection_only() {
        let engine = VariantEngine::new(item());
        let mut selection = engine.default_selection();

        let key = engine.key_for(&selection).unwrap();
        assert_eq!(engine.lookup_exact(&key).map(|v| v.id.as_str()), Some("v1"));

        selection.clear("Size").unwrap();
        assert!(engine.key_for(&selection).is_none());
    }

    #[test]
    fn test_warnings_are_collected() {
        let engine = VariantEngine::new(
            item()
                .with_option("color", ["Green"])
                .with_variant(Variant::new("v3", "dup").with_option("Color", "Red").with_option("Size", "S")),
        );
        assert_eq!(engine.warnings().count(), 2);
    }
}
