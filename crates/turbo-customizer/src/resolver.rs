//! Resolver: map a (possibly partial) selection to a single variant.
//!
//! A variant satisfies a selection when, for every axis the selection has a
//! value on, the variant carries a pair whose name and value both match
//! case-insensitively. All requirements must hold at once.
//!
//! Tie-break: when several variants satisfy, the first in catalog order is
//! returned as [`Resolution::AmbiguousMatch`]. This decides which variant a
//! shopper actually adds to the cart, so it is stable across calls.

use crate::catalog::Variant;
use crate::normalize::OptionKey;
use crate::option_index::OptionIndex;
use crate::selection::Selection;
use crate::variant_index::{CanonicalKey, VariantIndex};
use serde::Serialize;

/// Outcome of resolving a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "variant", rename_all = "snake_case")]
pub enum Resolution<'a> {
    /// Exactly one variant satisfies the selection.
    Matched(&'a Variant),
    /// Several variants satisfy; this is the first in catalog order.
    AmbiguousMatch(&'a Variant),
    /// No variant satisfies the selection.
    NoMatch,
}

impl<'a> Resolution<'a> {
    /// The resolved variant, if any.
    pub fn variant(&self) -> Option<&'a Variant> {
        match self {
            Resolution::Matched(v) | Resolution::AmbiguousMatch(v) => Some(v),
            Resolution::NoMatch => None,
        }
    }

    /// Whether a variant was resolved and it is available for sale.
    pub fn is_purchasable(&self) -> bool {
        self.variant().is_some_and(|v| v.available_for_sale)
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Resolution::AmbiguousMatch(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Matched(_) => "matched",
            Resolution::AmbiguousMatch(_) => "ambiguous_match",
            Resolution::NoMatch => "no_match",
        }
    }
}

/// One `(axis, value)` pair a variant must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: OptionKey,
    pub value: OptionKey,
}

/// Requirements from every declared axis the selection has a value on, in
/// declared order.
pub fn requirements(selection: &Selection, options: &OptionIndex) -> Vec<Requirement> {
    options
        .iter()
        .filter_map(|option| {
            selection.value_for_key(&option.key).map(|value| Requirement {
                name: option.key.clone(),
                value: OptionKey::new(value),
            })
        })
        .collect()
}

/// Whether `variant` carries every required pair.
pub fn satisfies(variant: &Variant, requirements: &[Requirement]) -> bool {
    requirements.iter().all(|req| {
        variant
            .selected_options
            .iter()
            .any(|opt| OptionKey::new(&opt.name) == req.name && OptionKey::new(&opt.value) == req.value)
    })
}

/// Resolve `selection` against `variants`.
///
/// `variant_index` must have been built from `variants` and `options`.
/// Complete selections are answered through the exact-key index in O(1);
/// partial ones scan in O(variants × selected axes).
pub fn resolve<'v>(
    selection: &Selection,
    options: &OptionIndex,
    variant_index: &VariantIndex,
    variants: &'v [Variant],
) -> Resolution<'v> {
    let requirements = requirements(selection, options);

    let exact = requirements.len() == options.len()
        && variant_index.supports_exact_lookup()
        && variant_index.len() == variants.len();

    let resolution = if exact {
        let key = CanonicalKey::new(requirements.iter().map(|r| Some(r.value.clone())).collect());
        match variant_index.lookup_exact(variants, &key) {
            Some(variant) if variant_index.count_of(&key) > 1 => Resolution::AmbiguousMatch(variant),
            Some(variant) => Resolution::Matched(variant),
            None => Resolution::NoMatch,
        }
    } else {
        scan(variants, &requirements)
    };

    let path = if exact { "exact" } else { "scan" };
    tracing::debug!(
        requirements = requirements.len(),
        path,
        outcome = resolution.kind(),
        "resolved selection"
    );

    resolution
}

fn scan<'v>(variants: &'v [Variant], requirements: &[Requirement]) -> Resolution<'v> {
    let mut matching = variants.iter().filter(|v| satisfies(v, requirements));
    match (matching.next(), matching.next()) {
        (None, _) => Resolution::NoMatch,
        (Some(variant), None) => Resolution::Matched(variant),
        (Some(variant), Some(_)) => Resolution::AmbiguousMatch(variant),
    }
}
