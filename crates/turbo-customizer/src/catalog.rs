//! Catalog item, option axes, and variant types.
//!
//! These are loaded by an external collaborator and treated as read-only by
//! the resolution engine.

use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// A configurable catalog item (e.g. a blank T-shirt).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogItem {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// URL handle, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    /// Declared option axes, in display order.
    #[serde(default)]
    pub options: Vec<ProductOption>,
    /// Enumerated variants, in catalog order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl CatalogItem {
    /// Create an item with no options or variants.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            handle: None,
            options: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Set the URL handle.
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Declare an option axis.
    pub fn with_option<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(ProductOption::new(name, values));
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }
}

/// A declared option axis (e.g. Color: Red, Blue).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductOption {
    /// Axis name (e.g. "Color").
    pub name: String,
    /// Allowed values, in display order. May contain duplicates upstream.
    #[serde(default)]
    pub values: Vec<String>,
}

impl ProductOption {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A concrete purchasable configuration of a catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Variant identifier.
    pub id: VariantId,
    /// Display title (e.g. "Red / M").
    #[serde(default)]
    pub title: String,
    /// Whether the variant can currently be bought.
    #[serde(default)]
    pub available_for_sale: bool,
    /// The option values this variant represents.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
}

impl Variant {
    /// Create an available variant with no options.
    pub fn new(id: impl Into<VariantId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            available_for_sale: true,
            selected_options: Vec::new(),
        }
    }

    /// Add an option value.
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.selected_options.push(SelectedOption::new(name, value));
        self
    }

    /// Set sale availability.
    pub fn available(mut self, available_for_sale: bool) -> Self {
        self.available_for_sale = available_for_sale;
        self
    }

    /// Build a display title from the option values.
    pub fn build_title(&self) -> String {
        if self.selected_options.is_empty() {
            "Default".to_string()
        } else {
            self.selected_options
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join(" / ")
        }
    }

    /// Title as displayed, falling back to the option values.
    pub fn display_title(&self) -> String {
        if self.title.trim().is_empty() {
            self.build_title()
        } else {
            self.title.clone()
        }
    }
}

/// One `(name, value)` pair of a variant (e.g. Size: M).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct SelectedOption {
    /// Option name.
    pub name: String,
    /// Option value.
    pub value: String,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
