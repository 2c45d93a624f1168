//! Product customization for TurboCommerce storefronts.
//!
//! A shopper configures a catalog item along its option axes (size, color,
//! ...) and this crate resolves the configuration to a concrete variant:
//!
//! - **Option Index**: declared axes, normalized for case-insensitive lookup
//! - **Variant Index**: variants keyed by their normalized option tuple
//! - **Selection**: the shopper's current choice per axis
//! - **Resolver**: selection to `Matched`, `AmbiguousMatch`, or `NoMatch`
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use turbo_customizer::prelude::*;
//!
//! let item = storefront::decode_product(payload)?;
//! let engine = Arc::new(VariantEngine::new(item));
//!
//! let mut session = CustomizationSession::new(engine, &CustomizerConfig::default())?;
//! session.select("Color", "Blue")?;
//! session.set_quantity(2)?;
//!
//! if let Some(line) = session.cart_line() {
//!     cart.add(line.variant_id, line.quantity);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod ids;
pub mod normalize;
pub mod option_index;
pub mod resolver;
pub mod selection;
pub mod session;
pub mod storefront;
pub mod variant_index;

pub use engine::VariantEngine;
pub use error::CustomizerError;
pub use ids::*;
pub use resolver::Resolution;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::{CatalogItem, ProductOption, SelectedOption, Variant};
    pub use crate::config::{CustomizerConfig, InitialSelection};
    pub use crate::diagnostics::DataQualityWarning;
    pub use crate::engine::VariantEngine;
    pub use crate::error::CustomizerError;
    pub use crate::ids::*;
    pub use crate::option_index::{IndexedOption, OptionIndex};
    pub use crate::resolver::{resolve, Resolution};
    pub use crate::selection::Selection;
    pub use crate::session::{CartLineRequest, CustomizationSession, SelectionSummary};
    pub use crate::storefront;
    pub use crate::variant_index::{CanonicalKey, VariantIndex};
}
