//! Decoding of storefront product payloads into [`CatalogItem`]s.
//!
//! Accepts the product object returned by the storefront product query,
//! either bare or wrapped as `{"product": {...}}`. Fetching is the caller's
//! job.

use crate::catalog::{CatalogItem, ProductOption, Variant};
use crate::error::CustomizerError;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    handle: Option<String>,
    #[serde(default)]
    options: Option<Vec<RawOption>>,
    #[serde(default)]
    variants: Option<RawConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOption {
    #[serde(default)]
    name: String,
    #[serde(default)]
    option_values: Option<Vec<RawOptionValue>>,
}

#[derive(Debug, Deserialize)]
struct RawOptionValue {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawConnection {
    #[serde(default)]
    nodes: Vec<Variant>,
}

/// Decode a storefront product payload.
pub fn decode_product(json: &str) -> Result<CatalogItem, CustomizerError> {
    let value: Value = serde_json::from_str(json)?;
    decode_product_value(value)
}

/// Decode an already-parsed storefront product payload.
pub fn decode_product_value(value: Value) -> Result<CatalogItem, CustomizerError> {
    let value = match value {
        Value::Object(mut map) if map.contains_key("product") => {
            map.remove("product").unwrap_or(Value::Null)
        }
        other => other,
    };
    if value.is_null() {
        return Err(CustomizerError::ProductNotFound(String::new()));
    }

    let raw: RawProduct = serde_json::from_value(value)?;
    let id = raw.id.filter(|id| !id.trim().is_empty()).ok_or_else(|| {
        CustomizerError::ProductNotFound(raw.handle.clone().unwrap_or_default())
    })?;

    let options = raw
        .options
        .unwrap_or_default()
        .into_iter()
        .map(|option| {
            ProductOption::new(
                option.name,
                option
                    .option_values
                    .unwrap_or_default()
                    .into_iter()
                    .map(|v| v.name),
            )
        })
        .collect();

    Ok(CatalogItem {
        id: id.into(),
        title: raw.title,
        handle: raw.handle,
        options,
        variants: raw.variants.map(|c| c.nodes).unwrap_or_default(),
    })
}
