//! End-to-end resolution scenarios through the public API.

use std::sync::Arc;
use turbo_customizer::prelude::*;

fn tee() -> CatalogItem {
    CatalogItem::new("prod-tee", "Heavy Tee")
        .with_option("Color", ["Red", "Blue"])
        .with_option("Size", ["S", "M"])
        .with_variant(Variant::new("V1", "Red / S").with_option("Color", "Red").with_option("Size", "S"))
        .with_variant(
            Variant::new("V2", "Red / M")
                .with_option("Color", "Red")
                .with_option("Size", "M")
                .available(false),
        )
        .with_variant(Variant::new("V3", "Blue / S").with_option("Color", "Blue").with_option("Size", "S"))
}

fn selection(engine: &VariantEngine, pairs: &[(&str, &str)]) -> Selection {
    let mut selection = engine.empty_selection();
    for &(name, value) in pairs {
        selection.set_value(name, value).unwrap();
    }
    selection
}

#[test]
fn complete_selection_matches_each_variant() {
    let engine = VariantEngine::new(tee());

    for variant in engine.variants() {
        let pairs: Vec<(&str, &str)> = variant
            .selected_options
            .iter()
            .map(|o| (o.name.as_str(), o.value.as_str()))
            .collect();
        let result = engine.resolve(&selection(&engine, &pairs));
        assert_eq!(result, Resolution::Matched(variant));
    }
}

#[test]
fn red_medium_is_matched_but_not_purchasable() {
    let engine = VariantEngine::new(tee());
    let result = engine.resolve(&selection(&engine, &[("Color", "Red"), ("Size", "M")]));

    assert_eq!(result.variant().map(|v| v.id.as_str()), Some("V2"));
    assert!(matches!(result, Resolution::Matched(_)));
    assert!(!result.is_purchasable());
}

#[test]
fn blue_with_size_unset_matches_only_v3() {
    let engine = VariantEngine::new(tee());
    let result = engine.resolve(&selection(&engine, &[("Color", "Blue")]));

    assert!(matches!(result, Resolution::Matched(v) if v.id.as_str() == "V3"));
    assert!(result.is_purchasable());
}

#[test]
fn green_is_no_match() {
    let engine = VariantEngine::new(tee());
    let result = engine.resolve(&selection(&engine, &[("Color", "Green")]));
    assert_eq!(result, Resolution::NoMatch);
    assert!(!result.is_purchasable());
}

#[test]
fn uppercase_selection_matches_mixed_case_variant() {
    let engine = VariantEngine::new(tee());
    let result = engine.resolve(&selection(&engine, &[("Color", "RED"), ("Size", "S")]));
    assert_eq!(result.variant().map(|v| v.id.as_str()), Some("V1"));
}

#[test]
fn cleared_selection_is_ambiguous_first_variant() {
    let engine = VariantEngine::new(tee());
    let mut selection = engine.default_selection();
    selection.clear("Color").unwrap();
    selection.clear("Size").unwrap();

    let result = engine.resolve(&selection);
    assert_eq!(result, Resolution::AmbiguousMatch(&engine.variants()[0]));
}

#[test]
fn repeated_resolution_is_stable() {
    let engine = VariantEngine::new(tee());
    let selection = selection(&engine, &[("Size", "S")]);
    let first = engine.resolve(&selection);
    assert!(first.is_ambiguous());
    for _ in 0..5 {
        assert_eq!(engine.resolve(&selection), first);
    }
}

#[test]
fn unknown_option_is_rejected_without_change() {
    let engine = VariantEngine::new(tee());
    let mut selection = engine.default_selection();
    let before = selection.clone();

    let err = selection.set_value("Material", "Cotton").unwrap_err();
    assert_eq!(err, CustomizerError::UnknownOption("Material".to_string()));
    assert_eq!(selection, before);
}

#[test]
fn duplicate_tuples_warn_and_first_listed_wins() {
    let item = CatalogItem::new("prod-dup", "Dup Tee")
        .with_option("Color", ["Red"])
        .with_option("Size", ["S"])
        .with_variant(Variant::new("first", "Red / S").with_option("Color", "Red").with_option("Size", "S"))
        .with_variant(Variant::new("second", "Red / S").with_option("Color", "Red").with_option("Size", "S"));
    let engine = VariantEngine::new(item);

    let warnings: Vec<_> = engine.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], DataQualityWarning::DuplicateTuple { .. }));

    let key = CanonicalKey::from_values(["Red", "S"]);
    assert_eq!(engine.lookup_exact(&key).map(|v| v.id.as_str()), Some("first"));

    let result = engine.resolve(&engine.default_selection());
    assert_eq!(result.variant().map(|v| v.id.as_str()), Some("first"));
    assert!(result.is_ambiguous());
}

#[test]
fn storefront_payload_to_cart_line() {
    let payload = r#"{
        "product": {
            "id": "gid://shopify/Product/7",
            "title": "Custom Hoodie",
            "handle": "custom-hoodie",
            "options": [
                {"name": "Size", "optionValues": [{"name": "M"}, {"name": "L"}]},
                {"name": "Color", "optionValues": [{"name": "Black"}]}
            ],
            "variants": {"nodes": [
                {"id": "gid://shopify/ProductVariant/71", "title": "M / Black", "availableForSale": true,
                 "selectedOptions": [{"name": "Size", "value": "M"}, {"name": "Color", "value": "Black"}]},
                {"id": "gid://shopify/ProductVariant/72", "title": "L / Black", "availableForSale": true,
                 "selectedOptions": [{"name": "Size", "value": "L"}, {"name": "Color", "value": "Black"}]}
            ]}
        }
    }"#;

    let engine = Arc::new(VariantEngine::new(storefront::decode_product(payload).unwrap()));
    let mut session = CustomizationSession::new(Arc::clone(&engine), &CustomizerConfig::default()).unwrap();

    let invalid = CustomizerConfig::default().with_max_quantity(0);
    assert!(matches!(
        CustomizationSession::new(Arc::clone(&engine), &invalid),
        Err(CustomizerError::ConfigError(_))
    ));

    session.select("size", "l").unwrap();
    session.set_quantity(4).unwrap();

    assert_eq!(
        session.cart_line(),
        Some(CartLineRequest {
            variant_id: VariantId::new("gid://shopify/ProductVariant/72"),
            quantity: 4,
        })
    );
    assert_eq!(
        session.summary().to_string(),
        "Selected: l / Black – Qty: 4\nMatching variant: L / Black (gid://shopify/ProductVariant/72)"
    );
}
