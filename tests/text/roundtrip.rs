//! Integration tests for the parse/render round trip
//!
//! Canonical text is the comparison form for whole trees: unordered maps
//! render sorted, so equal trees render to equal text.

use lxson_text::{format_tabbed, parse, to_lxson};
use lxson_value::Value;

use proptest::prelude::*;

fn canonical(text: &str) -> String {
    to_lxson(&parse(text).unwrap()).unwrap()
}

#[test]
fn canonical_text_is_stable() {
    let text = "{camera:{fov:60.0},size:[640,480],title:\"demo\"}";
    assert_eq!(canonical(text), text);
    assert_eq!(canonical(&canonical(text)), canonical(text));
}

#[test]
fn key_order_normalizes() {
    assert_eq!(canonical("{zeta:1, alpha:2}"), "{alpha:2,zeta:1}");
    assert_eq!(canonical("{alpha:2, zeta:1}"), "{alpha:2,zeta:1}");
}

#[test]
fn layout_differences_vanish() {
    let packed = canonical("{a:[1,2],b:'x'}");
    let spaced = canonical(" {\n  b : 'x' ,\n  a : [ 1 , 2 , ]\n } ");
    assert_eq!(packed, spaced);
}

#[test]
fn quote_style_normalizes_to_double() {
    assert_eq!(canonical("'single'"), "\"single\"");
    assert_eq!(canonical("{k:'v'}"), "{k:\"v\"}");
}

#[test]
fn named_map_shorthand_renders_as_its_pair() {
    assert_eq!(canonical("phong { color: 1 }"), "[\"phong\",{color:1}]");
}

#[test]
fn hand_built_trees_render_like_parsed_ones() {
    let mut camera = Value::map();
    camera.insert("fov", 60.0).unwrap();
    let mut built = Value::map();
    built.insert("camera", camera).unwrap();
    built.insert("title", "demo").unwrap();

    let parsed = parse("{title: 'demo', camera: {fov: 60.0}}").unwrap();
    assert_eq!(to_lxson(&built).unwrap(), to_lxson(&parsed).unwrap());
}

#[test]
fn ordered_maps_render_in_insertion_order() {
    let mut v = Value::ordered_map();
    v.insert("zeta", 1).unwrap();
    v.insert("alpha", 2).unwrap();
    assert_eq!(to_lxson(&v).unwrap(), "{zeta:1,alpha:2}");

    // The reparse is a plain map, so the render canonicalizes.
    assert_eq!(canonical(&to_lxson(&v).unwrap()), "{alpha:2,zeta:1}");
}

#[test]
fn tabbed_rendering_of_a_parsed_document() {
    let scene = parse("{title: 'demo', camera: {fov: 60.0}}").unwrap();
    assert_eq!(
        format_tabbed(&scene),
        "camera : \n    fov : 60.000000\ntitle : demo\n"
    );
}

// =============================================================================
// Properties
// =============================================================================

/// Strategy for documents assembled from renderable leaves.
fn flat_object() -> impl Strategy<Value = String> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,5}", any::<i64>(), 0..8).prop_map(|entries| {
        let body: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect();
        format!("{{{}}}", body.join(", "))
    })
}

proptest! {
    #[test]
    fn canonicalization_is_idempotent(text in flat_object()) {
        let once = canonical(&text);
        prop_assert_eq!(canonical(&once), once);
    }

    #[test]
    fn entries_survive_the_round_trip(entries in prop::collection::btree_map(
        "[a-z][a-z0-9_]{0,5}",
        any::<i64>(),
        0..8,
    )) {
        let mut v = Value::map();
        for (key, value) in &entries {
            v.insert(key, *value).unwrap();
        }
        let reparsed = parse(&to_lxson(&v).unwrap()).unwrap();
        prop_assert_eq!(reparsed.size().unwrap(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(reparsed.find(key).unwrap(), *value);
        }
    }
}
