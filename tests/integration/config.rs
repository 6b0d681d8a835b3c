//! Validated configuration integration tests
//!
//! A decorated map plays the role of a settings store: code registers the
//! schema, LxSON documents supply overrides, and bad writes bounce off the
//! validators without corrupting the store.

use lxson_text::{parse, to_lxson};
use lxson_value::{Flags, Value, validate_bool, validate_int_range, validate_readonly};

fn settings_store() -> Value {
    let mut store = Value::decorated_map();
    store
        .add("version", Flags::READ_ONLY, Some(validate_readonly()), "1.0")
        .unwrap();
    store
        .add("width", Flags::ACCEPTS_INT, Some(validate_int_range(64, 4096)), 640)
        .unwrap();
    store
        .add("height", Flags::ACCEPTS_INT, Some(validate_int_range(64, 4096)), 480)
        .unwrap();
    store
        .add("fullscreen", Flags::NONE, Some(validate_bool()), false)
        .unwrap();
    store
}

/// Applies every entry of a parsed override document, collecting the keys
/// that were rejected.
fn apply_overrides(store: &mut Value, document: &Value) -> Vec<String> {
    let mut rejected = Vec::new();
    for entry in document.iter().unwrap() {
        let key = entry.key().unwrap().to_owned();
        if store.insert(&key, entry.value().clone()).is_err() {
            rejected.push(key);
        }
    }
    rejected
}

// =============================================================================
// Loading Overrides
// =============================================================================

#[test]
fn valid_overrides_apply() {
    let mut store = settings_store();
    let overrides = parse("{width: 1920, height: 1080, fullscreen: true}").unwrap();

    let rejected = apply_overrides(&mut store, &overrides);
    assert!(rejected.is_empty());
    assert_eq!(store.find("width").unwrap(), 1920);
    assert_eq!(store.find("height").unwrap(), 1080);
    assert_eq!(store.find("fullscreen").unwrap(), true);
}

#[test]
fn invalid_overrides_bounce() {
    let mut store = settings_store();
    let overrides = parse(
        "{width: 32, height: 'tall', fullscreen: 1, version: '2.0', theme: 'dark'}",
    )
    .unwrap();

    let mut rejected = apply_overrides(&mut store, &overrides);
    rejected.sort();
    assert_eq!(rejected, ["fullscreen", "height", "version", "width"]);

    // Rejected writes left the prior values in place.
    assert_eq!(store.find("width").unwrap(), 640);
    assert_eq!(store.find("height").unwrap(), 480);
    assert_eq!(store.find("fullscreen").unwrap(), false);
    assert_eq!(store.find("version").unwrap(), "1.0");

    // Unregistered keys pass through unvalidated.
    assert_eq!(store.find("theme").unwrap(), "dark");
}

#[test]
fn boundary_values_are_inclusive() {
    let mut store = settings_store();
    store.insert("width", 64).unwrap();
    store.insert("width", 4096).unwrap();
    assert!(store.insert("width", 63).is_err());
    assert!(store.insert("width", 4097).is_err());
    assert_eq!(store.find("width").unwrap(), 4096);
}

// =============================================================================
// Introspection and Export
// =============================================================================

#[test]
fn flags_drive_generic_tooling() {
    let store = settings_store();

    // A generic editor would gray out read-only keys.
    assert!(store.flags("version").unwrap().contains(Flags::READ_ONLY));
    assert!(!store.flags("width").unwrap().contains(Flags::READ_ONLY));
    assert!(store.flags("width").unwrap().contains(Flags::ACCEPTS_INT));
}

#[test]
fn store_exports_as_plain_lxson() {
    let mut store = settings_store();
    store.insert("width", 1024).unwrap();

    let text = to_lxson(&store).unwrap();
    assert_eq!(
        text,
        "{fullscreen:false,height:480,version:\"1.0\",width:1024}"
    );

    // The export reloads as an ordinary map with the same entries.
    let reloaded = parse(&text).unwrap();
    assert_eq!(reloaded.find("width").unwrap(), 1024);
    assert_eq!(reloaded.find("version").unwrap(), "1.0");
}

#[test]
fn typed_reads_with_defaults() {
    let store = settings_store();
    assert_eq!(store.find("width").unwrap().query(0i64), 640);
    assert_eq!(store.find("missing").unwrap().query(-1i64), -1);
    assert!(!store.find("fullscreen").unwrap().query(true));
}
