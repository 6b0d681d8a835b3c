//! Integration tests for the map variants
//!
//! Tests ordered iteration and decorated-map registration, validation, and
//! flags introspection through the Value API.

use lxson_value::{Flags, Value, validate_bool, validate_int_range, validate_readonly};

// =============================================================================
// OrderedMap
// =============================================================================

#[test]
fn ordered_map_iterates_in_insertion_order() {
    let mut v = Value::ordered_map();
    v.insert("zeta", 1).unwrap();
    v.insert("alpha", 2).unwrap();
    v.insert("mid", 3).unwrap();

    let keys: Vec<String> = v
        .iter()
        .unwrap()
        .map(|entry| entry.key().unwrap().to_owned())
        .collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn ordered_map_update_keeps_position() {
    let mut v = Value::ordered_map();
    v.insert("first", 1).unwrap();
    v.insert("second", 2).unwrap();
    v.insert("first", 10).unwrap();

    let keys: Vec<String> = v
        .iter()
        .unwrap()
        .map(|entry| entry.key().unwrap().to_owned())
        .collect();
    assert_eq!(keys, ["first", "second"]);
    assert_eq!(v.find("first").unwrap(), 10);
    assert_eq!(v.size().unwrap(), 2);
}

#[test]
fn ordered_map_supports_key_mut() {
    let mut v = Value::ordered_map();
    v.insert("a", 1).unwrap();
    *v.key_mut("b").unwrap() = Value::from(2);
    assert_eq!(v.find("b").unwrap(), 2);

    let keys: Vec<String> = v
        .iter()
        .unwrap()
        .map(|entry| entry.key().unwrap().to_owned())
        .collect();
    assert_eq!(keys, ["a", "b"]);
}

// =============================================================================
// DecoratedMap
// =============================================================================

#[test]
fn decorated_map_rejects_invalid_writes() {
    let mut m = Value::decorated_map();
    m.add("x", Flags::ACCEPTS_INT, Some(validate_int_range(0, 10)), 5)
        .unwrap();

    let err = m.insert("x", "oops").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(m.find("x").unwrap(), 5);
}

#[test]
fn decorated_map_accepts_valid_writes() {
    let mut m = Value::decorated_map();
    m.add("x", Flags::ACCEPTS_INT, Some(validate_int_range(0, 10)), 5)
        .unwrap();

    m.insert("x", 8).unwrap();
    assert_eq!(m.find("x").unwrap(), 8);

    // Out-of-range values are rejected at the boundary.
    assert!(m.insert("x", 11).is_err());
    assert!(m.insert("x", -1).is_err());
    assert_eq!(m.find("x").unwrap(), 8);
}

#[test]
fn decorated_map_read_only_key() {
    let mut m = Value::decorated_map();
    m.add("version", Flags::READ_ONLY, None, "1.0").unwrap();

    let err = m.insert("version", "2.0").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(m.find("version").unwrap(), "1.0");
}

#[test]
fn readonly_validator_behaves_like_the_flag() {
    let mut m = Value::decorated_map();
    m.add("locked", Flags::NONE, Some(validate_readonly()), 1)
        .unwrap();
    assert!(m.insert("locked", 2).is_err());
    assert_eq!(m.find("locked").unwrap(), 1);
}

#[test]
fn decorated_map_default_is_not_validated() {
    let mut m = Value::decorated_map();
    // The registered default may violate the validator; only later writes
    // are checked.
    m.add("flag", Flags::NONE, Some(validate_bool()), 42).unwrap();
    assert_eq!(m.find("flag").unwrap(), 42);

    assert!(m.insert("flag", 1).is_err());
    m.insert("flag", true).unwrap();
    assert_eq!(m.find("flag").unwrap(), true);
}

#[test]
fn decorated_map_flags_introspection() {
    let mut m = Value::decorated_map();
    m.add("width", Flags::ACCEPTS_INT, None, 640).unwrap();
    m.add("title", Flags::ACCEPTS_STRING | Flags::READ_ONLY, None, "demo")
        .unwrap();

    assert!(m.flags("width").unwrap().contains(Flags::ACCEPTS_INT));
    assert!(!m.flags("width").unwrap().contains(Flags::READ_ONLY));
    assert!(m.flags("title").unwrap().contains(Flags::READ_ONLY));
    assert!(m.flags("unregistered").unwrap().is_empty());
}

#[test]
fn decorated_map_unregistered_keys_pass_through() {
    let mut m = Value::decorated_map();
    m.insert("loose", 7).unwrap();
    assert_eq!(m.find("loose").unwrap(), 7);
    assert!(m.flags("loose").unwrap().is_empty());
}

#[test]
fn decorated_map_blocks_unvalidated_mutation() {
    let mut m = Value::decorated_map();
    m.add("x", Flags::ACCEPTS_INT, Some(validate_int_range(0, 10)), 5)
        .unwrap();
    // key_mut would bypass the validator, so it is refused.
    assert!(m.key_mut("x").is_err());
}

#[test]
fn add_vivifies_undefined_to_decorated_map() {
    let mut m = Value::default();
    m.add("x", Flags::NONE, None, 1).unwrap();
    assert!(m.is_map());
    assert_eq!(m.find("x").unwrap(), 1);
}

#[test]
#[should_panic(expected = "registered twice")]
fn double_registration_is_a_contract_violation() {
    let mut m = Value::decorated_map();
    m.add("x", Flags::NONE, None, 1).unwrap();
    m.add("x", Flags::NONE, None, 2).unwrap();
}
