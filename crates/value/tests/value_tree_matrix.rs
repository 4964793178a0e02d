//! Value tree behaviour with the default scalar bundle: building, reading,
//! serializing and parsing.

use json_scalar_value::{
    from_str, to_json, to_string, DefaultTypes, UnsignedOverflow, Value, ValueError,
};
use serde_json::json;

type Json = Value<DefaultTypes>;

// ---------------------------------------------------------------------------
// Building
// ---------------------------------------------------------------------------

#[test]
fn nested_documents_build_through_set_and_push() {
    let mut doc = Json::null();
    doc.set("name", "scalar").unwrap();
    doc.set("size", 3u64).unwrap();
    doc.set("delta", -3i64).unwrap();

    let mut tags = Json::null();
    tags.push("a").unwrap();
    tags.push(false).unwrap();
    doc.set("tags", tags).unwrap();

    assert_eq!(
        doc.to_string(),
        r#"{"name":"scalar","size":3,"delta":-3,"tags":["a",false]}"#
    );
}

#[test]
fn set_overwrites_existing_member_in_place() {
    let mut doc = Json::null();
    doc.set("a", 1u64).unwrap();
    doc.set("b", 2u64).unwrap();
    doc.set("a", 3u64).unwrap();
    assert_eq!(doc.to_string(), r#"{"a":3,"b":2}"#);
}

#[test]
fn push_onto_object_is_rejected() {
    let mut doc = Json::object();
    let err = doc.push(1u64).unwrap_err();
    assert_eq!(err.to_string(), "cannot push onto object");
    assert!(doc.is_empty());
}

#[test]
fn get_mut_allows_nested_assignment() {
    let mut doc = Json::null();
    doc.set("n", 1u64).unwrap();
    doc.get_mut("n").unwrap().assign_unsigned(10).unwrap();
    assert_eq!(doc.get("n").unwrap().get_as::<u64>().unwrap(), 10);
}

// ---------------------------------------------------------------------------
// Numbers
// ---------------------------------------------------------------------------

#[test]
fn unsigned_extremes_serialize_exactly() {
    let mut doc = Json::null();
    doc.push(0u64).unwrap();
    doc.push(u64::MAX).unwrap();
    doc.push(i64::MIN).unwrap();
    assert_eq!(
        to_string(&doc),
        "[0,18446744073709551615,-9223372036854775808]"
    );
}

#[test]
fn floats_serialize_through_serde_json() {
    let mut doc = Json::null();
    doc.push(1.5f64).unwrap();
    doc.push(f64::INFINITY).unwrap();
    assert_eq!(doc.to_string(), "[1.5,null]");
}

#[test]
fn checked_add_on_plain_u64_reports_overflow() {
    let node = Json::Unsigned(u64::MAX);
    let err = node.checked_add(1).unwrap_err();
    assert_eq!(
        err.unsigned_error::<UnsignedOverflow>(),
        Some(&UnsignedOverflow {
            addend: 1,
            magnitude: u64::MAX
        })
    );
    assert_eq!(Json::Unsigned(5).checked_add(-10).unwrap(), -5);
}

#[test]
fn checked_add_on_plain_u64_returns_to_signed_range() {
    assert_eq!(Json::Unsigned(1u64 << 63).checked_add(-1).unwrap(), i64::MAX);
    assert_eq!(
        Json::Unsigned(u64::MAX).checked_add(i64::MIN).unwrap(),
        i64::MAX
    );
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_then_serialize_is_stable() {
    let text = r#"{"a":[1,2,{"b":null}],"c":"x","d":-7,"e":18446744073709551615}"#;
    let doc = from_str::<DefaultTypes>(text).unwrap();
    assert_eq!(doc.to_string(), text);
}

#[test]
fn parsed_tree_matches_serde_json() {
    let doc = from_str::<DefaultTypes>(r#"{"k":[true,0.25]}"#).unwrap();
    assert_eq!(to_json(&doc), json!({"k": [true, 0.25]}));
}

#[test]
fn parse_errors_surface_as_parse_variant() {
    assert!(matches!(
        from_str::<DefaultTypes>("[1,"),
        Err(ValueError::Parse(_))
    ));
}
