#![cfg(feature = "serde")]

use mori_expected::{Expected, Unexpected, VoidExpected};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_expected_serializes_as_tagged_alternative() {
    let ok: Expected<u32, String> = Expected::new(7);
    let failed: Expected<u32, String> = Expected::from_error("gone".into());

    assert_eq!(serde_json::to_value(ok).unwrap(), json!({ "value": 7 }));
    assert_eq!(serde_json::to_value(&failed).unwrap(), json!({ "error": "gone" }));
}

#[test]
fn test_expected_deserializes_either_alternative() {
    let ok: Expected<u32, String> = serde_json::from_str(r#"{"value":7}"#).unwrap();
    let failed: Expected<u32, String> = serde_json::from_str(r#"{"error":"gone"}"#).unwrap();

    assert_eq!(ok, 7_u32);
    assert_eq!(failed, Unexpected::new("gone"));
}

#[test]
fn test_void_and_wrapper_forms() {
    let void: VoidExpected<i32> = VoidExpected::new();
    assert_eq!(serde_json::to_value(void).unwrap(), json!({ "value": null }));

    let unex = Unexpected::new(3);
    assert_eq!(serde_json::to_value(unex).unwrap(), json!(3));

    let back: VoidExpected<i32> = serde_json::from_str(r#"{"error":5}"#).unwrap();
    assert_eq!(back, Unexpected::new(5));
}
