//! The document model and values through serde_json.

use chrono::NaiveDate;
use typed_json::{json, to_string, JsonEntry, JsonObject, JsonType, Value};

#[test]
fn test_objects_serialize_like_the_writer() {
    let doc = json!({ "id": 7, "tags": ["a", null], "ok": true });
    let obj = doc.as_object().unwrap();
    assert_eq!(serde_json::to_string(obj).unwrap(), to_string(obj).unwrap());
}

#[test]
fn test_extended_entries_serialize_as_wrappers() {
    let mut obj = JsonObject::new();
    obj.put("day", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    obj.put("raw", vec![0xffu8]);
    assert_eq!(
        serde_json::to_string(&obj).unwrap(),
        r#"{"day":{"%dt%":"2024-01-15"},"raw":{"%bn%":"ff"}}"#
    );
}

#[test]
fn test_deserialize_recognises_wrappers() {
    let obj: JsonObject =
        serde_json::from_str(r#"{"day":{"%dt%":"2024-01-15"},"n":[1,2.5]}"#).unwrap();
    assert_eq!(obj.get("day").unwrap().kind(), JsonType::Date);
    assert_eq!(obj.get_array("n").unwrap().get(1).unwrap().to_string(), "2.5");
}

#[test]
fn test_deserialize_rejects_wrong_top_level() {
    assert!(serde_json::from_str::<JsonObject>("[1]").is_err());
    assert!(serde_json::from_str::<JsonObject>(r#"{"d":{"%dt%":"soon"}}"#).is_err());
}

#[test]
fn test_wrapper_shaped_objects_do_not_serialize() {
    let mut fake = JsonObject::new();
    fake.put("%ts%", "later");
    let mut obj = JsonObject::new();
    obj.put("when", fake);
    assert!(serde_json::to_string(&obj).is_err());
}

#[test]
fn test_serde_json_value_interop() {
    let original = serde_json::json!({ "name": "Alice", "scores": [90, 85], "meta": null });
    let entry: JsonEntry = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(serde_json::to_value(&entry).unwrap(), original);
}

#[test]
fn test_values_serialize_through_the_bridge() {
    let value = Value::from(vec![Value::from(1), Value::from("x"), Value::null_string()]);
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"[1,"x",null]"#);

    let back: Value = serde_json::from_str(r#"[1,"x",null]"#).unwrap();
    assert_eq!(back, value);
    assert!(serde_json::to_string(&Value::from(f64::NAN)).is_err());
}
