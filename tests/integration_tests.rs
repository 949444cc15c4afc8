use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use std::cmp::Ordering;
use std::str::FromStr;
use typed_json::{
    parse, parse_entry, to_json_object, to_string, to_string_readable, to_value_array, Error,
    JsonArray, JsonEntry, JsonObject, JsonType, Value,
};

fn order() -> JsonObject {
    let mut customer = JsonObject::new();
    customer.put("name", "Alice \"Al\" Smith");
    customer.put("vip", true);
    customer.put_null("referrer");

    let mut item = JsonObject::new();
    item.put("sku", "WIDGET-001");
    item.put("price", BigDecimal::from_str("29.99").unwrap());
    item.put("quantity", 2);

    let mut items = JsonArray::new();
    items.add(item);
    items.add(JsonObject::new());

    let mut order = JsonObject::new();
    order.put("order_id", 12345);
    order.put("customer", customer);
    order.put("items", items);
    order.put("placed", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    order.put(
        "shipped",
        NaiveDate::from_ymd_opt(2024, 1, 16)
            .unwrap()
            .and_hms_milli_opt(14, 5, 9, 500)
            .unwrap(),
    );
    order.put("cutoff", NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    order.put("signature", vec![0xca_u8, 0xfe]);
    order.put("note", JsonEntry::Binary(None));
    order
}

#[test]
fn test_compact_round_trip() {
    let order = order();
    let text = to_string(&order).unwrap();
    println!("Order JSON: {}", text);

    let back = parse(&text).unwrap();
    assert_eq!(back, order);
    assert_eq!(to_string(&back).unwrap(), text);
}

#[test]
fn test_readable_parses_like_compact() {
    let order = order();
    let compact = to_string(&order).unwrap();
    let readable = to_string_readable(&order).unwrap();

    assert!(readable.len() > compact.len());
    assert_eq!(parse(&readable).unwrap(), parse(&compact).unwrap());
}

#[test]
fn test_double_and_integer_compare_equal() {
    let double = Value::from(2.0);
    let integer = Value::from(2);
    assert_eq!(double.compare(&integer).unwrap(), Ordering::Equal);
    assert_eq!(double, integer);
    assert_eq!(integer, double);
}

#[test]
fn test_null_orders_before_non_null() {
    let null = Value::Date(None);
    let date = Value::from(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    assert_eq!(null.compare(&date).unwrap(), Ordering::Less);
    assert_eq!(date.compare(&null).unwrap(), Ordering::Greater);
    assert_eq!(null.compare(&Value::Date(None)).unwrap(), Ordering::Equal);
}

#[test]
fn test_string_and_date_are_not_comparable() {
    let text = Value::from("2024-01-15");
    let date = Value::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert!(matches!(
        text.compare(&date),
        Err(Error::NotComparable { .. })
    ));
}

#[test]
fn test_date_wrapper_parses_to_date_entry() {
    let text = r#"{"%dt%":"2024-01-15"}"#;
    let entry = parse_entry(text).unwrap();
    assert_eq!(entry.kind(), JsonType::Date);
    assert_eq!(
        entry.as_date().unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
    assert_eq!(to_string(&entry).unwrap(), text);
}

#[test]
fn test_value_array_round_trip() {
    let values = vec![Value::from(1), Value::from("x")];
    let object = to_json_object(&values).unwrap();
    let back = to_value_array(&object).unwrap();

    assert_eq!(back.len(), 2);
    assert_eq!(back[0].compare(&values[0]).unwrap(), Ordering::Equal);
    assert_eq!(back[1].get_string().unwrap(), "x");
}

#[test]
fn test_value_array_survives_text() {
    let values = vec![
        Value::from(BigDecimal::from_str("0.1").unwrap()),
        Value::from(i64::MIN),
        Value::from(vec![1u8, 2, 3]),
        Value::Timestamp(None),
        Value::null_string(),
        Value::from(vec![Value::from(true), Value::from("nested")]),
    ];
    let text = to_string(&to_json_object(&values).unwrap()).unwrap();
    let back = to_value_array(&parse(&text).unwrap()).unwrap();
    assert_eq!(back, values);
}

#[test]
fn test_put_existing_key_keeps_position() {
    let mut obj = JsonObject::new();
    obj.put("a", 1);
    obj.put("b", 2);
    obj.put("a", 3);

    let keys: Vec<_> = obj.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(obj.get("a").unwrap(), &JsonEntry::from(3));
    assert_eq!(to_string(&obj).unwrap(), r#"{"a":3,"b":2}"#);
}

#[test]
fn test_nested_wrappers_become_extended_entries() {
    let text = r#"{
        "blob": {"%bn%": "00ff"},
        "at": {"%tm%": "08:30:00.25"},
        "when": {"%ts%": "2024-01-15 08:30:00"},
        "missing": {"%dt%": null},
        "not_a_wrapper": {"%dt%": "2024-01-15", "extra": 1}
    }"#;
    let obj = parse(text).unwrap();

    assert_eq!(obj.get_binary("blob").unwrap(), Some(&[0x00, 0xff][..]));
    assert_eq!(
        obj.get_time("at").unwrap(),
        NaiveTime::from_hms_milli_opt(8, 30, 0, 250)
    );
    assert_eq!(obj.get("when").unwrap().kind(), JsonType::Timestamp);
    assert_eq!(obj.get_date("missing").unwrap(), None);
    assert_eq!(obj.get("not_a_wrapper").unwrap().kind(), JsonType::Object);
}

#[test]
fn test_malformed_wrapper_is_rejected() {
    let err = parse(r#"{"d": {"%dt%": "15/01/2024"}}"#).unwrap_err();
    let Error::InvalidJsonObject { source } = err else {
        panic!("expected InvalidJsonObject");
    };
    assert!(matches!(*source, Error::Syntax { line: 1, col: 7, .. }));
}

#[test]
fn test_wrapper_shaped_objects_are_not_written() {
    let mut fake = JsonObject::new();
    fake.put("%dt%", "not a date");
    let mut obj = JsonObject::new();
    obj.put("d", fake);
    assert!(matches!(to_string(&obj), Err(Error::AmbiguousObject { .. })));
    assert!(to_string_readable(&obj).is_err());

    let mut fake = JsonObject::new();
    fake.put("%bn%", "00");
    let mut arr = JsonArray::new();
    arr.add(fake);
    assert!(to_string(&arr).is_err());
}

#[test]
fn test_marker_key_with_number_round_trips() {
    let mut inner = JsonObject::new();
    inner.put("%tm%", 5);
    let mut obj = JsonObject::new();
    obj.put("n", inner);

    let text = to_string(&obj).unwrap();
    assert_eq!(text, r#"{"n":{"%tm%":5}}"#);
    let back = parse(&text).unwrap();
    assert_eq!(back, obj);
    assert_eq!(back.get("n").unwrap().kind(), JsonType::Object);
}

#[test]
fn test_oversized_exponent_is_rejected() {
    let err = parse(r#"{"n":1e999999999}"#).unwrap_err();
    let Error::InvalidJsonObject { source } = err else {
        panic!("expected InvalidJsonObject");
    };
    assert!(matches!(*source, Error::Syntax { line: 1, .. }));

    let huge = Value::from(BigDecimal::from_str("1e999999999").unwrap());
    assert!(matches!(huge.get_long(), Err(Error::NumericOverflow { .. })));
}

#[test]
fn test_syntax_error_positions() {
    let err = parse("{\n  \"a\": tru\n}").unwrap_err();
    let Error::InvalidJsonObject { source } = err else {
        panic!("expected InvalidJsonObject");
    };
    match *source {
        Error::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_entry_kind_is_fixed() {
    let mut entry = JsonEntry::from("old");
    assert_eq!(entry.replace(JsonEntry::from("new")).unwrap(), JsonEntry::from("old"));
    assert!(matches!(
        entry.replace(JsonEntry::from(1)),
        Err(Error::KindChange { .. })
    ));
    assert_eq!(entry.as_str().unwrap(), "new");
}

#[test]
fn test_numbers_keep_their_digits() {
    let text = r#"{"big":123456789012345678901234567890,"tiny":0.000000000000000000001,"neg":-0.5}"#;
    let obj = parse(text).unwrap();
    assert_eq!(to_string(&obj).unwrap(), text);
}

#[test]
fn test_exponents_are_written_plain() {
    let obj = parse(r#"{"n":1.5e3,"m":25E-3}"#).unwrap();
    assert_eq!(to_string(&obj).unwrap(), r#"{"n":1500,"m":0.025}"#);
}
