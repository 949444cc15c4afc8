/// Builds a [`JsonEntry`](crate::JsonEntry) from JSON-like syntax.
///
/// Keys must be string literals. Any other expression is converted with
/// `JsonEntry::from`, so negative numbers and computed values go in
/// parentheses.
///
/// ```rust
/// use typed_json::{json, JsonEntry};
///
/// let offset = 3;
/// let entry = json!({
///     "name": "Alice",
///     "tags": ["rust", (offset * 2), null],
///     "nested": { "ok": true, "delta": (-1) }
/// });
///
/// let obj = entry.as_object().unwrap();
/// assert_eq!(obj.get_str("name").unwrap(), "Alice");
/// assert_eq!(entry.to_string(), r#"{"name":"Alice","tags":["rust",6,null],"nested":{"ok":true,"delta":-1}}"#);
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::JsonEntry::Null
    };

    (true) => {
        $crate::JsonEntry::Boolean(true)
    };

    (false) => {
        $crate::JsonEntry::Boolean(false)
    };

    ([]) => {
        $crate::JsonEntry::Array($crate::JsonArray::new())
    };

    ([ $($elem:tt),* $(,)? ]) => {{
        let mut array = $crate::JsonArray::new();
        $(
            array.add($crate::json!($elem));
        )*
        $crate::JsonEntry::Array(array)
    }};

    ({}) => {
        $crate::JsonEntry::Object($crate::JsonObject::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonObject::new();
        $(
            object.put($key, $crate::json!($value));
        )*
        $crate::JsonEntry::Object(object)
    }};

    ($other:expr) => {
        $crate::JsonEntry::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JsonArray, JsonEntry, JsonObject, JsonType};
    use chrono::NaiveDate;

    #[test]
    fn test_json_macro_primitives() {
        assert_eq!(json!(null), JsonEntry::Null);
        assert_eq!(json!(true), JsonEntry::Boolean(true));
        assert_eq!(json!(42), JsonEntry::from(42));
        assert_eq!(json!("hello"), JsonEntry::String("hello".to_string()));
    }

    #[test]
    fn test_json_macro_containers() {
        assert_eq!(json!([]), JsonEntry::Array(JsonArray::new()));
        assert_eq!(json!({}), JsonEntry::Object(JsonObject::new()));

        let arr = json!([1, "two", [false]]);
        let arr = arr.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(2).unwrap().kind(), JsonType::Array);
    }

    #[test]
    fn test_json_macro_extended_values() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let entry = json!({ "day": day, "blob": (vec![1u8, 2]) });
        let obj = entry.as_object().unwrap();
        assert_eq!(obj.get_date("day").unwrap(), Some(day));
        assert_eq!(obj.get_binary("blob").unwrap(), Some(&[1u8, 2][..]));
    }
}
