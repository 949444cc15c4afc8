//! Conversion between [`Value`]s and JSON entries.
//!
//! Database marshalling stores arrays of values as JSON. Every value kind
//! has a JSON image:
//!
//! | Value | JSON entry |
//! |---|---|
//! | DECIMAL, DOUBLE, INTEGER, LONG | NUMBER |
//! | BOOLEAN | BOOLEAN |
//! | STRING | STRING, or NULL for the null string |
//! | DATE, TIME, TIMESTAMP, BINARY | the matching extended kind |
//! | ARRAY | ARRAY of converted elements, or NULL |
//! | OBJECT | OBJECT, or NULL |
//!
//! Going back, NUMBER always becomes DECIMAL, which compares equal to the
//! original numeric value, and NULL becomes [`Value::null_string`].
//!
//! ```rust
//! use typed_json::{to_json_object, to_value_array, Value};
//!
//! let row = vec![Value::from(1), Value::from("x")];
//! let stored = to_json_object(&row).unwrap();
//! assert_eq!(stored.to_string(), r#"{"value_array":[1,"x"]}"#);
//! assert_eq!(to_value_array(&stored).unwrap(), row);
//! ```

use crate::{JsonArray, JsonEntry, JsonObject, Result, Value};
use tracing::trace;

/// Key under which [`to_json_object`] stores the converted array.
pub const VALUE_ARRAY_KEY: &str = "value_array";

/// Converts a value to its JSON entry.
///
/// # Errors
///
/// [`Error::NonFiniteNumber`](crate::Error::NonFiniteNumber) if the value
/// is, or contains, a NaN or infinite double.
pub fn to_json_entry(value: &Value) -> Result<JsonEntry> {
    let entry = match value {
        Value::Boolean(b) => JsonEntry::Boolean(*b),
        Value::Decimal(n) => JsonEntry::Number(n.clone()),
        Value::Double(d) => JsonEntry::from_f64(*d)?,
        Value::Integer(i) => JsonEntry::from(*i),
        Value::Long(l) => JsonEntry::from(*l),
        Value::Date(d) => JsonEntry::Date(*d),
        Value::Time(t) => JsonEntry::Time(*t),
        Value::Timestamp(ts) => JsonEntry::Timestamp(*ts),
        Value::String(Some(s)) => JsonEntry::String(s.clone()),
        Value::Binary(b) => JsonEntry::Binary(b.clone()),
        Value::Array(Some(items)) => {
            trace!(len = items.len(), "converting value array to json");
            let array = items.iter().map(to_json_entry).collect::<Result<JsonArray>>()?;
            JsonEntry::Array(array)
        }
        Value::Object(Some(object)) => JsonEntry::Object(object.clone()),
        Value::String(None) | Value::Array(None) | Value::Object(None) => JsonEntry::Null,
    };
    Ok(entry)
}

/// Converts a JSON entry back to a value.
pub fn to_value(entry: &JsonEntry) -> Value {
    match entry {
        JsonEntry::Null => Value::null_string(),
        JsonEntry::Boolean(b) => Value::Boolean(*b),
        JsonEntry::Number(n) => Value::Decimal(n.clone()),
        JsonEntry::String(s) => Value::String(Some(s.clone())),
        JsonEntry::Date(d) => Value::Date(*d),
        JsonEntry::Time(t) => Value::Time(*t),
        JsonEntry::Timestamp(ts) => Value::Timestamp(*ts),
        JsonEntry::Binary(b) => Value::Binary(b.clone()),
        JsonEntry::Array(array) => {
            trace!(len = array.len(), "converting json array to values");
            Value::Array(Some(array.iter().map(to_value).collect()))
        }
        JsonEntry::Object(object) => Value::Object(Some(object.clone())),
    }
}

/// Wraps the converted `values` in an object under [`VALUE_ARRAY_KEY`].
pub fn to_json_object(values: &[Value]) -> Result<JsonObject> {
    let array = values.iter().map(to_json_entry).collect::<Result<JsonArray>>()?;
    let mut object = JsonObject::with_capacity(1);
    object.put(VALUE_ARRAY_KEY, array);
    Ok(object)
}

/// Extracts the values stored by [`to_json_object`].
///
/// # Errors
///
/// [`Error::InvalidKey`](crate::Error::InvalidKey) if the key is missing,
/// [`Error::TypeMismatch`](crate::Error::TypeMismatch) if it does not hold
/// an array.
pub fn to_value_array(object: &JsonObject) -> Result<Vec<Value>> {
    let array = object.get_array(VALUE_ARRAY_KEY)?;
    Ok(array.iter().map(to_value).collect())
}

/// Writes a single value as compact JSON text.
///
/// ```rust
/// use chrono::NaiveDate;
/// use typed_json::{value_from_json_str, value_to_json_string, Value};
///
/// let day = Value::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// let text = value_to_json_string(&day).unwrap();
/// assert_eq!(text, r#"{"%dt%":"2024-01-15"}"#);
/// assert_eq!(value_from_json_str(&text).unwrap(), day);
/// ```
pub fn value_to_json_string(value: &Value) -> Result<String> {
    crate::to_string(value)
}

/// Reads a single value written by [`value_to_json_string`].
pub fn value_from_json_str(text: &str) -> Result<Value> {
    let entry = crate::parse_entry(text)?;
    Ok(to_value(&entry))
}

impl TryFrom<&Value> for JsonEntry {
    type Error = crate::Error;

    fn try_from(value: &Value) -> Result<Self> {
        to_json_entry(value)
    }
}

impl From<&JsonEntry> for Value {
    fn from(entry: &JsonEntry) -> Self {
        to_value(entry)
    }
}
