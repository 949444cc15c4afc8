//! # typed_json
//!
//! A typed value model and a JSON document library with extended types,
//! used to marshal database values to and from JSON text.
//!
//! ## What is in the box?
//!
//! - [`Value`]: a closed union of twelve datum kinds (numbers, strings,
//!   temporal values, binary, arrays and objects) with a single ordering
//!   that compares numbers across kinds.
//! - [`JsonEntry`], [`JsonObject`], [`JsonArray`]: a JSON document model that
//!   keeps object keys in insertion order and stores numbers as exact
//!   decimals.
//! - Extended types: binary, date, time and timestamp entries travel inside
//!   plain JSON as single-key wrapper objects such as `{"%dt%":"2024-01-15"}`.
//! - A [`Writer`] with compact and readable output, and a [`Parser`] that
//!   recognises the wrappers on the way back in.
//! - A bridge between values and JSON entries for storing rows of values.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use typed_json::{parse, to_string, to_string_readable, JsonObject};
//!
//! let mut order = JsonObject::new();
//! order.put("id", 1001);
//! order.put("placed", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! order.put("paid", true);
//!
//! let text = to_string(&order).unwrap();
//! assert_eq!(text, r#"{"id":1001,"placed":{"%dt%":"2024-01-15"},"paid":true}"#);
//!
//! let back = parse(&text).unwrap();
//! assert_eq!(back, order);
//! assert_eq!(parse(&to_string_readable(&order).unwrap()).unwrap(), order);
//! ```
//!
//! ### Values and the bridge
//!
//! ```rust
//! use typed_json::{to_json_object, to_value_array, Value};
//!
//! let row = vec![Value::from(1), Value::from("x")];
//! let stored = to_json_object(&row).unwrap();
//! assert_eq!(to_value_array(&stored).unwrap(), row);
//! assert_eq!(Value::from(2.0), Value::from(2));
//! ```
//!
//! ### Building documents with the json! macro
//!
//! ```rust
//! use typed_json::json;
//!
//! let doc = json!({ "name": "Alice", "scores": [90, 85] });
//! assert_eq!(doc.to_string(), r#"{"name":"Alice","scores":[90,85]}"#);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` at the parse and write entry
//! points, `trace` when wrappers are recognised and arrays are bridged. No
//! subscriber is installed.

pub mod array;
pub mod bridge;
pub mod entry;
pub mod error;
pub mod macros;
pub mod object;
pub mod options;
pub mod parser;
pub mod value;
pub mod writer;

pub use array::JsonArray;
pub use bridge::{
    to_json_entry, to_json_object, to_value, to_value_array, value_from_json_str,
    value_to_json_string, VALUE_ARRAY_KEY,
};
pub use entry::{
    JsonEntry, JsonType, Payload, BINARY_MARKER, DATE_MARKER, TIMESTAMP_MARKER, TIME_MARKER,
};
pub use error::{Error, Result};
pub use object::JsonObject;
pub use options::{ParserOptions, Style, WriterOptions};
pub use parser::Parser;
pub use value::{Value, ValueType};
pub use writer::{WriteJson, Writer};

use std::io;
use tracing::debug;

/// Writes a document as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use typed_json::{to_string, JsonArray};
///
/// let arr: JsonArray = vec![1, 2, 3].into_iter().collect();
/// assert_eq!(to_string(&arr).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if the document nests deeper than the writer allows, or
/// if a [`Value`] holds a non-finite double.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<D>(document: &D) -> Result<String>
where
    D: ?Sized + WriteJson,
{
    to_string_with_options(document, WriterOptions::compact())
}

/// Writes a document as readable JSON text, indented 3 spaces per level.
///
/// # Examples
///
/// ```rust
/// use typed_json::{to_string_readable, JsonObject};
///
/// let mut obj = JsonObject::new();
/// obj.put("a", 1);
/// assert_eq!(to_string_readable(&obj).unwrap(), "{\n   \"a\":1\n}");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_readable<D>(document: &D) -> Result<String>
where
    D: ?Sized + WriteJson,
{
    to_string_with_options(document, WriterOptions::readable())
}

/// Writes a document with custom options.
///
/// # Examples
///
/// ```rust
/// use typed_json::{to_string_with_options, JsonArray, WriterOptions};
///
/// let arr: JsonArray = vec![true].into_iter().collect();
/// let options = WriterOptions::readable().with_indent(2);
/// assert_eq!(to_string_with_options(&arr, options).unwrap(), "[\n  true\n]");
/// ```
///
/// # Errors
///
/// Same as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<D>(document: &D, options: WriterOptions) -> Result<String>
where
    D: ?Sized + WriteJson,
{
    let style = options.style;
    let mut writer = Writer::new(options);
    document.write_json(&mut writer)?;
    let output = writer.into_inner();
    debug!(bytes = output.len(), ?style, "wrote json document");
    Ok(output)
}

/// Writes a document to an I/O stream as compact JSON.
///
/// # Errors
///
/// Returns an error if writing the document or the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, D>(writer: W, document: &D) -> Result<()>
where
    W: io::Write,
    D: ?Sized + WriteJson,
{
    to_writer_with_options(writer, document, WriterOptions::compact())
}

/// Writes a document to an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if writing the document or the stream fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, D>(mut writer: W, document: &D, options: WriterOptions) -> Result<()>
where
    W: io::Write,
    D: ?Sized + WriteJson,
{
    let text = to_string_with_options(document, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parses JSON text whose top level is an object.
///
/// Extended wrappers nested inside the object become extended entries. A
/// top-level wrapper stays a plain object; use [`parse_entry`] to decode it.
///
/// # Examples
///
/// ```rust
/// use typed_json::{parse, JsonType};
///
/// let obj = parse(r#"{"day": {"%dt%": "2024-01-15"}}"#).unwrap();
/// assert_eq!(obj.get("day").unwrap().kind(), JsonType::Date);
/// ```
///
/// # Errors
///
/// Every failure is reported as [`Error::InvalidJsonObject`] with the
/// underlying syntax or depth error as its source.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<JsonObject> {
    parse_with_options(text, ParserOptions::default())
}

/// Parses a top-level object with custom options.
///
/// # Errors
///
/// Same as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<JsonObject> {
    debug!(bytes = text.len(), "parsing json object");
    Parser::with_options(text, options)
        .parse_object()
        .map_err(Error::invalid_json_object)
}

/// Parses JSON text whose top level is an array.
///
/// # Errors
///
/// Returns the parser's [`Error::Syntax`] or [`Error::DepthLimit`] unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_array(text: &str) -> Result<JsonArray> {
    debug!(bytes = text.len(), "parsing json array");
    Parser::new(text).parse_array()
}

/// Parses any single JSON value, decoding a top-level extended wrapper.
///
/// # Examples
///
/// ```rust
/// use typed_json::{parse_entry, to_string, JsonType};
///
/// let text = r#"{"%dt%":"2024-01-15"}"#;
/// let entry = parse_entry(text).unwrap();
/// assert_eq!(entry.kind(), JsonType::Date);
/// assert_eq!(to_string(&entry).unwrap(), text);
/// ```
///
/// # Errors
///
/// Returns the parser's [`Error::Syntax`] or [`Error::DepthLimit`] unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_entry(text: &str) -> Result<JsonEntry> {
    debug!(bytes = text.len(), "parsing json entry");
    Parser::new(text).parse_entry()
}

/// Parses a top-level object from an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the same as [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<JsonObject>
where
    R: io::Read,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    parse(&text)
}

/// Parses a top-level object from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, otherwise the same as
/// [`parse`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<JsonObject> {
    let text = std::str::from_utf8(bytes).map_err(|e| Error::custom(e.to_string()))?;
    parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::io::Cursor;

    fn sample() -> JsonObject {
        let mut tags = JsonArray::new();
        tags.add("a");
        tags.add_null();
        let mut obj = JsonObject::new();
        obj.put("id", 7);
        obj.put("tags", tags);
        obj.put("at", NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        obj
    }

    #[test]
    fn test_compact_round_trip() {
        let obj = sample();
        let text = to_string(&obj).unwrap();
        assert_eq!(text, r#"{"id":7,"tags":["a",null],"at":{"%tm%":"09:15:00"}}"#);
        assert_eq!(parse(&text).unwrap(), obj);
    }

    #[test]
    fn test_readable_round_trip() {
        let obj = sample();
        let text = to_string_readable(&obj).unwrap();
        assert_eq!(
            text,
            "{\n   \"id\":7,\n   \"tags\":[\n      \"a\",\n      null\n   ],\n   \"at\":{\"%tm%\":\"09:15:00\"}\n}"
        );
        assert_eq!(parse(&text).unwrap(), obj);
    }

    #[test]
    fn test_parse_wraps_errors() {
        let err = parse("[1]").unwrap_err();
        match err {
            Error::InvalidJsonObject { source } => {
                assert!(matches!(*source, Error::Syntax { line: 1, col: 1, .. }));
            }
            other => panic!("expected InvalidJsonObject, got {other:?}"),
        }
        assert!(matches!(parse_array("{}"), Err(Error::Syntax { .. })));
    }

    #[test]
    fn test_depth_limit_is_wrapped() {
        let text = format!("{{\"a\":{}1{}}}", "[".repeat(10), "]".repeat(10));
        let options = ParserOptions::new().with_max_depth(5);
        let err = parse_with_options(&text, options).unwrap_err();
        assert!(matches!(err, Error::InvalidJsonObject { .. }));
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn test_reader_and_writer() {
        let obj = sample();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &obj).unwrap();
        assert_eq!(from_slice(&buffer).unwrap(), obj);
        assert_eq!(from_reader(Cursor::new(buffer)).unwrap(), obj);
        assert!(from_slice(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_value_documents() {
        let value = Value::from(vec![Value::from(1.5), Value::from("x")]);
        assert_eq!(to_string(&value).unwrap(), r#"[1.5,"x"]"#);
        assert!(to_string(&Value::from(f64::NAN)).is_err());
    }
}
