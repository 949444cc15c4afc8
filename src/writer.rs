//! JSON text output.
//!
//! The [`Writer`] turns objects, arrays and entries into JSON text in one of
//! two [`Style`](crate::Style)s:
//!
//! - **Compact**: no whitespace between tokens.
//! - **Readable**: the same tokens with a newline and one indentation step
//!   (3 spaces by default) before every key, every element and the closing
//!   brace or bracket of a non-empty container.
//!
//! Numbers are written from their decimal representation in plain notation,
//! never scientific. Extended entries are written as single-key wrapper
//! objects, always compact.
//!
//! ## Usage
//!
//! ```rust
//! use typed_json::{JsonArray, JsonObject, Writer, WriterOptions};
//!
//! let mut tags = JsonArray::new();
//! tags.add("a");
//! let mut obj = JsonObject::new();
//! obj.put("id", 7);
//! obj.put("tags", tags);
//!
//! let mut writer = Writer::new(WriterOptions::compact());
//! writer.write_object(&obj).unwrap();
//! assert_eq!(writer.into_inner(), r#"{"id":7,"tags":["a"]}"#);
//!
//! let mut writer = Writer::new(WriterOptions::readable());
//! writer.write_object(&obj).unwrap();
//! assert_eq!(
//!     writer.into_inner(),
//!     "{\n   \"id\":7,\n   \"tags\":[\n      \"a\"\n   ]\n}"
//! );
//! ```
//!
//! A writer keeps the current nesting level while it runs, so each document
//! gets its own writer; the crate-level helpers create one per call.

use crate::entry::extended_wrapper;
use crate::{Error, JsonArray, JsonEntry, JsonObject, Result, Value, WriterOptions};
use std::fmt::Write as _;

/// Something the [`Writer`] can render as a JSON document.
pub trait WriteJson {
    fn write_json(&self, writer: &mut Writer) -> Result<()>;
}

impl WriteJson for JsonObject {
    fn write_json(&self, writer: &mut Writer) -> Result<()> {
        writer.write_object(self)
    }
}

impl WriteJson for JsonArray {
    fn write_json(&self, writer: &mut Writer) -> Result<()> {
        writer.write_array(self)
    }
}

impl WriteJson for JsonEntry {
    fn write_json(&self, writer: &mut Writer) -> Result<()> {
        writer.write_entry(self)
    }
}

impl WriteJson for Value {
    fn write_json(&self, writer: &mut Writer) -> Result<()> {
        let entry = crate::bridge::to_json_entry(self)?;
        writer.write_entry(&entry)
    }
}

/// The JSON writer.
///
/// A plain object holding exactly one extended marker key mapped to a string
/// or `null` cannot be written, since it would read back as an extended entry.
/// Writing one fails with [`Error::AmbiguousObject`].
pub struct Writer {
    output: String,
    options: WriterOptions,
    indent_level: usize,
    reject_marker_objects: bool,
}

impl Writer {
    pub fn new(options: WriterOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
            reject_marker_objects: true,
        }
    }

    /// Writes wrapper-shaped plain objects as they are. Only used where the
    /// text is compared, never read back.
    pub(crate) fn allow_marker_objects(mut self) -> Self {
        self.reject_marker_objects = false;
        self
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    pub fn write_object(&mut self, object: &JsonObject) -> Result<()> {
        if object.is_empty() {
            self.output.push_str("{}");
            return Ok(());
        }
        if self.reject_marker_objects {
            if let Some((kind, _)) = extended_wrapper(object) {
                return Err(Error::ambiguous_object(kind.marker().unwrap_or_default()));
            }
        }

        self.enter()?;
        self.output.push('{');
        for (i, (key, entry)) in object.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            write_string(&mut self.output, key);
            self.output.push(':');
            self.write_entry(entry)?;
        }
        self.leave();
        self.write_newline();
        self.output.push('}');
        Ok(())
    }

    pub fn write_array(&mut self, array: &JsonArray) -> Result<()> {
        if array.is_empty() {
            self.output.push_str("[]");
            return Ok(());
        }

        self.enter()?;
        self.output.push('[');
        for (i, entry) in array.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_entry(entry)?;
        }
        self.leave();
        self.write_newline();
        self.output.push(']');
        Ok(())
    }

    pub fn write_entry(&mut self, entry: &JsonEntry) -> Result<()> {
        match entry {
            JsonEntry::Null => self.output.push_str("null"),
            JsonEntry::Object(o) => self.write_object(o)?,
            JsonEntry::Array(a) => self.write_array(a)?,
            JsonEntry::String(s) => write_string(&mut self.output, s),
            JsonEntry::Number(n) => self.output.push_str(&n.to_plain_string()),
            JsonEntry::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            JsonEntry::Binary(_)
            | JsonEntry::Date(_)
            | JsonEntry::Time(_)
            | JsonEntry::Timestamp(_) => self.write_extended(entry),
        }
        Ok(())
    }

    fn write_extended(&mut self, entry: &JsonEntry) {
        let marker = entry.kind().marker().unwrap_or_default();
        self.output.push('{');
        write_string(&mut self.output, marker);
        self.output.push(':');
        match entry.extended_text().flatten() {
            Some(text) => write_string(&mut self.output, &text),
            None => self.output.push_str("null"),
        }
        self.output.push('}');
    }

    fn enter(&mut self) -> Result<()> {
        if self.indent_level >= self.options.max_depth {
            return Err(Error::DepthLimit {
                limit: self.options.max_depth,
            });
        }
        self.indent_level += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.indent_level -= 1;
    }

    fn write_newline(&mut self) {
        if self.options.is_readable() {
            self.output.push('\n');
            let width = self.indent_level * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }
}

#[inline]
pub(crate) fn write_string(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            c if c < '\u{0020}' => {
                let _ = write!(output, "\\u{:04x}", c as u32);
            }
            _ => output.push(ch),
        }
    }
    output.push('"');
}
