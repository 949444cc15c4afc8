//! JSON entries: the leaf and container wrapper of the document model.
//!
//! A [`JsonEntry`] is one of ten kinds ([`JsonType`]). Six are native JSON
//! (null, object, array, string, number, boolean); the other four are
//! *extended* kinds with no native JSON encoding:
//!
//! | Kind | Marker | Text form |
//! |------|--------|-----------|
//! | Binary | `%bn%` | lowercase hex, two digits per byte |
//! | Date | `%dt%` | `YYYY-MM-DD` |
//! | Time | `%tm%` | `HH:MM:SS[.fffffffff]` |
//! | Timestamp | `%ts%` | `YYYY-MM-DDTHH:MM:SS[.fffffffff]` |
//!
//! Extended entries are written as a single-key wrapper object, for example
//! `{"%dt%":"2024-01-15"}`, and the parser turns such objects back into the
//! extended kind.
//!
//! The kind of an entry is its enum variant, so it is fixed at construction.
//! [`JsonEntry::replace`] is the only in-place mutation and it refuses to
//! change the kind.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use typed_json::{JsonEntry, JsonType};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let entry = JsonEntry::from(date);
//! assert_eq!(entry.kind(), JsonType::Date);
//! assert_eq!(entry.to_string(), r#"{"%dt%":"2024-01-15"}"#);
//! ```

use crate::{Error, JsonArray, JsonObject, Result};
use bigdecimal::{BigDecimal, FromPrimitive};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const BINARY_MARKER: &str = "%bn%";
pub const DATE_MARKER: &str = "%dt%";
pub const TIME_MARKER: &str = "%tm%";
pub const TIMESTAMP_MARKER: &str = "%ts%";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S%.f";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIMESTAMP_FORMAT_SPACE: &str = "%Y-%m-%d %H:%M:%S%.f";

/// The kind of a [`JsonEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Object,
    Array,
    String,
    Number,
    Boolean,
    Binary,
    Date,
    Time,
    Timestamp,
}

impl JsonType {
    /// Returns `true` for the four kinds written as wrapper objects.
    #[inline]
    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(
            self,
            JsonType::Binary | JsonType::Date | JsonType::Time | JsonType::Timestamp
        )
    }

    /// Returns `true` if entries of this kind may hold an absent payload.
    #[inline]
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, JsonType::Null) || self.is_extended()
    }

    /// The wrapper key of an extended kind.
    ///
    /// ```rust
    /// use typed_json::JsonType;
    ///
    /// assert_eq!(JsonType::Time.marker(), Some("%tm%"));
    /// assert_eq!(JsonType::String.marker(), None);
    /// ```
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            JsonType::Binary => Some(BINARY_MARKER),
            JsonType::Date => Some(DATE_MARKER),
            JsonType::Time => Some(TIME_MARKER),
            JsonType::Timestamp => Some(TIMESTAMP_MARKER),
            _ => None,
        }
    }

    /// Looks up the extended kind a wrapper key stands for.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<JsonType> {
        match marker {
            BINARY_MARKER => Some(JsonType::Binary),
            DATE_MARKER => Some(JsonType::Date),
            TIME_MARKER => Some(JsonType::Time),
            TIMESTAMP_MARKER => Some(JsonType::Timestamp),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            JsonType::Null => "NULL",
            JsonType::Object => "OBJECT",
            JsonType::Array => "ARRAY",
            JsonType::String => "STRING",
            JsonType::Number => "NUMBER",
            JsonType::Boolean => "BOOLEAN",
            JsonType::Binary => "BINARY",
            JsonType::Date => "DATE",
            JsonType::Time => "TIME",
            JsonType::Timestamp => "TIMESTAMP",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A payload handed to [`JsonEntry::with_kind`] together with the kind it
/// should be stored as.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Object(JsonObject),
    Array(JsonArray),
    String(String),
    Number(BigDecimal),
    Boolean(bool),
    Binary(Vec<u8>),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
}

impl Payload {
    fn kind(&self) -> JsonType {
        match self {
            Payload::Object(_) => JsonType::Object,
            Payload::Array(_) => JsonType::Array,
            Payload::String(_) => JsonType::String,
            Payload::Number(_) => JsonType::Number,
            Payload::Boolean(_) => JsonType::Boolean,
            Payload::Binary(_) => JsonType::Binary,
            Payload::Date(_) => JsonType::Date,
            Payload::Time(_) => JsonType::Time,
            Payload::Timestamp(_) => JsonType::Timestamp,
        }
    }
}

/// One JSON value: a leaf, a container, or an extended scalar.
///
/// Numbers are always held as [`BigDecimal`] so no input loses precision.
/// Only [`JsonEntry::Null`] and the extended kinds can carry an absent
/// payload.
///
/// # Examples
///
/// ```rust
/// use typed_json::{JsonEntry, JsonType};
///
/// let entry = JsonEntry::from(42);
/// assert_eq!(entry.kind(), JsonType::Number);
/// assert_eq!(entry.as_number().unwrap().to_string(), "42");
/// assert!(entry.as_str().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonEntry {
    #[default]
    Null,
    Object(JsonObject),
    Array(JsonArray),
    String(String),
    Number(BigDecimal),
    Boolean(bool),
    Binary(Option<Vec<u8>>),
    Date(Option<NaiveDate>),
    Time(Option<NaiveTime>),
    Timestamp(Option<NaiveDateTime>),
}

impl JsonEntry {
    /// Builds an entry from an explicit kind and an optional payload.
    ///
    /// This is the constructor used when the kind is known before the
    /// payload has been decoded, as in the parser.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] if the payload is absent for a kind that does
    /// not allow it, [`Error::TypeMismatch`] if the payload belongs to a
    /// different kind.
    ///
    /// ```rust
    /// use typed_json::{Error, JsonEntry, JsonType, Payload};
    ///
    /// assert_eq!(JsonEntry::with_kind(JsonType::Date, None).unwrap(), JsonEntry::Date(None));
    /// assert!(matches!(
    ///     JsonEntry::with_kind(JsonType::String, None),
    ///     Err(Error::NullArgument { .. })
    /// ));
    /// let entry = JsonEntry::with_kind(JsonType::Boolean, Some(Payload::Boolean(true))).unwrap();
    /// assert_eq!(entry, JsonEntry::Boolean(true));
    /// ```
    pub fn with_kind(kind: JsonType, payload: Option<Payload>) -> Result<JsonEntry> {
        let payload = match payload {
            Some(payload) => payload,
            None => {
                return match kind {
                    JsonType::Null => Ok(JsonEntry::Null),
                    JsonType::Binary => Ok(JsonEntry::Binary(None)),
                    JsonType::Date => Ok(JsonEntry::Date(None)),
                    JsonType::Time => Ok(JsonEntry::Time(None)),
                    JsonType::Timestamp => Ok(JsonEntry::Timestamp(None)),
                    other => Err(Error::null_argument(&format!("{} payload", other))),
                };
            }
        };

        match (kind, payload) {
            (JsonType::Object, Payload::Object(o)) => Ok(JsonEntry::Object(o)),
            (JsonType::Array, Payload::Array(a)) => Ok(JsonEntry::Array(a)),
            (JsonType::String, Payload::String(s)) => Ok(JsonEntry::String(s)),
            (JsonType::Number, Payload::Number(n)) => Ok(JsonEntry::Number(n)),
            (JsonType::Boolean, Payload::Boolean(b)) => Ok(JsonEntry::Boolean(b)),
            (JsonType::Binary, Payload::Binary(b)) => Ok(JsonEntry::Binary(Some(b))),
            (JsonType::Date, Payload::Date(d)) => Ok(JsonEntry::Date(Some(d))),
            (JsonType::Time, Payload::Time(t)) => Ok(JsonEntry::Time(Some(t))),
            (JsonType::Timestamp, Payload::Timestamp(ts)) => Ok(JsonEntry::Timestamp(Some(ts))),
            (kind, payload) => Err(Error::type_mismatch(kind, payload.kind())),
        }
    }

    /// Builds a NUMBER entry from a double.
    ///
    /// A fractional double enters through its shortest round-trip decimal
    /// text, so `0.1` is stored as exactly `0.1`. An integral double is
    /// stored as its exact integer value.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteNumber`] for NaN and infinities.
    pub fn from_f64(value: f64) -> Result<JsonEntry> {
        decimal_from_f64(value).map(JsonEntry::Number)
    }

    /// Decodes the text of an extended wrapper object into an entry.
    ///
    /// ```rust
    /// use typed_json::{JsonEntry, JsonType};
    ///
    /// let entry = JsonEntry::decode_extended(JsonType::Binary, Some("00ff")).unwrap();
    /// assert_eq!(entry, JsonEntry::Binary(Some(vec![0x00, 0xff])));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if `kind` is not extended, [`Error::Custom`]
    /// if the text does not decode.
    pub fn decode_extended(kind: JsonType, text: Option<&str>) -> Result<JsonEntry> {
        let payload = match text {
            None => None,
            Some(text) => Some(match kind {
                JsonType::Binary => Payload::Binary(decode_hex(text)?),
                JsonType::Date => Payload::Date(parse_date(text)?),
                JsonType::Time => Payload::Time(parse_time(text)?),
                JsonType::Timestamp => Payload::Timestamp(parse_timestamp(text)?),
                other => return Err(Error::type_mismatch("extended type", other)),
            }),
        };
        JsonEntry::with_kind(kind, payload)
    }

    /// Turns an object into an entry, unwrapping it if it is an extended
    /// wrapper (exactly one marker key mapping to a string or null).
    ///
    /// # Errors
    ///
    /// Fails if the object is a wrapper whose text does not decode.
    pub fn from_object(object: JsonObject) -> Result<JsonEntry> {
        if let Some((kind, text)) = extended_wrapper(&object) {
            tracing::trace!(kind = %kind, "recognised extended wrapper");
            return JsonEntry::decode_extended(kind, text);
        }
        Ok(JsonEntry::Object(object))
    }

    /// Returns the kind of this entry.
    #[must_use]
    pub const fn kind(&self) -> JsonType {
        match self {
            JsonEntry::Null => JsonType::Null,
            JsonEntry::Object(_) => JsonType::Object,
            JsonEntry::Array(_) => JsonType::Array,
            JsonEntry::String(_) => JsonType::String,
            JsonEntry::Number(_) => JsonType::Number,
            JsonEntry::Boolean(_) => JsonType::Boolean,
            JsonEntry::Binary(_) => JsonType::Binary,
            JsonEntry::Date(_) => JsonType::Date,
            JsonEntry::Time(_) => JsonType::Time,
            JsonEntry::Timestamp(_) => JsonType::Timestamp,
        }
    }

    /// Returns `true` for `null` and for extended entries without a payload.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(
            self,
            JsonEntry::Null
                | JsonEntry::Binary(None)
                | JsonEntry::Date(None)
                | JsonEntry::Time(None)
                | JsonEntry::Timestamp(None)
        )
    }

    /// Replaces the payload, keeping the kind.
    ///
    /// Returns the previous entry.
    ///
    /// # Errors
    ///
    /// [`Error::KindChange`] if `entry` is of a different kind.
    ///
    /// ```rust
    /// use typed_json::JsonEntry;
    ///
    /// let mut entry = JsonEntry::from("a");
    /// entry.replace(JsonEntry::from("b")).unwrap();
    /// assert_eq!(entry.as_str().unwrap(), "b");
    /// assert!(entry.replace(JsonEntry::from(1)).is_err());
    /// ```
    pub fn replace(&mut self, entry: JsonEntry) -> Result<JsonEntry> {
        if self.kind() != entry.kind() {
            return Err(Error::kind_change(self.kind(), entry.kind()));
        }
        Ok(std::mem::replace(self, entry))
    }

    pub fn as_object(&self) -> Result<&JsonObject> {
        match self {
            JsonEntry::Object(o) => Ok(o),
            other => Err(Error::type_mismatch(JsonType::Object, other.kind())),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut JsonObject> {
        match self {
            JsonEntry::Object(o) => Ok(o),
            other => Err(Error::type_mismatch(JsonType::Object, other.kind())),
        }
    }

    pub fn as_array(&self) -> Result<&JsonArray> {
        match self {
            JsonEntry::Array(a) => Ok(a),
            other => Err(Error::type_mismatch(JsonType::Array, other.kind())),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut JsonArray> {
        match self {
            JsonEntry::Array(a) => Ok(a),
            other => Err(Error::type_mismatch(JsonType::Array, other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            JsonEntry::String(s) => Ok(s),
            other => Err(Error::type_mismatch(JsonType::String, other.kind())),
        }
    }

    pub fn as_number(&self) -> Result<&BigDecimal> {
        match self {
            JsonEntry::Number(n) => Ok(n),
            other => Err(Error::type_mismatch(JsonType::Number, other.kind())),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            JsonEntry::Boolean(b) => Ok(*b),
            other => Err(Error::type_mismatch(JsonType::Boolean, other.kind())),
        }
    }

    pub fn as_binary(&self) -> Result<Option<&[u8]>> {
        match self {
            JsonEntry::Binary(b) => Ok(b.as_deref()),
            other => Err(Error::type_mismatch(JsonType::Binary, other.kind())),
        }
    }

    pub fn as_date(&self) -> Result<Option<NaiveDate>> {
        match self {
            JsonEntry::Date(d) => Ok(*d),
            other => Err(Error::type_mismatch(JsonType::Date, other.kind())),
        }
    }

    pub fn as_time(&self) -> Result<Option<NaiveTime>> {
        match self {
            JsonEntry::Time(t) => Ok(*t),
            other => Err(Error::type_mismatch(JsonType::Time, other.kind())),
        }
    }

    pub fn as_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        match self {
            JsonEntry::Timestamp(ts) => Ok(*ts),
            other => Err(Error::type_mismatch(JsonType::Timestamp, other.kind())),
        }
    }

    /// The wrapper text of an extended entry: `Some(None)` when the payload
    /// is absent, `None` for non-extended kinds.
    pub(crate) fn extended_text(&self) -> Option<Option<String>> {
        match self {
            JsonEntry::Binary(b) => Some(b.as_ref().map(hex::encode)),
            JsonEntry::Date(d) => Some(d.as_ref().map(format_date)),
            JsonEntry::Time(t) => Some(t.as_ref().map(format_time)),
            JsonEntry::Timestamp(ts) => Some(ts.as_ref().map(format_timestamp)),
            _ => None,
        }
    }
}

pub(crate) fn extended_wrapper(object: &JsonObject) -> Option<(JsonType, Option<&str>)> {
    if object.len() != 1 {
        return None;
    }
    let (key, value) = object.iter().next()?;
    let kind = JsonType::from_marker(key)?;
    match value {
        JsonEntry::String(s) => Some((kind, Some(s.as_str()))),
        JsonEntry::Null => Some((kind, None)),
        _ => None,
    }
}

/// Converts a double to a decimal.
///
/// Integral doubles convert to their exact value, so `2^60 as f64` becomes
/// `1152921504606846976` rather than its shortest text `1152921504606847000`.
/// Other doubles go through their shortest round-trip text.
pub(crate) fn decimal_from_f64(value: f64) -> Result<BigDecimal> {
    if !value.is_finite() {
        return Err(Error::NonFiniteNumber(value));
    }
    if value.fract() == 0.0 {
        return BigInt::from_f64(value)
            .map(BigDecimal::from)
            .ok_or(Error::NonFiniteNumber(value));
    }
    // f64's Display never uses exponent notation
    BigDecimal::from_str(&value.to_string()).map_err(Error::custom)
}

pub(crate) fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub(crate) fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

fn decode_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| Error::custom(format!("invalid BINARY text {:?}: {}", text, e)))
}

fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|e| Error::custom(format!("invalid DATE text {:?}: {}", text, e)))
}

fn parse_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .map_err(|e| Error::custom(format!("invalid TIME text {:?}: {}", text, e)))
}

fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT_SPACE))
        .map_err(|e| Error::custom(format!("invalid TIMESTAMP text {:?}: {}", text, e)))
}

impl fmt::Display for JsonEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

// From implementations for creating entries from native values
impl From<bool> for JsonEntry {
    fn from(value: bool) -> Self {
        JsonEntry::Boolean(value)
    }
}

impl From<i32> for JsonEntry {
    fn from(value: i32) -> Self {
        JsonEntry::Number(BigDecimal::from(value))
    }
}

impl From<i64> for JsonEntry {
    fn from(value: i64) -> Self {
        JsonEntry::Number(BigDecimal::from(value))
    }
}

impl From<u32> for JsonEntry {
    fn from(value: u32) -> Self {
        JsonEntry::Number(BigDecimal::from(value))
    }
}

impl From<u64> for JsonEntry {
    fn from(value: u64) -> Self {
        JsonEntry::Number(BigDecimal::from(value))
    }
}

impl From<BigInt> for JsonEntry {
    fn from(value: BigInt) -> Self {
        JsonEntry::Number(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for JsonEntry {
    fn from(value: BigDecimal) -> Self {
        JsonEntry::Number(value)
    }
}

impl TryFrom<f64> for JsonEntry {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        JsonEntry::from_f64(value)
    }
}

impl From<String> for JsonEntry {
    fn from(value: String) -> Self {
        JsonEntry::String(value)
    }
}

impl From<&str> for JsonEntry {
    fn from(value: &str) -> Self {
        JsonEntry::String(value.to_string())
    }
}

impl From<JsonObject> for JsonEntry {
    fn from(value: JsonObject) -> Self {
        JsonEntry::Object(value)
    }
}

impl From<JsonArray> for JsonEntry {
    fn from(value: JsonArray) -> Self {
        JsonEntry::Array(value)
    }
}

impl From<Vec<u8>> for JsonEntry {
    fn from(value: Vec<u8>) -> Self {
        JsonEntry::Binary(Some(value))
    }
}

impl From<&[u8]> for JsonEntry {
    fn from(value: &[u8]) -> Self {
        JsonEntry::Binary(Some(value.to_vec()))
    }
}

impl From<Option<Vec<u8>>> for JsonEntry {
    fn from(value: Option<Vec<u8>>) -> Self {
        JsonEntry::Binary(value)
    }
}

impl From<NaiveDate> for JsonEntry {
    fn from(value: NaiveDate) -> Self {
        JsonEntry::Date(Some(value))
    }
}

impl From<Option<NaiveDate>> for JsonEntry {
    fn from(value: Option<NaiveDate>) -> Self {
        JsonEntry::Date(value)
    }
}

impl From<NaiveTime> for JsonEntry {
    fn from(value: NaiveTime) -> Self {
        JsonEntry::Time(Some(value))
    }
}

impl From<Option<NaiveTime>> for JsonEntry {
    fn from(value: Option<NaiveTime>) -> Self {
        JsonEntry::Time(value)
    }
}

impl From<NaiveDateTime> for JsonEntry {
    fn from(value: NaiveDateTime) -> Self {
        JsonEntry::Timestamp(Some(value))
    }
}

impl From<Option<NaiveDateTime>> for JsonEntry {
    fn from(value: Option<NaiveDateTime>) -> Self {
        JsonEntry::Timestamp(value)
    }
}

impl Serialize for JsonEntry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use bigdecimal::ToPrimitive;
        use serde::ser::{Error as _, SerializeMap};

        match self {
            JsonEntry::Null => serializer.serialize_unit(),
            JsonEntry::Object(o) => o.serialize(serializer),
            JsonEntry::Array(a) => a.serialize(serializer),
            JsonEntry::String(s) => serializer.serialize_str(s),
            JsonEntry::Number(n) => {
                // serde has no decimal type: integers stay exact, fractions go through f64
                if n.is_integer() {
                    if let Some(i) = n.to_i64() {
                        return serializer.serialize_i64(i);
                    }
                    if let Some(u) = n.to_u64() {
                        return serializer.serialize_u64(u);
                    }
                }
                match n.to_f64() {
                    Some(f) if f.is_finite() => serializer.serialize_f64(f),
                    _ => Err(S::Error::custom(format!(
                        "number {} is out of range for serde",
                        n
                    ))),
                }
            }
            JsonEntry::Boolean(b) => serializer.serialize_bool(*b),
            JsonEntry::Binary(_) | JsonEntry::Date(_) | JsonEntry::Time(_) | JsonEntry::Timestamp(_) => {
                let marker = self.kind().marker().unwrap_or_default();
                let text = self.extended_text().flatten();
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(marker, &text)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonEntryVisitor;

        impl<'de> Visitor<'de> for JsonEntryVisitor {
            type Value = JsonEntry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                JsonEntry::from_f64(value).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::String(value))
            }

            fn visit_bytes<E>(self, value: &[u8]) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::Binary(Some(value.to_vec())))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(JsonEntry::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut array = JsonArray::new();
                while let Some(elem) = seq.next_element::<JsonEntry>()? {
                    array.add(elem);
                }
                Ok(JsonEntry::Array(array))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut object = JsonObject::new();
                while let Some((key, value)) = map.next_entry::<String, JsonEntry>()? {
                    object.put(key, value);
                }
                JsonEntry::from_object(object).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(JsonEntryVisitor)
    }
}
