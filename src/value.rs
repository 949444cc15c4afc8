//! Typed values exchanged with the database layer.
//!
//! [`Value`] is a closed union over twelve kinds ([`ValueType`]). Boolean,
//! numeric and string values always carry a payload: building one from
//! `None` substitutes the kind's default. Date, time, timestamp, binary,
//! array and object values may be null.
//!
//! ## Comparison
//!
//! [`Value::compare`] defines one ordering for all kinds:
//!
//! 1. Two numeric values (decimal, double, integer, long) compare by numeric
//!    value, whatever their kinds: `Double(2.0) == Integer(2)`.
//! 2. Two values of the same kind compare naturally, with null before
//!    non-null and two nulls equal.
//! 3. Booleans order `false < true`.
//! 4. Anything else fails with [`Error::NotComparable`].
//!
//! Equality and hashing follow the same rules, so `a == b` exactly when
//! `a.compare(&b)` is `Ok(Equal)`.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use chrono::NaiveDate;
//! use typed_json::{Error, Value};
//!
//! assert_eq!(Value::from(2.0), Value::from(2));
//! assert_eq!(
//!     Value::Date(None).compare(&Value::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())).unwrap(),
//!     Ordering::Less
//! );
//! assert!(matches!(
//!     Value::from("x").compare(&Value::Date(None)),
//!     Err(Error::NotComparable { .. })
//! ));
//! ```
//!
//! ## Accessors
//!
//! Each `get_*` accessor checks the kind and fails with
//! [`Error::TypeMismatch`] on disagreement. Numeric accessors accept every
//! numeric kind: widening is exact, narrowing truncates toward zero and
//! fails with [`Error::NumericOverflow`] when the result does not fit.
//!
//! ```rust
//! use typed_json::Value;
//!
//! let price = Value::from("19.99".parse::<bigdecimal::BigDecimal>().unwrap());
//! assert_eq!(price.get_integer().unwrap(), 19);
//! assert_eq!(price.get_double().unwrap(), 19.99);
//! assert!(price.get_string().is_err());
//! ```

use crate::entry::{decimal_from_f64, format_date, format_time, format_timestamp};
use crate::writer::{write_string, Writer};
use crate::{Error, JsonObject, Result, WriterOptions};
use bigdecimal::{BigDecimal, ToPrimitive};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The kind of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Boolean,
    Decimal,
    Double,
    Integer,
    Long,
    Date,
    Time,
    Timestamp,
    String,
    Binary,
    Array,
    Object,
}

impl ValueType {
    #[inline]
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            ValueType::Decimal | ValueType::Double | ValueType::Integer | ValueType::Long
        )
    }

    /// Returns `true` for kinds whose public constructors accept null.
    #[inline]
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(
            self,
            ValueType::Date
                | ValueType::Time
                | ValueType::Timestamp
                | ValueType::Binary
                | ValueType::Array
                | ValueType::Object
        )
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Boolean => "BOOLEAN",
            ValueType::Decimal => "DECIMAL",
            ValueType::Double => "DOUBLE",
            ValueType::Integer => "INTEGER",
            ValueType::Long => "LONG",
            ValueType::Date => "DATE",
            ValueType::Time => "TIME",
            ValueType::Timestamp => "TIMESTAMP",
            ValueType::String => "STRING",
            ValueType::Binary => "BINARY",
            ValueType::Array => "ARRAY",
            ValueType::Object => "OBJECT",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One typed datum.
///
/// `String(None)` is the null string, produced only by
/// [`Value::null_string`] and by the JSON bridge for a JSON `null`.
#[derive(Clone, Debug)]
pub enum Value {
    Boolean(bool),
    Decimal(BigDecimal),
    Double(f64),
    Integer(i32),
    Long(i64),
    Date(Option<NaiveDate>),
    Time(Option<NaiveTime>),
    Timestamp(Option<NaiveDateTime>),
    String(Option<String>),
    Binary(Option<Vec<u8>>),
    Array(Option<Vec<Value>>),
    Object(Option<JsonObject>),
}

/// Numeric magnitude used to compare and hash across numeric kinds.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
enum NumericKey {
    NegativeInfinity,
    Finite(BigDecimal),
    PositiveInfinity,
    NaN,
}

impl Value {
    /// The value a column of `kind` takes when no data was supplied.
    ///
    /// ```rust
    /// use typed_json::{Value, ValueType};
    ///
    /// assert_eq!(Value::default_for(ValueType::Long), Value::Long(0));
    /// assert_eq!(Value::default_for(ValueType::String).get_string().unwrap(), "");
    /// assert!(Value::default_for(ValueType::Date).is_null());
    /// ```
    #[must_use]
    pub fn default_for(kind: ValueType) -> Value {
        match kind {
            ValueType::Boolean => Value::Boolean(false),
            ValueType::Decimal => Value::Decimal(BigDecimal::from(0)),
            ValueType::Double => Value::Double(0.0),
            ValueType::Integer => Value::Integer(0),
            ValueType::Long => Value::Long(0),
            ValueType::Date => Value::Date(None),
            ValueType::Time => Value::Time(None),
            ValueType::Timestamp => Value::Timestamp(None),
            ValueType::String => Value::String(Some(String::new())),
            ValueType::Binary => Value::Binary(None),
            ValueType::Array => Value::Array(None),
            ValueType::Object => Value::Object(None),
        }
    }

    /// Builds a DECIMAL value, substituting zero at `scale` for `None`.
    ///
    /// ```rust
    /// use typed_json::Value;
    ///
    /// let zero = Value::decimal_or_zero(None, 2);
    /// assert_eq!(zero.to_string(), "0.00");
    /// ```
    #[must_use]
    pub fn decimal_or_zero(value: Option<BigDecimal>, scale: i64) -> Value {
        Value::Decimal(value.unwrap_or_else(|| BigDecimal::new(BigInt::from(0), scale)))
    }

    /// The STRING value with no payload, the bridge's image of JSON `null`.
    #[must_use]
    pub const fn null_string() -> Value {
        Value::String(None)
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Decimal(_) => ValueType::Decimal,
            Value::Double(_) => ValueType::Double,
            Value::Integer(_) => ValueType::Integer,
            Value::Long(_) => ValueType::Long,
            Value::Date(_) => ValueType::Date,
            Value::Time(_) => ValueType::Time,
            Value::Timestamp(_) => ValueType::Timestamp,
            Value::String(_) => ValueType::String,
            Value::Binary(_) => ValueType::Binary,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.value_type().is_numeric()
    }

    /// Returns `true` if the payload is absent.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(
            self,
            Value::Date(None)
                | Value::Time(None)
                | Value::Timestamp(None)
                | Value::String(None)
                | Value::Binary(None)
                | Value::Array(None)
                | Value::Object(None)
        )
    }

    pub fn get_boolean(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(mismatch(ValueType::Boolean, other)),
        }
    }

    /// Returns the numeric value as a decimal.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] for non-numeric kinds,
    /// [`Error::NonFiniteNumber`] for NaN and infinite doubles.
    pub fn get_decimal(&self) -> Result<BigDecimal> {
        match self {
            Value::Decimal(n) => Ok(n.clone()),
            Value::Double(d) => decimal_from_f64(*d),
            Value::Integer(i) => Ok(BigDecimal::from(*i)),
            Value::Long(l) => Ok(BigDecimal::from(*l)),
            other => Err(mismatch(ValueType::Decimal, other)),
        }
    }

    pub fn get_double(&self) -> Result<f64> {
        match self {
            Value::Double(d) => Ok(*d),
            Value::Integer(i) => Ok(f64::from(*i)),
            Value::Long(l) => Ok(*l as f64),
            Value::Decimal(n) => n
                .to_f64()
                .filter(|d| d.is_finite())
                .ok_or_else(|| Error::numeric_overflow("DOUBLE", n)),
            other => Err(mismatch(ValueType::Double, other)),
        }
    }

    pub fn get_integer(&self) -> Result<i32> {
        match self {
            Value::Integer(i) => Ok(*i),
            Value::Long(l) => i32::try_from(*l).map_err(|_| Error::numeric_overflow("INTEGER", l)),
            Value::Double(d) => truncate_f64(*d, f64::from(i32::MIN), f64::from(i32::MAX) + 1.0)
                .map(|t| t as i32)
                .ok_or_else(|| Error::numeric_overflow("INTEGER", d)),
            Value::Decimal(n) => truncate_decimal(n, 10)
                .and_then(|t| t.to_i32())
                .ok_or_else(|| Error::numeric_overflow("INTEGER", n)),
            other => Err(mismatch(ValueType::Integer, other)),
        }
    }

    pub fn get_long(&self) -> Result<i64> {
        match self {
            Value::Long(l) => Ok(*l),
            Value::Integer(i) => Ok(i64::from(*i)),
            // i64::MAX + 1 is exactly representable, i64::MAX is not
            Value::Double(d) => truncate_f64(*d, i64::MIN as f64, -(i64::MIN as f64))
                .map(|t| t as i64)
                .ok_or_else(|| Error::numeric_overflow("LONG", d)),
            Value::Decimal(n) => truncate_decimal(n, 19)
                .and_then(|t| t.to_i64())
                .ok_or_else(|| Error::numeric_overflow("LONG", n)),
            other => Err(mismatch(ValueType::Long, other)),
        }
    }

    pub fn get_date(&self) -> Result<Option<NaiveDate>> {
        match self {
            Value::Date(d) => Ok(*d),
            other => Err(mismatch(ValueType::Date, other)),
        }
    }

    pub fn get_time(&self) -> Result<Option<NaiveTime>> {
        match self {
            Value::Time(t) => Ok(*t),
            other => Err(mismatch(ValueType::Time, other)),
        }
    }

    pub fn get_timestamp(&self) -> Result<Option<NaiveDateTime>> {
        match self {
            Value::Timestamp(ts) => Ok(*ts),
            other => Err(mismatch(ValueType::Timestamp, other)),
        }
    }

    /// Returns the string payload; the null string reads as `""`.
    pub fn get_string(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s.as_deref().unwrap_or_default()),
            other => Err(mismatch(ValueType::String, other)),
        }
    }

    pub fn get_binary(&self) -> Result<Option<&[u8]>> {
        match self {
            Value::Binary(b) => Ok(b.as_deref()),
            other => Err(mismatch(ValueType::Binary, other)),
        }
    }

    pub fn get_array(&self) -> Result<Option<&[Value]>> {
        match self {
            Value::Array(a) => Ok(a.as_deref()),
            other => Err(mismatch(ValueType::Array, other)),
        }
    }

    pub fn get_object(&self) -> Result<Option<&JsonObject>> {
        match self {
            Value::Object(o) => Ok(o.as_ref()),
            other => Err(mismatch(ValueType::Object, other)),
        }
    }

    /// Orders two values.
    ///
    /// # Errors
    ///
    /// [`Error::NotComparable`] if the kinds cannot be reconciled; arrays
    /// propagate the error of the first non-comparable element pair.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
            (Value::Long(a), Value::Long(b)) => Ok(a.cmp(b)),
            (Value::Integer(a), Value::Long(b)) => Ok(i64::from(*a).cmp(b)),
            (Value::Long(a), Value::Integer(b)) => Ok(a.cmp(&i64::from(*b))),
            (Value::Double(a), Value::Double(b)) => Ok(compare_doubles(*a, *b)),
            (Value::Decimal(a), Value::Decimal(b)) => Ok(a.cmp(b)),
            (a, b) if a.is_numeric() && b.is_numeric() => Ok(a.numeric_key().cmp(&b.numeric_key())),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),
            // Option orders None before Some, which is the null rule
            (Value::Date(a), Value::Date(b)) => Ok(a.cmp(b)),
            (Value::Time(a), Value::Time(b)) => Ok(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Ok(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            (Value::Binary(a), Value::Binary(b)) => Ok(a.cmp(b)),
            (Value::Array(a), Value::Array(b)) => match (a, b) {
                (Some(a), Some(b)) => compare_elements(a, b),
                (a, b) => Ok(a.is_some().cmp(&b.is_some())),
            },
            (Value::Object(a), Value::Object(b)) => match (a, b) {
                (Some(a), Some(b)) => Ok(object_text(a).cmp(&object_text(b))),
                (a, b) => Ok(a.is_some().cmp(&b.is_some())),
            },
            (a, b) => Err(Error::not_comparable(a.value_type(), b.value_type())),
        }
    }

    /// Orders this value against a raw native value.
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use typed_json::Value;
    ///
    /// let amount = Value::from("10.50".parse::<bigdecimal::BigDecimal>().unwrap());
    /// assert_eq!(amount.compare_to(10).unwrap(), Ordering::Greater);
    /// assert_eq!(amount.compare_to(10.5).unwrap(), Ordering::Equal);
    /// assert!(amount.compare_to("10.50").is_err());
    /// ```
    pub fn compare_to(&self, raw: impl Into<Value>) -> Result<Ordering> {
        self.compare(&raw.into())
    }

    fn numeric_key(&self) -> NumericKey {
        match self {
            Value::Decimal(n) => NumericKey::Finite(n.clone()),
            Value::Integer(i) => NumericKey::Finite(BigDecimal::from(*i)),
            Value::Long(l) => NumericKey::Finite(BigDecimal::from(*l)),
            Value::Double(d) if d.is_nan() => NumericKey::NaN,
            Value::Double(d) if *d == f64::INFINITY => NumericKey::PositiveInfinity,
            Value::Double(d) if *d == f64::NEG_INFINITY => NumericKey::NegativeInfinity,
            Value::Double(d) => match decimal_from_f64(*d) {
                Ok(n) => NumericKey::Finite(n),
                Err(_) => NumericKey::NaN,
            },
            _ => NumericKey::NaN,
        }
    }
}

fn mismatch(expected: ValueType, found: &Value) -> Error {
    Error::type_mismatch(expected, found.value_type())
}

/// Truncates toward zero, or `None` when the integer part has more than
/// `max_digits` digits. Rescaling is bounded by `max_digits`, whatever the
/// exponent.
fn truncate_decimal(value: &BigDecimal, max_digits: i64) -> Option<BigDecimal> {
    let (_, scale) = value.as_bigint_and_exponent();
    let integer_digits = i64::try_from(value.digits()).ok()?.checked_sub(scale)?;
    if integer_digits <= 0 {
        return Some(BigDecimal::from(0));
    }
    if integer_digits > max_digits {
        return None;
    }
    Some(value.with_scale(0))
}

/// Truncates toward zero and checks `min <= t < max_exclusive`.
fn truncate_f64(value: f64, min: f64, max_exclusive: f64) -> Option<f64> {
    let t = value.trunc();
    (t.is_finite() && t >= min && t < max_exclusive).then_some(t)
}

/// `-inf < finite < +inf < NaN`, with NaN equal to itself.
fn compare_doubles(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn compare_elements(a: &[Value], b: &[Value]) -> Result<Ordering> {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.compare(y)? {
            Ordering::Equal => continue,
            unequal => return Ok(unequal),
        }
    }
    Ok(a.len().cmp(&b.len()))
}

fn object_text(object: &JsonObject) -> String {
    let options = WriterOptions::compact().with_max_depth(usize::MAX);
    let mut writer = Writer::new(options).allow_marker_objects();
    match writer.write_object(object) {
        Ok(()) => writer.into_inner(),
        Err(_) => String::new(),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Decimal(_) | Value::Double(_) | Value::Integer(_) | Value::Long(_) => {
                ValueType::Decimal.hash(state);
                match self.numeric_key() {
                    NumericKey::Finite(n) => {
                        0u8.hash(state);
                        n.normalized().hash(state);
                    }
                    NumericKey::NegativeInfinity => 1u8.hash(state),
                    NumericKey::PositiveInfinity => 2u8.hash(state),
                    NumericKey::NaN => 3u8.hash(state),
                }
            }
            other => {
                other.value_type().hash(state);
                match other {
                    Value::Boolean(b) => b.hash(state),
                    Value::Date(d) => d.hash(state),
                    Value::Time(t) => t.hash(state),
                    Value::Timestamp(ts) => ts.hash(state),
                    Value::String(s) => s.hash(state),
                    Value::Binary(b) => b.hash(state),
                    Value::Array(a) => a.hash(state),
                    Value::Object(o) => o.as_ref().map(object_text).hash(state),
                    Value::Decimal(_) | Value::Double(_) | Value::Integer(_) | Value::Long(_) => {}
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Decimal(n) => f.write_str(&n.to_plain_string()),
            Value::Double(d) => write!(f, "{}", d),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Long(l) => write!(f, "{}", l),
            Value::Date(Some(d)) => f.write_str(&format_date(d)),
            Value::Time(Some(t)) => f.write_str(&format_time(t)),
            Value::Timestamp(Some(ts)) => f.write_str(&format_timestamp(ts)),
            Value::String(Some(s)) => f.write_str(s),
            Value::Binary(Some(b)) => f.write_str(&hex::encode(b)),
            Value::Array(Some(items)) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    match item {
                        Value::String(Some(s)) => {
                            let mut quoted = String::with_capacity(s.len() + 2);
                            write_string(&mut quoted, s);
                            f.write_str(&quoted)?;
                        }
                        other => write!(f, "{}", other)?,
                    }
                }
                f.write_str("]")
            }
            Value::Object(Some(o)) => write!(f, "{}", o),
            Value::Date(None)
            | Value::Time(None)
            | Value::Timestamp(None)
            | Value::String(None)
            | Value::Binary(None)
            | Value::Array(None)
            | Value::Object(None) => f.write_str("null"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error as _;

        crate::bridge::to_json_entry(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entry = crate::JsonEntry::deserialize(deserializer)?;
        Ok(crate::bridge::to_value(&entry))
    }
}

// From implementations for creating values from native types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Option<bool>> for Value {
    fn from(value: Option<bool>) -> Self {
        Value::Boolean(value.unwrap_or(false))
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<Option<BigDecimal>> for Value {
    fn from(value: Option<BigDecimal>) -> Self {
        Value::decimal_or_zero(value, 0)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Decimal(BigDecimal::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<Option<f64>> for Value {
    fn from(value: Option<f64>) -> Self {
        Value::Double(value.unwrap_or(0.0))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<Option<i32>> for Value {
    fn from(value: Option<i32>) -> Self {
        Value::Integer(value.unwrap_or(0))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<Option<i64>> for Value {
    fn from(value: Option<i64>) -> Self {
        Value::Long(value.unwrap_or(0))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(Some(value))
    }
}

impl From<Option<NaiveDate>> for Value {
    fn from(value: Option<NaiveDate>) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::Time(Some(value))
    }
}

impl From<Option<NaiveTime>> for Value {
    fn from(value: Option<NaiveTime>) -> Self {
        Value::Time(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(Some(value))
    }
}

impl From<Option<NaiveDateTime>> for Value {
    fn from(value: Option<NaiveDateTime>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(Some(value))
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        Value::String(Some(value.unwrap_or_default()))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(Some(value.to_string()))
    }
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        Value::String(Some(value.unwrap_or_default().to_string()))
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Binary(Some(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Binary(Some(value.to_vec()))
    }
}

impl From<Option<Vec<u8>>> for Value {
    fn from(value: Option<Vec<u8>>) -> Self {
        Value::Binary(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(Some(value))
    }
}

impl From<Option<Vec<Value>>> for Value {
    fn from(value: Option<Vec<Value>>) -> Self {
        Value::Array(value)
    }
}

impl From<JsonObject> for Value {
    fn from(value: JsonObject) -> Self {
        Value::Object(Some(value))
    }
}

impl From<Option<JsonObject>> for Value {
    fn from(value: Option<JsonObject>) -> Self {
        Value::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn hash_of(value: &Value) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_null_inputs_coerce_to_defaults() {
        assert_eq!(Value::from(None::<bool>), Value::Boolean(false));
        assert_eq!(Value::from(None::<i32>), Value::Integer(0));
        assert_eq!(Value::from(None::<i64>), Value::Long(0));
        assert_eq!(Value::from(None::<f64>), Value::Double(0.0));
        assert_eq!(Value::from(None::<BigDecimal>), Value::Decimal(dec("0")));
        assert_eq!(Value::from(None::<String>).get_string().unwrap(), "");
        assert!(!Value::from(None::<&str>).is_null());
    }

    #[test]
    fn test_nullable_kinds_keep_null() {
        assert!(Value::from(None::<NaiveDate>).is_null());
        assert!(Value::from(None::<NaiveTime>).is_null());
        assert!(Value::from(None::<NaiveDateTime>).is_null());
        assert!(Value::from(None::<Vec<u8>>).is_null());
        assert!(Value::from(None::<Vec<Value>>).is_null());
        assert!(Value::from(None::<JsonObject>).is_null());
        assert_eq!(Value::Binary(None).get_binary().unwrap(), None);
    }

    #[test]
    fn test_default_table_covers_every_kind() {
        let kinds = [
            ValueType::Boolean,
            ValueType::Decimal,
            ValueType::Double,
            ValueType::Integer,
            ValueType::Long,
            ValueType::Date,
            ValueType::Time,
            ValueType::Timestamp,
            ValueType::String,
            ValueType::Binary,
            ValueType::Array,
            ValueType::Object,
        ];
        for kind in kinds {
            let value = Value::default_for(kind);
            assert_eq!(value.value_type(), kind);
            assert_eq!(value.is_null(), kind.is_nullable());
        }
        assert_eq!(Value::decimal_or_zero(None, 3).get_decimal().unwrap().to_string(), "0.000");
    }

    #[test]
    fn test_numeric_accessors_convert() {
        let d = Value::from(dec("-7.9"));
        assert_eq!(d.get_integer().unwrap(), -7);
        assert_eq!(d.get_long().unwrap(), -7);
        assert_eq!(d.get_double().unwrap(), -7.9);

        assert_eq!(Value::from(3.99).get_integer().unwrap(), 3);
        assert_eq!(Value::from(5).get_decimal().unwrap(), dec("5"));
        assert_eq!(Value::from(0.1).get_decimal().unwrap(), dec("0.1"));
        assert_eq!(Value::from(i64::MAX).get_double().unwrap(), i64::MAX as f64);
    }

    #[test]
    fn test_numeric_narrowing_overflow() {
        assert!(matches!(
            Value::from(i64::MAX).get_integer(),
            Err(Error::NumericOverflow { .. })
        ));
        assert!(Value::from(1e20).get_long().is_err());
        assert!(Value::from(f64::NAN).get_integer().is_err());
        assert!(Value::from(dec("1e30")).get_long().is_err());
        assert!(Value::from(dec("1e999999999")).get_long().is_err());
        assert!(Value::from(dec("-1e999999999")).get_integer().is_err());
        assert_eq!(Value::from(dec("1e-999999999")).get_long().unwrap(), 0);
        assert_eq!(Value::from(dec("9.9e-1")).get_integer().unwrap(), 0);
        assert_eq!(Value::from(dec("92233720368547758.07e2")).get_long().unwrap(), i64::MAX);
        assert!(Value::from(f64::INFINITY).get_decimal().is_err());
        assert_eq!(Value::from(-2147483648.9).get_integer().unwrap(), i32::MIN);
    }

    #[test]
    fn test_accessor_type_mismatch() {
        let s = Value::from("text");
        assert!(matches!(s.get_integer(), Err(Error::TypeMismatch { .. })));
        assert!(s.get_date().is_err());
        assert!(Value::from(true).get_string().is_err());
        assert!(Value::from(1).get_boolean().is_err());
    }

    #[test]
    fn test_cross_numeric_equality() {
        assert_eq!(Value::from(2.0), Value::from(2));
        assert_eq!(Value::from(2), Value::from(2i64));
        assert_eq!(Value::from(dec("2.000")), Value::from(2.0));
        assert_eq!(Value::from(0.1), Value::from(dec("0.1")));
        assert_ne!(Value::from(0.1), Value::from(0));
        assert_eq!(hash_of(&Value::from(2.0)), hash_of(&Value::from(dec("2.00"))));
        assert_eq!(hash_of(&Value::from(7)), hash_of(&Value::from(7i64)));
    }

    #[test]
    fn test_large_long_and_double_compare_exactly() {
        let long = Value::from(1i64 << 60);
        let double = Value::from((1i64 << 60) as f64);
        assert_eq!(long, double);
        assert_eq!(hash_of(&long), hash_of(&double));
        assert_eq!(double.get_decimal().unwrap(), BigDecimal::from(1i64 << 60));

        // shortest text of 2^60 as a double
        let shortest = Value::from(1_152_921_504_606_847_000i64);
        assert_eq!(shortest.compare(&double).unwrap(), Ordering::Greater);
        assert_ne!(shortest, double);

        let above = Value::from((1i64 << 53) + 1);
        let two_53 = Value::from((1i64 << 53) as f64);
        assert_eq!(above.compare(&two_53).unwrap(), Ordering::Greater);
        assert_eq!(two_53.compare(&Value::from(1i64 << 53)).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_non_finite_doubles_order() {
        let neg = Value::from(f64::NEG_INFINITY);
        let pos = Value::from(f64::INFINITY);
        let nan = Value::from(f64::NAN);
        let big = Value::from(dec("1e400"));

        assert!(neg < Value::from(i64::MIN));
        assert!(big < pos);
        assert!(pos < nan);
        assert_eq!(nan, Value::from(f64::NAN));
        assert_eq!(Value::from(f64::NAN).compare(&big).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_null_ordering() {
        let d = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(
            Value::Date(None).compare(&Value::from(d)).unwrap(),
            Ordering::Less
        );
        assert_eq!(Value::Date(None), Value::Date(None));
        assert!(Value::Binary(None) < Value::from(Vec::<u8>::new()));
        assert!(Value::Array(None) < Value::from(Vec::<Value>::new()));
        assert!(Value::Object(None) < Value::from(JsonObject::new()));
        assert!(Value::null_string() < Value::from(""));
    }

    #[test]
    fn test_not_comparable() {
        let err = Value::from("2024-01-15")
            .compare(&Value::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()))
            .unwrap_err();
        assert!(matches!(err, Error::NotComparable { .. }));
        assert!(Value::from(true).compare(&Value::from(1)).is_err());
        assert_ne!(Value::from("1"), Value::from(1));
        assert_eq!(Value::from("1").partial_cmp(&Value::from(1)), None);
    }

    #[test]
    fn test_binary_ordering() {
        let short = Value::from(vec![1u8, 2]);
        let long = Value::from(vec![1u8, 2, 0]);
        let high = Value::from(vec![1u8, 3]);
        assert!(short < long);
        assert!(long < high);
        assert_eq!(short, Value::from(&[1u8, 2][..]));
    }

    #[test]
    fn test_array_ordering() {
        let a = Value::from(vec![Value::from(1), Value::from("a")]);
        let b = Value::from(vec![Value::from(1.0), Value::from("b")]);
        let prefix = Value::from(vec![Value::from(1)]);
        assert!(a < b);
        assert!(prefix < a);
        assert_eq!(a, Value::from(vec![Value::from(1i64), Value::from("a")]));

        let mixed = Value::from(vec![Value::from(true)]);
        assert!(a.compare(&mixed).is_err());
    }

    #[test]
    fn test_object_ordering_by_text() {
        let mut x = JsonObject::new();
        x.put("a", 1);
        let mut y = JsonObject::new();
        y.put("a", 2);
        assert!(Value::from(x.clone()) < Value::from(y));
        assert_eq!(Value::from(x.clone()), Value::from(x));
    }

    #[test]
    fn test_compare_to_raw() {
        let v = Value::from(42);
        assert_eq!(v.compare_to(42.0).unwrap(), Ordering::Equal);
        assert_eq!(v.compare_to(dec("42.5")).unwrap(), Ordering::Less);
        assert!(v.compare_to("42").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(dec("1E+3")).to_string(), "1000");
        assert_eq!(Value::from(vec![0xde_u8, 0xad]).to_string(), "dead");
        assert_eq!(Value::Time(None).to_string(), "null");
        assert_eq!(
            Value::from(vec![Value::from(1), Value::from("x")]).to_string(),
            "[1,\"x\"]"
        );
    }
}
