//! Insertion-ordered JSON objects.
//!
//! [`JsonObject`] wraps an [`IndexMap`] so that iteration, writing and
//! equality all follow insertion order. Re-inserting an existing key keeps
//! its original position.
//!
//! Lookups with [`JsonObject::get`] report an absent key as
//! [`Error::InvalidKey`]; [`JsonObject::remove`] treats absence as a normal
//! outcome and returns `None`.
//!
//! ## Examples
//!
//! ```rust
//! use typed_json::JsonObject;
//!
//! let mut obj = JsonObject::new();
//! obj.put("a", 1);
//! obj.put("b", 2);
//! obj.put("a", 3);
//!
//! let keys: Vec<_> = obj.keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! assert_eq!(obj.get("a").unwrap().as_number().unwrap().to_string(), "3");
//! assert!(obj.get("missing").is_err());
//! ```

use crate::{Error, JsonArray, JsonEntry, Result};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered map of string keys to JSON entries.
///
/// Two objects are equal when they hold the same keys in the same order
/// with equal entries.
#[derive(Debug, Clone, Default)]
pub struct JsonObject(IndexMap<String, JsonEntry>);

impl JsonObject {
    /// Creates an empty `JsonObject`.
    #[must_use]
    pub fn new() -> Self {
        JsonObject(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonObject(IndexMap::with_capacity(capacity))
    }

    /// Inserts or replaces the entry under `key`.
    ///
    /// If the object already contained this key, the old entry is returned
    /// and the key keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_json::JsonObject;
    ///
    /// let mut obj = JsonObject::new();
    /// assert!(obj.put("key", 42).is_none());
    /// assert!(obj.put("key", "text").is_some());
    /// ```
    pub fn put(&mut self, key: impl Into<String>, entry: impl Into<JsonEntry>) -> Option<JsonEntry> {
        self.0.insert(key.into(), entry.into())
    }

    pub fn put_null(&mut self, key: impl Into<String>) -> Option<JsonEntry> {
        self.put(key, JsonEntry::Null)
    }

    /// Inserts a double as a NUMBER entry.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteNumber`] for NaN and infinities.
    pub fn put_double(&mut self, key: impl Into<String>, value: f64) -> Result<Option<JsonEntry>> {
        let entry = JsonEntry::from_f64(value)?;
        Ok(self.put(key, entry))
    }

    /// Returns the entry stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&JsonEntry> {
        self.0.get(key).ok_or_else(|| Error::invalid_key(key))
    }

    /// Returns a mutable reference to the entry stored under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] if the key is absent.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut JsonEntry> {
        self.0.get_mut(key).ok_or_else(|| Error::invalid_key(key))
    }

    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_number(&self, key: &str) -> Result<&BigDecimal> {
        self.get(key)?.as_number()
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)?.as_bool()
    }

    pub fn get_object(&self, key: &str) -> Result<&JsonObject> {
        self.get(key)?.as_object()
    }

    pub fn get_array(&self, key: &str) -> Result<&JsonArray> {
        self.get(key)?.as_array()
    }

    pub fn get_binary(&self, key: &str) -> Result<Option<&[u8]>> {
        self.get(key)?.as_binary()
    }

    pub fn get_date(&self, key: &str) -> Result<Option<NaiveDate>> {
        self.get(key)?.as_date()
    }

    pub fn get_time(&self, key: &str) -> Result<Option<NaiveTime>> {
        self.get(key)?.as_time()
    }

    pub fn get_timestamp(&self, key: &str) -> Result<Option<NaiveDateTime>> {
        self.get(key)?.as_timestamp()
    }

    /// Removes `key`, returning its entry if it was present.
    ///
    /// The remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<JsonEntry> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Merges `other` into this object.
    ///
    /// Colliding keys take `other`'s entry and keep their current position;
    /// new keys are appended in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use typed_json::JsonObject;
    ///
    /// let mut left = JsonObject::new();
    /// left.put("a", 1);
    /// left.put("b", 2);
    /// let mut right = JsonObject::new();
    /// right.put("c", 3);
    /// right.put("a", 4);
    ///
    /// left.append(right);
    /// let keys: Vec<_> = left.keys().map(String::as_str).collect();
    /// assert_eq!(keys, ["a", "b", "c"]);
    /// assert_eq!(left.get_number("a").unwrap().to_string(), "4");
    /// ```
    pub fn append(&mut self, other: JsonObject) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, JsonEntry> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, JsonEntry> {
        self.0.values()
    }

    /// Returns an iterator over the key-entry pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonEntry> {
        self.0.iter()
    }
}

impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonEntry);
    type IntoIter = indexmap::map::IntoIter<String, JsonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonEntry);
    type IntoIter = indexmap::map::Iter<'a, String, JsonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<JsonEntry>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        JsonObject(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<JsonEntry>> Extend<(K, V)> for JsonObject {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl Serialize for JsonObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::{Error as _, SerializeMap};
        if let Some((kind, _)) = crate::entry::extended_wrapper(self) {
            let marker = kind.marker().unwrap_or_default();
            return Err(S::Error::custom(Error::ambiguous_object(marker)));
        }
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match JsonEntry::deserialize(deserializer)? {
            JsonEntry::Object(object) => Ok(object),
            other => Err(serde::de::Error::custom(Error::type_mismatch(
                crate::JsonType::Object,
                other.kind(),
            ))),
        }
    }
}
