//! Ordered JSON arrays.

use crate::{Error, JsonEntry, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered, index-addressable list of JSON entries.
///
/// Positional operations report indices outside the array as
/// [`Error::IndexOutOfBounds`] instead of panicking.
///
/// # Examples
///
/// ```rust
/// use typed_json::JsonArray;
///
/// let mut arr = JsonArray::new();
/// arr.add(1);
/// arr.add("two");
/// arr.insert(0, true).unwrap();
///
/// assert_eq!(arr.len(), 3);
/// assert!(arr.get(0).unwrap().as_bool().unwrap());
/// assert!(arr.get(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonArray(Vec<JsonEntry>);

impl JsonArray {
    #[must_use]
    pub fn new() -> Self {
        JsonArray(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonArray(Vec::with_capacity(capacity))
    }

    /// Appends an entry.
    pub fn add(&mut self, entry: impl Into<JsonEntry>) {
        self.0.push(entry.into());
    }

    pub fn add_null(&mut self) {
        self.0.push(JsonEntry::Null);
    }

    /// Appends a double as a NUMBER entry.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteNumber`] for NaN and infinities.
    pub fn add_double(&mut self, value: f64) -> Result<()> {
        self.0.push(JsonEntry::from_f64(value)?);
        Ok(())
    }

    /// Inserts an entry at `index`, shifting later entries right.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, entry: impl Into<JsonEntry>) -> Result<()> {
        if index > self.0.len() {
            return Err(self.out_of_bounds(index));
        }
        self.0.insert(index, entry.into());
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&JsonEntry> {
        self.0.get(index).ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut JsonEntry> {
        let len = self.0.len();
        self.0
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Replaces the entry at `index`, returning the previous one.
    ///
    /// Unlike [`JsonEntry::replace`] the slot may change kind.
    pub fn set(&mut self, index: usize, entry: impl Into<JsonEntry>) -> Result<JsonEntry> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, entry.into()))
    }

    /// Removes the entry at `index`, shifting later entries left.
    pub fn remove(&mut self, index: usize) -> Result<JsonEntry> {
        if index >= self.0.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.0.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JsonEntry> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[JsonEntry] {
        &self.0
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.0.len(),
        }
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = crate::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Vec<JsonEntry>> for JsonArray {
    fn from(entries: Vec<JsonEntry>) -> Self {
        JsonArray(entries)
    }
}

impl From<JsonArray> for Vec<JsonEntry> {
    fn from(array: JsonArray) -> Self {
        array.0
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonEntry;
    type IntoIter = std::vec::IntoIter<JsonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonEntry;
    type IntoIter = std::slice::Iter<'a, JsonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: Into<JsonEntry>> FromIterator<E> for JsonArray {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        JsonArray(iter.into_iter().map(Into::into).collect())
    }
}

impl<E: Into<JsonEntry>> Extend<E> for JsonArray {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl Serialize for JsonArray {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for JsonArray {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match JsonEntry::deserialize(deserializer)? {
            JsonEntry::Array(array) => Ok(array),
            other => Err(serde::de::Error::custom(Error::type_mismatch(
                crate::JsonType::Array,
                other.kind(),
            ))),
        }
    }
}
