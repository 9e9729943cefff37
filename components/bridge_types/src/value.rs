//! Plain value representation for data crossing the runtime boundary.
//!
//! Values handed to the JavaScript side must contain only primitives,
//! sequences, and string-keyed maps - no live object references. This module
//! provides that representation along with an insertion-ordered map type, so
//! payloads serialize with their keys in the order they were written.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that can be forwarded across the runtime boundary.
///
/// Mirrors the JSON data model: `Object` keys keep their insertion order so
/// that serialized payloads are stable and predictable for the consuming
/// runtime.
///
/// # Examples
///
/// ```
/// use bridge_types::BridgeValue;
///
/// let value = BridgeValue::from("hello");
/// assert_eq!(value.as_str(), Some("hello"));
/// assert!(!value.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeValue {
    /// Absent value; serializes as JSON `null`
    Null,
    /// Boolean value
    Bool(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Ordered sequence of values
    Array(Vec<BridgeValue>),
    /// String-keyed map with insertion-ordered keys
    Object(BridgeMap),
}

impl BridgeValue {
    /// Returns true if this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, BridgeValue::Null)
    }

    /// Returns the string slice if this value is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BridgeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this value is a `Number`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BridgeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this value is an `Array`.
    pub fn as_array(&self) -> Option<&[BridgeValue]> {
        match self {
            BridgeValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map if this value is an `Object`.
    pub fn as_object(&self) -> Option<&BridgeMap> {
        match self {
            BridgeValue::Object(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for BridgeValue {
    fn from(value: bool) -> Self {
        BridgeValue::Bool(value)
    }
}

impl From<f64> for BridgeValue {
    fn from(value: f64) -> Self {
        BridgeValue::Number(value)
    }
}

impl From<i32> for BridgeValue {
    fn from(value: i32) -> Self {
        BridgeValue::Number(f64::from(value))
    }
}

impl From<u32> for BridgeValue {
    fn from(value: u32) -> Self {
        BridgeValue::Number(f64::from(value))
    }
}

impl From<&str> for BridgeValue {
    fn from(value: &str) -> Self {
        BridgeValue::String(value.to_string())
    }
}

impl From<String> for BridgeValue {
    fn from(value: String) -> Self {
        BridgeValue::String(value)
    }
}

impl From<BridgeMap> for BridgeValue {
    fn from(value: BridgeMap) -> Self {
        BridgeValue::Object(value)
    }
}

impl<T: Into<BridgeValue>> From<Vec<T>> for BridgeValue {
    fn from(values: Vec<T>) -> Self {
        BridgeValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<BridgeValue>> From<Option<T>> for BridgeValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => BridgeValue::Null,
        }
    }
}

/// An insertion-ordered, string-keyed map of [`BridgeValue`]s.
///
/// Backed by a vector of pairs: lookups are linear, which is fine for the
/// handful of keys a bridge payload carries, and iteration order equals
/// insertion order. Inserting an existing key replaces the value in place
/// without moving the key.
///
/// # Examples
///
/// ```
/// use bridge_types::{BridgeMap, BridgeValue};
///
/// let mut map = BridgeMap::new();
/// map.insert("code", "E_IO");
/// map.insert("message", "disk full");
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("code"), Some(&BridgeValue::from("E_IO")));
/// let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec!["code", "message"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BridgeMap {
    entries: Vec<(String, BridgeValue)>,
}

impl BridgeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a key-value pair, replacing the value in place if the key
    /// already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<BridgeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&BridgeValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BridgeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Serialize for BridgeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            BridgeValue::Null => serializer.serialize_unit(),
            BridgeValue::Bool(b) => serializer.serialize_bool(*b),
            BridgeValue::Number(n) => serializer.serialize_f64(*n),
            BridgeValue::String(s) => serializer.serialize_str(s),
            BridgeValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            BridgeValue::Object(map) => map.serialize(serializer),
        }
    }
}

impl Serialize for BridgeMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct BridgeValueVisitor;

impl<'de> Visitor<'de> for BridgeValueVisitor {
    type Value = BridgeValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a bridge-transportable value")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BridgeValueVisitor)
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::Number(value as f64))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::Number(value as f64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::Number(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(BridgeValue::String(value))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(BridgeValue::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = BridgeMap::new();
        while let Some((key, value)) = access.next_entry::<String, BridgeValue>()? {
            map.insert(key, value);
        }
        Ok(BridgeValue::Object(map))
    }
}

impl<'de> Deserialize<'de> for BridgeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BridgeValueVisitor)
    }
}

impl<'de> Deserialize<'de> for BridgeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BridgeMapVisitor;

        impl<'de> Visitor<'de> for BridgeMapVisitor {
            type Value = BridgeMap;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string-keyed map of bridge values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = BridgeMap::new();
                while let Some((key, value)) = access.next_entry::<String, BridgeValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(BridgeMapVisitor)
    }
}
