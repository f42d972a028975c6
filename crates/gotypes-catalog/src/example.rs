//! Example values attached to catalog entries.
//!
//! Examples are heterogeneous: a numeric type is illustrated with a number, a
//! slice with a list of strings, a struct with named fields. [`Example`] is a
//! closed set of variants, each serialized to the JSON kind it represents.

use std::collections::BTreeMap;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A numeric example literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed integer literal.
    Signed(i64),
    /// Unsigned integer literal.
    Unsigned(u64),
    /// Floating point literal.
    Float(f64),
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Signed(n) => serializer.serialize_i64(n),
            Number::Unsigned(n) => serializer.serialize_u64(n),
            Number::Float(n) => serializer.serialize_f64(n),
        }
    }
}

/// An example value for a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Example {
    /// Serialized as a JSON number.
    Number(Number),
    /// Serialized as a JSON string.
    Text(&'static str),
    /// Serialized as a JSON boolean.
    Boolean(bool),
    /// Ordered values, serialized as a JSON array.
    Sequence(Vec<Example>),
    /// Key-value pairs, serialized as a JSON object with sorted keys.
    Mapping(BTreeMap<&'static str, Example>),
    /// Named fields of a composite value, serialized as a JSON object in
    /// declaration order.
    Record(Vec<(&'static str, Example)>),
}

impl Example {
    /// Signed integer example.
    pub const fn signed(n: i64) -> Self {
        Example::Number(Number::Signed(n))
    }

    /// Unsigned integer example.
    pub const fn unsigned(n: u64) -> Self {
        Example::Number(Number::Unsigned(n))
    }

    /// Floating point example.
    pub const fn float(n: f64) -> Self {
        Example::Number(Number::Float(n))
    }

    /// Sequence built from any iterator of examples.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Example>,
    {
        Example::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Mapping built from key-value pairs. Later duplicates replace earlier ones.
    pub fn mapping<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<Example>,
    {
        Example::Mapping(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// Record built from named fields, kept in the given order.
    pub fn record<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Example)>,
    {
        Example::Record(fields.into_iter().collect())
    }

    /// Name of the JSON kind this example serializes to.
    pub fn json_kind(&self) -> &'static str {
        match self {
            Example::Number(_) => "number",
            Example::Text(_) => "string",
            Example::Boolean(_) => "boolean",
            Example::Sequence(_) => "array",
            Example::Mapping(_) | Example::Record(_) => "object",
        }
    }
}

impl From<&'static str> for Example {
    fn from(s: &'static str) -> Self {
        Example::Text(s)
    }
}

impl From<bool> for Example {
    fn from(b: bool) -> Self {
        Example::Boolean(b)
    }
}

impl From<Number> for Example {
    fn from(n: Number) -> Self {
        Example::Number(n)
    }
}

impl Serialize for Example {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Example::Number(n) => n.serialize(serializer),
            Example::Text(s) => serializer.serialize_str(s),
            Example::Boolean(b) => serializer.serialize_bool(*b),
            Example::Sequence(items) => items.serialize(serializer),
            Example::Mapping(entries) => entries.serialize(serializer),
            Example::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}
