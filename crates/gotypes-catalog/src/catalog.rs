//! Catalog types.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::example::Example;

/// Documentation record for one Go data type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeRecord {
    /// Semantics of the type, including its range where one applies.
    pub description: &'static str,
    /// A representative value.
    pub example: Example,
    /// Declaration or initialization snippet.
    pub usage: &'static str,
}

impl TypeRecord {
    /// Create a new record.
    pub fn new(description: &'static str, example: Example, usage: &'static str) -> Self {
        Self {
            description,
            example,
            usage,
        }
    }
}

/// Group a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Numeric,
    Text,
    Boolean,
    Complex,
    Composite,
    Special,
}

impl TypeCategory {
    /// All categories in catalog order.
    pub const ALL: [TypeCategory; 6] = [
        TypeCategory::Numeric,
        TypeCategory::Text,
        TypeCategory::Boolean,
        TypeCategory::Complex,
        TypeCategory::Composite,
        TypeCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Numeric => "numeric",
            TypeCategory::Text => "text",
            TypeCategory::Boolean => "boolean",
            TypeCategory::Complex => "complex",
            TypeCategory::Composite => "composite",
            TypeCategory::Special => "special",
        }
    }
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    category: TypeCategory,
    record: TypeRecord,
}

/// Mapping from type name to [`TypeRecord`].
///
/// Entries are kept in name order so that serialization is deterministic.
/// The category of each entry is tracked alongside but not serialized: the
/// JSON form is a plain object of `name -> record`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: BTreeMap<&'static str, Entry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    ///
    /// Names are unique; adding a name twice replaces the earlier record.
    pub fn with_entry(
        mut self,
        name: &'static str,
        category: TypeCategory,
        record: TypeRecord,
    ) -> Self {
        self.entries.insert(name, Entry { category, record });
        self
    }

    /// Look up a record by type name.
    pub fn get(&self, name: &str) -> Option<&TypeRecord> {
        self.entries.get(name).map(|e| &e.record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(name, record)` pairs in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TypeRecord)> + '_ {
        self.entries.iter().map(|(name, e)| (*name, &e.record))
    }

    /// Category of the named type, if present.
    pub fn category_of(&self, name: &str) -> Option<TypeCategory> {
        self.entries.get(name).map(|e| e.category)
    }

    /// Entries belonging to `category`, in ascending name order.
    pub fn in_category(
        &self,
        category: TypeCategory,
    ) -> impl Iterator<Item = (&'static str, &TypeRecord)> + '_ {
        self.entries
            .iter()
            .filter(move |(_, e)| e.category == category)
            .map(|(name, e)| (*name, &e.record))
    }
}

impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, &entry.record)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new()
            .with_entry(
                "bool",
                TypeCategory::Boolean,
                TypeRecord::new("true or false", Example::Boolean(true), "var ok bool = true"),
            )
            .with_entry(
                "int",
                TypeCategory::Numeric,
                TypeRecord::new("Signed integer", Example::signed(42), "var n int = 42"),
            )
    }

    #[test]
    fn test_lookup() {
        let catalog = sample();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.contains("int"));
        assert!(!catalog.contains("uint"));
        assert_eq!(catalog.get("int").unwrap().usage, "var n int = 42");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_entry_replaces_record() {
        let catalog = sample().with_entry(
            "int",
            TypeCategory::Special,
            TypeRecord::new("Replaced", Example::signed(7), "var n int = 7"),
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("int").unwrap().description, "Replaced");
        assert_eq!(catalog.category_of("int"), Some(TypeCategory::Special));
    }

    #[test]
    fn test_categories() {
        let catalog = sample();
        assert_eq!(catalog.category_of("bool"), Some(TypeCategory::Boolean));
        assert_eq!(catalog.category_of("missing"), None);

        let numeric: Vec<_> = catalog
            .in_category(TypeCategory::Numeric)
            .map(|(name, _)| name)
            .collect();
        assert_eq!(numeric, vec!["int"]);
        assert_eq!(catalog.in_category(TypeCategory::Special).count(), 0);
    }

    #[test]
    fn test_names_are_sorted() {
        let catalog = sample();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["bool", "int"]);
    }

    #[test]
    fn test_serializes_records_only() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"bool":{"description":"true or false","example":true,"usage":"var ok bool = true"},"int":{"description":"Signed integer","example":42,"usage":"var n int = 42"}}"#
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TypeCategory::Composite.to_string(), "composite");
        assert_eq!(
            serde_json::to_string(&TypeCategory::Special).unwrap(),
            r#""special""#
        );
    }
}
