//! The Go data type table.

use once_cell::sync::Lazy;

use crate::catalog::{Catalog, TypeCategory, TypeRecord};
use crate::example::Example;

/// Every type name in the catalog, grouped by category.
pub const TYPE_NAMES: [&str; 26] = [
    // Numeric
    "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
    "float32", "float64",
    // Text
    "string", "rune", "byte",
    // Boolean
    "bool",
    // Complex
    "complex64", "complex128",
    // Composite
    "array", "slice", "map", "struct", "pointer",
    // Special
    "interface", "channel", "uintptr",
];

static CATALOG: Lazy<Catalog> = Lazy::new(build);

/// The process-wide catalog, built on first access.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// An owned copy of the catalog.
pub fn get_catalog() -> Catalog {
    catalog().clone()
}

#[allow(clippy::approx_constant)]
fn build() -> Catalog {
    use TypeCategory::*;

    Catalog::new()
        // Numeric
        .with_entry(
            "int",
            Numeric,
            TypeRecord::new(
                "Signed integer type (platform dependent size)",
                Example::signed(42),
                "var age int = 42",
            ),
        )
        .with_entry(
            "int8",
            Numeric,
            TypeRecord::new(
                "8-bit signed integer (-128 to 127)",
                Example::signed(127),
                "var temperature int8 = 127",
            ),
        )
        .with_entry(
            "int16",
            Numeric,
            TypeRecord::new(
                "16-bit signed integer (-32768 to 32767)",
                Example::signed(32767),
                "var year int16 = 2024",
            ),
        )
        .with_entry(
            "int32",
            Numeric,
            TypeRecord::new(
                "32-bit signed integer (-2147483648 to 2147483647)",
                Example::signed(2147483647),
                "var population int32 = 2147483647",
            ),
        )
        .with_entry(
            "int64",
            Numeric,
            TypeRecord::new(
                "64-bit signed integer",
                Example::signed(9223372036854775807),
                "var distance int64 = 9223372036854775807",
            ),
        )
        .with_entry(
            "uint",
            Numeric,
            TypeRecord::new(
                "Unsigned integer type (platform dependent size)",
                Example::unsigned(42),
                "var count uint = 42",
            ),
        )
        .with_entry(
            "uint8",
            Numeric,
            TypeRecord::new(
                "8-bit unsigned integer (0 to 255)",
                Example::unsigned(255),
                "var brightness uint8 = 255",
            ),
        )
        .with_entry(
            "uint16",
            Numeric,
            TypeRecord::new(
                "16-bit unsigned integer (0 to 65535)",
                Example::unsigned(65535),
                "var port uint16 = 65535",
            ),
        )
        .with_entry(
            "uint32",
            Numeric,
            TypeRecord::new(
                "32-bit unsigned integer (0 to 4294967295)",
                Example::unsigned(4294967295),
                "var fileSize uint32 = 4294967295",
            ),
        )
        .with_entry(
            "uint64",
            Numeric,
            TypeRecord::new(
                "64-bit unsigned integer",
                Example::unsigned(1844674407370955161),
                "var memory uint64 = 1844674407370955161",
            ),
        )
        .with_entry(
            "float32",
            Numeric,
            TypeRecord::new(
                "32-bit floating point number",
                Example::float(3.14159),
                "var pi float32 = 3.14159",
            ),
        )
        .with_entry(
            "float64",
            Numeric,
            TypeRecord::new(
                "64-bit floating point number",
                Example::float(3.14159265359),
                "var pi float64 = 3.14159265359",
            ),
        )
        // Text
        .with_entry(
            "string",
            Text,
            TypeRecord::new(
                "UTF-8 encoded text",
                Example::Text("Hello World"),
                "var message string = \"Hello World\"",
            ),
        )
        .with_entry(
            "rune",
            Text,
            TypeRecord::new(
                "UTF-8 character (alias for int32)",
                Example::Text("A"),
                "var letter rune = 'A'",
            ),
        )
        .with_entry(
            "byte",
            Text,
            TypeRecord::new("Alias for uint8", Example::unsigned(255), "var b byte = 255"),
        )
        // Boolean
        .with_entry(
            "bool",
            Boolean,
            TypeRecord::new("true or false", Example::Boolean(true), "var isActive bool = true"),
        )
        // Complex
        .with_entry(
            "complex64",
            Complex,
            TypeRecord::new(
                "Complex number with float32 real and imaginary parts",
                Example::Text("3+4i"),
                "var c complex64 = 3 + 4i",
            ),
        )
        .with_entry(
            "complex128",
            Complex,
            TypeRecord::new(
                "Complex number with float64 real and imaginary parts",
                Example::Text("3.14+4.2i"),
                "var c complex128 = 3.14 + 4.2i",
            ),
        )
        // Composite
        .with_entry(
            "array",
            Composite,
            TypeRecord::new(
                "Fixed-size sequence of elements",
                Example::sequence([1, 2, 3, 4, 5].map(Example::signed)),
                "var numbers [5]int = [5]int{1, 2, 3, 4, 5}",
            ),
        )
        .with_entry(
            "slice",
            Composite,
            TypeRecord::new(
                "Dynamic-size sequence of elements",
                Example::sequence(["elma", "armut", "muz"]),
                "var fruits []string = []string{\"elma\", \"armut\", \"muz\"}",
            ),
        )
        .with_entry(
            "map",
            Composite,
            TypeRecord::new(
                "Key-value pairs collection",
                Example::mapping([
                    ("bir", Example::signed(1)),
                    ("iki", Example::signed(2)),
                    ("üç", Example::signed(3)),
                ]),
                "var numbers map[string]int = map[string]int{\"bir\": 1, \"iki\": 2, \"üç\": 3}",
            ),
        )
        .with_entry(
            "struct",
            Composite,
            TypeRecord::new(
                "Collection of fields",
                Example::record([
                    ("Name", Example::Text("Samet")),
                    ("Age", Example::signed(30)),
                ]),
                "type Person struct { Name string; Age int }",
            ),
        )
        .with_entry(
            "pointer",
            Composite,
            TypeRecord::new(
                "Points to memory address of another value",
                Example::Text("&42"),
                "var ptr *int = &value",
            ),
        )
        // Special
        .with_entry(
            "interface",
            Special,
            TypeRecord::new(
                "Set of method signatures",
                Example::Text("interface{}"),
                "var any interface{} = 42",
            ),
        )
        .with_entry(
            "channel",
            Special,
            TypeRecord::new(
                "Communication between goroutines?",
                Example::Text("chan int"),
                "ch := make(chan int)",
            ),
        )
        .with_entry(
            "uintptr",
            Special,
            TypeRecord::new(
                "Unsigned integer to store pointer values",
                Example::unsigned(123456789),
                "var ptr uintptr = uintptr(unsafe.Pointer(&value))",
            ),
        )
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::{json, Value};

    use super::*;

    fn catalog_json() -> Value {
        serde_json::to_value(catalog()).unwrap()
    }

    #[test]
    fn test_catalog_has_every_type_name() {
        let catalog = catalog();
        assert_eq!(catalog.len(), TYPE_NAMES.len());
        for name in TYPE_NAMES {
            assert!(catalog.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_catalog_key_set_is_closed() {
        let expected: BTreeSet<&str> = TYPE_NAMES.iter().copied().collect();
        let actual: BTreeSet<&str> = catalog().names().collect();
        assert_eq!(expected.len(), TYPE_NAMES.len(), "duplicate in TYPE_NAMES");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_records_have_text() {
        for (name, record) in catalog().iter() {
            assert!(!record.description.is_empty(), "{name} has no description");
            assert!(!record.usage.is_empty(), "{name} has no usage");
        }
    }

    #[test]
    fn test_categories_partition_catalog() {
        let catalog = catalog();
        let sizes: Vec<usize> = TypeCategory::ALL
            .iter()
            .map(|c| catalog.in_category(*c).count())
            .collect();
        assert_eq!(sizes, vec![12, 3, 1, 2, 5, 3]);
        assert_eq!(sizes.iter().sum::<usize>(), catalog.len());

        assert_eq!(catalog.category_of("float64"), Some(TypeCategory::Numeric));
        assert_eq!(catalog.category_of("rune"), Some(TypeCategory::Text));
        assert_eq!(catalog.category_of("complex128"), Some(TypeCategory::Complex));
        assert_eq!(catalog.category_of("pointer"), Some(TypeCategory::Composite));
        assert_eq!(catalog.category_of("uintptr"), Some(TypeCategory::Special));
    }

    #[test]
    fn test_int_entry() {
        let int = catalog().get("int").unwrap();
        assert!(int.description.contains("Signed integer"));
        assert_eq!(int.usage, "var age int = 42");
        assert_eq!(int.example, Example::signed(42));
    }

    #[test]
    fn test_example_json_values() {
        let json = catalog_json();
        assert_eq!(json["bool"]["example"], json!(true));
        assert_eq!(json["slice"]["example"], json!(["elma", "armut", "muz"]));
        assert_eq!(json["map"]["example"], json!({"bir": 1, "iki": 2, "üç": 3}));
        assert_eq!(json["struct"]["example"], json!({"Name": "Samet", "Age": 30}));
        assert_eq!(json["array"]["example"], json!([1, 2, 3, 4, 5]));
        assert_eq!(json["int64"]["example"], json!(9223372036854775807_i64));
        assert_eq!(json["uint32"]["example"], json!(4294967295_u64));
        assert_eq!(json["complex64"]["example"], json!("3+4i"));
        assert_eq!(json["float32"]["example"], json!(3.14159));
    }

    #[test]
    fn test_example_json_kinds() {
        let json = catalog_json();
        for (name, record) in catalog().iter() {
            let value = &json[name]["example"];
            let kind = match value {
                Value::Number(_) => "number",
                Value::String(_) => "string",
                Value::Bool(_) => "boolean",
                Value::Array(_) => "array",
                Value::Object(_) => "object",
                Value::Null => "null",
            };
            assert_eq!(kind, record.example.json_kind(), "{name}");
        }
    }

    #[test]
    fn test_struct_example_field_order() {
        let text = serde_json::to_string(&catalog().get("struct").unwrap().example).unwrap();
        assert_eq!(text, r#"{"Name":"Samet","Age":30}"#);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let text = serde_json::to_string(catalog()).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        let object = parsed.as_object().unwrap();

        assert_eq!(object.len(), catalog().len());
        for (name, record) in catalog().iter() {
            let entry = &object[name];
            assert_eq!(entry["description"], json!(record.description));
            assert_eq!(entry["usage"], json!(record.usage));
            assert_eq!(entry["example"], serde_json::to_value(&record.example).unwrap());
            assert_eq!(entry.as_object().unwrap().len(), 3);
        }
    }

    #[test]
    fn test_catalog_is_shared() {
        assert!(std::ptr::eq(catalog(), catalog()));
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| catalog() as *const Catalog as usize))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), catalog() as *const Catalog as usize);
        }
    }

    #[test]
    fn test_serialization_is_stable() {
        let first = serde_json::to_vec(catalog()).unwrap();
        let second = serde_json::to_vec(&get_catalog()).unwrap();
        assert_eq!(first, second);
        assert_eq!(get_catalog(), *catalog());
    }
}
