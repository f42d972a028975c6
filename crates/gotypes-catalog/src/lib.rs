//! Go data type catalog.
//!
//! This crate owns the fixed table of Go data types served by the catalog
//! service. Each entry maps a type name to a [`TypeRecord`] holding a
//! description, an example value and a usage snippet.
//!
//! The table is built once per process and shared read-only:
//!
//! ```
//! let catalog = gotypes_catalog::catalog();
//! let int = catalog.get("int").unwrap();
//! assert_eq!(int.usage, "var age int = 42");
//! ```

pub mod catalog;
pub mod example;
pub mod table;

pub use catalog::{Catalog, TypeCategory, TypeRecord};
pub use example::{Example, Number};
pub use table::{catalog, get_catalog, TYPE_NAMES};
