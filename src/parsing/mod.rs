//! Catalog loading and boundary validation.
//!
//! Validation happens once here, before generation begins; the algorithm
//! layer assumes well-formed input. A load failure is a hard error,
//! distinct from the empty-but-valid result a generation call may return.

pub mod catalog_json;

pub use catalog_json::{load_catalog_str, CatalogError};
