//! @acp:module "Catalog"
//! @acp:summary "Read-only catalog of known section types and their settings"
//! @acp:domain catalog
//! @acp:layer feature
//!
//! The catalog is loaded once and passed by reference to the analyzer.
//! A missing or malformed source degrades to an empty catalog.

pub mod loader;
pub mod types;

pub use loader::{builtin_catalog, load_catalog, load_catalog_or_empty, parse_catalog, CatalogFormat};
pub use types::*;
