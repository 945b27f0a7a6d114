#![forbid(unsafe_code)]

//! @acp:module "Sectiongen Library"
//! @acp:summary "Storefront section generator with catalog-driven settings intelligence"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Sectiongen
//!
//! Generates ready-to-use storefront theme sections: a template with an
//! embedded settings schema, a stylesheet and an optional behavior script.
//!
//! ## Features
//!
//! - **Settings Intelligence**: Prioritized settings, blocks and tips per section type
//! - **Graceful Degradation**: Unknown types and missing catalogs still generate
//! - **Pure Generation**: Artifacts are built in memory and written separately
//!
//! ## Example
//!
//! ```rust,no_run
//! use sectiongen::{builtin_catalog, save_section, SaveOptions, SectionBuilder};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let catalog = builtin_catalog()?;
//!     let bundle = SectionBuilder::new(&catalog)
//!         .generate_section("hero-banner", "hero", None, true);
//!
//!     save_section(&bundle, "hero-banner", Path::new("shopify-theme"), &SaveOptions::default())?;
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod section_type;
pub mod theme;

// Re-exports
pub use analyzer::{Analyzer, IntelligenceReport, PriorityTier, SettingDescriptor};
pub use catalog::{builtin_catalog, load_catalog, load_catalog_or_empty, Catalog};
pub use config::Config;
pub use error::{Result, SectionError};
pub use generator::{generate, GeneratedArtifactBundle, SectionBuildRequest, SectionBuilder};
pub use section_type::SectionType;
pub use theme::{preview_section, save_section, SaveOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
