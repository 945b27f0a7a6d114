//! @acp:module "Catalog Loader"
//! @acp:summary "Load the section catalog from the built-in defaults or a project file"
//! @acp:domain catalog
//! @acp:layer io

use std::path::Path;

use super::types::Catalog;
use crate::error::{Result, SectionError};

/// Document syntax of a catalog source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from the file extension; anything unrecognised is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                CatalogFormat::Yaml
            }
            _ => CatalogFormat::Json,
        }
    }
}

/// Load the catalog compiled into the binary
pub fn builtin_catalog() -> Result<Catalog> {
    let json = include_str!("../../catalog/section-intelligence.json");
    Ok(serde_json::from_str(json)?)
}

/// Parse a catalog document from text
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Catalog> {
    let catalog = match format {
        CatalogFormat::Json => serde_json::from_str(text)?,
        CatalogFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(catalog)
}

/// Load a catalog from disk.
///
/// A missing or unreadable file, or a document that is not a catalog at all,
/// is reported as [`SectionError::ConfigUnavailable`] so the caller can log
/// it and continue with [`Catalog::empty`]. A single malformed profile only
/// rejects that entry; see [`Catalog::profile_error`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| SectionError::config_unavailable(path, e))?;

    let catalog = parse_catalog(&text, CatalogFormat::from_path(path))
        .map_err(|e| SectionError::config_unavailable(path, e))?;

    tracing::debug!(
        "Loaded {} section types from {} ({} rejected)",
        catalog.len(),
        path.display(),
        catalog.rejected_profiles.len()
    );
    Ok(catalog)
}

/// Load a catalog from disk, degrading to an empty catalog on failure
pub fn load_catalog_or_empty(path: &Path) -> Catalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("{}, using generic configuration", e);
            Catalog::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_covers_all_section_types() {
        let catalog = builtin_catalog().expect("Failed to load built-in catalog");
        for t in crate::section_type::SectionType::all() {
            assert!(catalog.contains(t.as_str()), "missing {}", t);
        }
    }

    #[test]
    fn test_missing_file_is_config_unavailable() {
        let err = load_catalog(Path::new("/nonexistent/section-intelligence.json")).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_malformed_json_is_config_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, SectionError::ConfigUnavailable { .. }));
        assert!(load_catalog_or_empty(file.path()).is_empty());
    }

    #[test]
    fn test_unknown_setting_kind_rejects_only_its_profile() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sectionTypes": {{"hero": {{"description": "Banner"}}, "stats": {{"essentialSettings": [{{"id": "x", "type": "slider"}}]}}}}}}"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert!(catalog.contains("hero"));
        assert!(catalog.profile_error("stats").is_some());
    }

    #[test]
    fn test_non_mapping_section_types_is_config_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"sectionTypes": ["hero"]}}"#).unwrap();

        assert!(load_catalog(file.path()).unwrap_err().is_recoverable());
    }

    #[test]
    fn test_yaml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "sectionTypes:").unwrap();
        writeln!(file, "  banner:").unwrap();
        writeln!(file, "    description: Banner strip").unwrap();
        writeln!(file, "    essentialSettings:").unwrap();
        writeln!(file, "      - id: message").unwrap();
        writeln!(file, "        type: text").unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        let profile = catalog.lookup("banner").unwrap();
        assert_eq!(profile.description, "Banner strip");
        assert_eq!(profile.essential_settings.len(), 1);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.yml")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("a.YAML")), CatalogFormat::Yaml);
        assert_eq!(CatalogFormat::from_path(Path::new("a.json")), CatalogFormat::Json);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), CatalogFormat::Json);
    }
}
