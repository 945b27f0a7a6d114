//! @acp:module "Errors"
//! @acp:summary "Error taxonomy for catalog loading, validation and persistence"
//! @acp:domain cli
//! @acp:layer types
//!
//! The analyzer and generator never fail; everything here is raised either
//! while loading the catalog or at the CLI/persistence boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for section generation
#[derive(Error, Debug)]
pub enum SectionError {
    /// Catalog source missing or malformed. Recoverable: callers degrade to
    /// an empty catalog and every type takes the generic path.
    #[error("Section catalog unavailable at {path}: {reason}")]
    ConfigUnavailable { path: PathBuf, reason: String },

    /// Section type outside the supported enumeration
    #[error("Invalid section type '{given}'. Valid types: {valid}")]
    InvalidType { given: String, valid: String },

    /// Catalog entry for one section type that could not be decoded. The
    /// rest of the catalog stays usable.
    #[error("Catalog entry for section type '{section_type}' is malformed: {reason}")]
    MalformedProfile { section_type: String, reason: String },

    /// Section name that cannot be used as a file stem
    #[error("Invalid section name '{0}': use lowercase letters, digits, '-' or '_'")]
    InvalidName(String),

    /// Template extension that is not a plain lowercase word
    #[error("Invalid template extension '{0}': use lowercase letters and digits only")]
    InvalidExtension(String),

    /// Generated file already present and overwriting was not allowed
    #[error("Refusing to overwrite existing file {0}")]
    FileExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for section generation
pub type Result<T> = std::result::Result<T, SectionError>;

impl SectionError {
    /// Create a catalog-unavailable error
    pub fn config_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether the caller may continue with a degraded result
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConfigUnavailable { .. })
    }
}
