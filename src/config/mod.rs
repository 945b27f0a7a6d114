//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config
//!
//! Optional `.sectiongen.json` in the project root. Command-line flags take
//! precedence over every field here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::DEFAULT_TEMPLATE_EXTENSION;

/// Default project config file name
pub const CONFIG_FILE: &str = ".sectiongen.json";

fn default_theme_path() -> PathBuf {
    PathBuf::from("shopify-theme")
}

fn default_use_advanced() -> bool {
    true
}

fn default_template_extension() -> String {
    DEFAULT_TEMPLATE_EXTENSION.to_string()
}

/// Section generator project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Theme root; sections are written to `{themePath}/sections/`
    #[serde(default = "default_theme_path")]
    pub theme_path: PathBuf,

    /// Catalog file; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Include advanced settings unless `--no-advanced` is passed
    #[serde(default = "default_use_advanced")]
    pub use_advanced: bool,

    #[serde(default = "default_template_extension")]
    pub template_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_path: default_theme_path(),
            catalog: None,
            use_advanced: default_use_advanced(),
            template_extension: default_template_extension(),
        }
    }
}

impl Config {
    /// Load config from a file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the given path, falling back to defaults if it is missing
    /// or invalid
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
