//! @acp:module "Theme Writer"
//! @acp:summary "Persist generated sections into a theme's sections/ directory"
//! @acp:domain theme
//! @acp:layer io
//!
//! Writes `{name}.liquid`, `{name}.css` and, when the section has behavior,
//! `{name}.js`. The generated text is written unchanged.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use similar::TextDiff;

use crate::error::{Result, SectionError};
use crate::generator::GeneratedArtifactBundle;

/// Directory under the theme root that holds sections
pub const SECTIONS_DIR: &str = "sections";

/// Default extension of the template file
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "liquid";

/// Section names become file stems
static SECTION_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap());

/// Template extensions are a single lowercase word
static TEMPLATE_EXTENSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+$").unwrap());

/// Reject names that are not safe, lowercase file stems
pub fn validate_section_name(name: &str) -> Result<()> {
    if SECTION_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(SectionError::InvalidName(name.to_string()))
    }
}

/// Reject extensions that could leave the sections directory
pub fn validate_template_extension(extension: &str) -> Result<()> {
    if TEMPLATE_EXTENSION_PATTERN.is_match(extension) {
        Ok(())
    } else {
        Err(SectionError::InvalidExtension(extension.to_string()))
    }
}

/// Options for writing a section
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Replace files that already exist
    pub overwrite: bool,
    /// Template file extension, without the dot
    pub template_extension: String,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            template_extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
        }
    }
}

/// Files written for one section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSection {
    pub sections_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Target path and contents of each artifact; the script is skipped when empty
pub fn planned_files<'b>(
    bundle: &'b GeneratedArtifactBundle,
    name: &str,
    theme_path: &Path,
    template_extension: &str,
) -> Vec<(PathBuf, &'b str)> {
    let dir = theme_path.join(SECTIONS_DIR);
    let mut files = vec![
        (
            dir.join(format!("{}.{}", name, template_extension)),
            bundle.template_body.as_str(),
        ),
        (dir.join(format!("{}.css", name)), bundle.style_sheet.as_str()),
    ];
    if bundle.has_behavior_script() {
        files.push((dir.join(format!("{}.js", name)), bundle.behavior_script.as_str()));
    }
    files
}

/// Planned files that already exist on disk
pub fn existing_files(
    bundle: &GeneratedArtifactBundle,
    name: &str,
    theme_path: &Path,
    template_extension: &str,
) -> Vec<PathBuf> {
    planned_files(bundle, name, theme_path, template_extension)
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| path.exists())
        .collect()
}

/// Write a generated section under `{theme_path}/sections/`
pub fn save_section(
    bundle: &GeneratedArtifactBundle,
    name: &str,
    theme_path: &Path,
    options: &SaveOptions,
) -> Result<SavedSection> {
    validate_section_name(name)?;
    validate_template_extension(&options.template_extension)?;

    let files = planned_files(bundle, name, theme_path, &options.template_extension);

    if !options.overwrite {
        if let Some((path, _)) = files.iter().find(|(path, _)| path.exists()) {
            return Err(SectionError::FileExists(path.clone()));
        }
    }

    let sections_dir = theme_path.join(SECTIONS_DIR);
    if !sections_dir.exists() {
        std::fs::create_dir_all(&sections_dir)?;
        tracing::info!("Created {}", sections_dir.display());
    }

    let mut written = Vec::with_capacity(files.len());
    for (path, contents) in files {
        std::fs::write(&path, contents)?;
        tracing::info!("Wrote {} ({} bytes)", path.display(), contents.len());
        written.push(path);
    }

    Ok(SavedSection {
        sections_dir,
        files: written,
    })
}

/// What saving would do to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    New,
    Changed,
    Unchanged,
}

/// Dry-run result for one file
#[derive(Debug, Clone)]
pub struct FilePreview {
    pub path: PathBuf,
    pub status: FileStatus,
    /// Unified diff against the existing file, for changed files only
    pub diff: Option<String>,
}

/// Compare a generated section against what is on disk without writing
pub fn preview_section(
    bundle: &GeneratedArtifactBundle,
    name: &str,
    theme_path: &Path,
    template_extension: &str,
) -> Result<Vec<FilePreview>> {
    validate_section_name(name)?;
    validate_template_extension(template_extension)?;

    let mut previews = Vec::new();
    for (path, contents) in planned_files(bundle, name, theme_path, template_extension) {
        if !path.exists() {
            previews.push(FilePreview {
                path,
                status: FileStatus::New,
                diff: None,
            });
            continue;
        }

        let existing = std::fs::read_to_string(&path)?;
        if existing == contents {
            previews.push(FilePreview {
                path,
                status: FileStatus::Unchanged,
                diff: None,
            });
            continue;
        }

        let label = path.display().to_string();
        let diff = TextDiff::from_lines(existing.as_str(), contents)
            .unified_diff()
            .context_radius(3)
            .header(&format!("{} (current)", label), &format!("{} (generated)", label))
            .to_string();

        previews.push(FilePreview {
            path,
            status: FileStatus::Changed,
            diff: Some(diff),
        });
    }

    Ok(previews)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::generator::SectionBuilder;
    use tempfile::TempDir;

    fn hero_bundle() -> GeneratedArtifactBundle {
        let catalog = builtin_catalog().unwrap();
        SectionBuilder::new(&catalog).generate_section("hero-banner", "hero", None, true)
    }

    #[test]
    fn test_validate_section_name() {
        assert!(validate_section_name("hero-banner").is_ok());
        assert!(validate_section_name("stats_2").is_ok());
        assert!(validate_section_name("../escape").is_err());
        assert!(validate_section_name("Hero").is_err());
        assert!(validate_section_name("").is_err());
    }

    #[test]
    fn test_validate_template_extension() {
        assert!(validate_template_extension("liquid").is_ok());
        assert!(validate_template_extension("html5").is_ok());
        assert!(validate_template_extension("liquid/../../x").is_err());
        assert!(validate_template_extension("").is_err());
        assert!(validate_template_extension("Liquid").is_err());
    }

    #[test]
    fn test_save_rejects_escaping_extension() {
        let temp = TempDir::new().unwrap();
        let theme = temp.path().join("theme");
        let options = SaveOptions {
            template_extension: "liquid/../../x".to_string(),
            ..Default::default()
        };

        let err = save_section(&hero_bundle(), "hero-banner", &theme, &options).unwrap_err();
        assert!(matches!(err, SectionError::InvalidExtension(_)));
        assert!(!theme.exists());
        assert!(preview_section(&hero_bundle(), "hero-banner", &theme, "../x").is_err());
    }

    #[test]
    fn test_save_creates_sections_dir() {
        let temp = TempDir::new().unwrap();
        let theme = temp.path().join("shopify-theme");
        let bundle = hero_bundle();

        let saved = save_section(&bundle, "hero-banner", &theme, &SaveOptions::default()).unwrap();

        assert_eq!(saved.sections_dir, theme.join("sections"));
        assert_eq!(saved.files.len(), 3);
        let liquid = std::fs::read_to_string(theme.join("sections/hero-banner.liquid")).unwrap();
        assert_eq!(liquid, bundle.template_body);
        assert!(theme.join("sections/hero-banner.css").exists());
        assert!(theme.join("sections/hero-banner.js").exists());
    }

    #[test]
    fn test_save_skips_empty_script() {
        let temp = TempDir::new().unwrap();
        let mut bundle = hero_bundle();
        bundle.behavior_script.clear();

        let saved = save_section(&bundle, "plain", temp.path(), &SaveOptions::default()).unwrap();

        assert_eq!(saved.files.len(), 2);
        assert!(!temp.path().join("sections/plain.js").exists());
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let bundle = hero_bundle();
        save_section(&bundle, "hero-banner", temp.path(), &SaveOptions::default()).unwrap();

        let err = save_section(&bundle, "hero-banner", temp.path(), &SaveOptions::default())
            .unwrap_err();
        assert!(matches!(err, SectionError::FileExists(_)));

        let options = SaveOptions {
            overwrite: true,
            ..Default::default()
        };
        assert!(save_section(&bundle, "hero-banner", temp.path(), &options).is_ok());
    }

    #[test]
    fn test_preview_reports_status() {
        let temp = TempDir::new().unwrap();
        let bundle = hero_bundle();

        let fresh = preview_section(&bundle, "hero-banner", temp.path(), "liquid").unwrap();
        assert!(fresh.iter().all(|p| p.status == FileStatus::New));
        assert!(!temp.path().join("sections").exists());

        save_section(&bundle, "hero-banner", temp.path(), &SaveOptions::default()).unwrap();
        std::fs::write(temp.path().join("sections/hero-banner.css"), ".old {}\n").unwrap();

        let previews = preview_section(&bundle, "hero-banner", temp.path(), "liquid").unwrap();
        let css = previews
            .iter()
            .find(|p| p.path.ends_with("hero-banner.css"))
            .unwrap();
        assert_eq!(css.status, FileStatus::Changed);
        assert!(css.diff.as_deref().unwrap().contains("-.old {}"));

        let liquid = previews
            .iter()
            .find(|p| p.path.ends_with("hero-banner.liquid"))
            .unwrap();
        assert_eq!(liquid.status, FileStatus::Unchanged);
    }
}
