//! @acp:module "Generate Command"
//! @acp:summary "Analyze a section type, generate its artifacts and write them to the theme"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::analyzer::{Analyzer, IntelligenceReport};
use crate::catalog::Catalog;
use crate::generator::{generate, SectionBuildRequest};
use crate::section_type::SectionType;
use crate::theme::{
    existing_files, preview_section, save_section, validate_section_name,
    validate_template_extension, FileStatus, SaveOptions, DEFAULT_TEMPLATE_EXTENSION,
};

/// How many tips and use cases are echoed to the terminal
const MAX_LISTED: usize = 3;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Section name (file stem)
    pub name: String,
    /// Section type, validated before anything is generated
    pub section_type: String,
    /// Section description
    pub description: Option<String>,
    /// Theme root directory
    pub theme_path: PathBuf,
    /// Include advanced settings
    pub use_advanced: bool,
    /// Template file extension
    pub template_extension: String,
    /// Overwrite existing files without asking
    pub force: bool,
    /// Show what would be written without writing
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            section_type: String::new(),
            description: None,
            theme_path: PathBuf::from("shopify-theme"),
            use_advanced: true,
            template_extension: DEFAULT_TEMPLATE_EXTENSION.to_string(),
            force: false,
            dry_run: false,
        }
    }
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, catalog: &Catalog) -> Result<()> {
    let section_type: SectionType = options.section_type.parse()?;
    validate_section_name(&options.name)?;
    validate_template_extension(&options.template_extension)?;

    let report = Analyzer::new(catalog).try_analyze(section_type.as_str())?;
    print_analysis(&report, &options);

    let request = SectionBuildRequest {
        name: options.name.clone(),
        section_type: section_type.as_str().to_string(),
        description: options.description.clone(),
        use_advanced_settings: options.use_advanced,
    };
    let bundle = generate(&request, &report);

    if options.dry_run {
        let previews = preview_section(
            &bundle,
            &options.name,
            &options.theme_path,
            &options.template_extension,
        )?;

        println!("\n{}", style("Dry run - no files written:").bold());
        for preview in previews {
            let marker = match preview.status {
                FileStatus::New => style("+ new").green(),
                FileStatus::Changed => style("~ changed").yellow(),
                FileStatus::Unchanged => style("= unchanged").dim(),
            };
            println!("  {} {}", marker, preview.path.display());
            if let Some(diff) = preview.diff {
                println!("{}", diff);
            }
        }
        return Ok(());
    }

    let existing = existing_files(
        &bundle,
        &options.name,
        &options.theme_path,
        &options.template_extension,
    );
    let overwrite = options.force || (!existing.is_empty() && confirm_overwrite(&existing)?);

    let save_options = SaveOptions {
        overwrite,
        template_extension: options.template_extension.clone(),
    };
    let saved = save_section(&bundle, &options.name, &options.theme_path, &save_options)
        .with_context(|| {
            format!(
                "Failed to write section '{}' (use --force to overwrite existing files)",
                options.name
            )
        })?;

    println!(
        "\n{} Section '{}' generated successfully!",
        style("✓").green(),
        options.name
    );
    for file in &saved.files {
        println!("    {}", file.display());
    }
    println!("  Files created in: {}/", saved.sections_dir.display());

    print_next_steps(&report);

    Ok(())
}

fn print_analysis(report: &IntelligenceReport, options: &GenerateOptions) {
    let settings = &report.organized_settings;

    println!(
        "{} Generating {} section: '{}'",
        style("→").cyan(),
        style(&report.section_type).bold(),
        options.name
    );
    println!("  Intelligence Score: {}/100", report.score);
    println!(
        "  Settings: {} essential, {} recommended",
        settings.essential.len(),
        settings.recommended.len()
    );
    if options.use_advanced {
        println!("  Advanced Settings: {}", settings.advanced.len());
    }
    println!("  Blocks: {}", report.suggested_blocks.len());

    if !report.optimization_tips.is_empty() {
        println!("\n{}", style("Optimization Tips:").bold());
        for tip in report.optimization_tips.iter().take(MAX_LISTED) {
            println!("  • {}", tip);
        }
    }
}

fn print_next_steps(report: &IntelligenceReport) {
    println!("\n{}", style("Next steps:").bold());
    println!("  1. Review and customize the generated files");
    println!("  2. Add the section to your theme's templates");
    println!("  3. Test in the theme editor");
    if !report.common_use_cases.is_empty() {
        let use_cases: Vec<&str> = report
            .common_use_cases
            .iter()
            .take(MAX_LISTED)
            .map(String::as_str)
            .collect();
        println!("  4. Perfect for: {}", use_cases.join(", "));
    }
}

/// Ask before replacing files; never overwrites when not attached to a terminal
fn confirm_overwrite(existing: &[PathBuf]) -> Result<bool> {
    eprintln!("{} These files already exist:", style("⚠").yellow());
    for path in existing {
        eprintln!("    {}", path.display());
    }

    if !Term::stdout().is_term() {
        return Ok(false);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Overwrite them?")
        .default(false)
        .interact()?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::theme::SECTIONS_DIR;
    use std::path::Path;
    use tempfile::TempDir;

    fn sections_dir(theme_path: &Path) -> PathBuf {
        theme_path.join(SECTIONS_DIR)
    }

    fn options(theme: &Path, section_type: &str) -> GenerateOptions {
        GenerateOptions {
            name: "test-section".to_string(),
            section_type: section_type.to_string(),
            theme_path: theme.to_path_buf(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_writes_files() {
        let temp = TempDir::new().unwrap();
        let catalog = builtin_catalog().unwrap();

        execute_generate(options(temp.path(), "testimonials"), &catalog).unwrap();

        let dir = sections_dir(temp.path());
        assert!(dir.join("test-section.liquid").exists());
        assert!(dir.join("test-section.css").exists());
        assert!(dir.join("test-section.js").exists());
    }

    #[test]
    fn test_invalid_type_rejected_before_generation() {
        let temp = TempDir::new().unwrap();
        let catalog = builtin_catalog().unwrap();

        let err = execute_generate(options(temp.path(), "widget"), &catalog).unwrap_err();
        assert!(err.to_string().contains("Invalid section type 'widget'"));
        assert!(!sections_dir(temp.path()).exists());
    }

    #[test]
    fn test_malformed_catalog_entry_fails_generation() {
        let temp = TempDir::new().unwrap();
        let catalog: Catalog = serde_json::from_str(
            r#"{"sectionTypes": {"stats": {"essentialSettings": [{"id": "count", "type": "number"}]}}}"#,
        )
        .unwrap();

        let err = execute_generate(options(temp.path(), "stats"), &catalog).unwrap_err();
        assert!(err.to_string().contains("'stats' is malformed"));
        assert!(!sections_dir(temp.path()).exists());

        assert!(execute_generate(options(temp.path(), "hero"), &catalog).is_ok());
    }

    #[test]
    fn test_invalid_extension_rejected_before_generation() {
        let temp = TempDir::new().unwrap();
        let catalog = builtin_catalog().unwrap();
        let opts = GenerateOptions {
            template_extension: "liquid/../../x".to_string(),
            ..options(temp.path(), "hero")
        };

        assert!(execute_generate(opts, &catalog).is_err());
        assert!(!temp.path().join("x").exists());
        assert!(!sections_dir(temp.path()).exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = builtin_catalog().unwrap();
        let opts = GenerateOptions {
            dry_run: true,
            ..options(temp.path(), "hero")
        };

        execute_generate(opts, &catalog).unwrap();
        assert!(!sections_dir(temp.path()).exists());
    }
}
