//! @acp:module "Generator"
//! @acp:summary "Render the template, stylesheet and script for a section"
//! @acp:domain generator
//! @acp:layer feature
//!
//! Generation is pure: no filesystem or network access. Persisting the
//! bundle is left to [`crate::theme`].

pub mod liquid;
pub mod request;
pub mod schema;
pub mod templates;

pub use liquid::{compose_template, TemplateHeader};
pub use request::{GeneratedArtifactBundle, SectionBuildRequest};
pub use schema::{
    build_schema, preset_defaults, working_settings, Preset, SectionSchema, PRESET_CATEGORY,
};
pub use templates::{markup_for, script_for, stylesheet_for};

use crate::analyzer::{fallback_description, Analyzer, IntelligenceReport};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::section_type::SectionType;

/// Description for the build: the caller's if non-empty, then the report's,
/// then a generic one
pub fn resolve_description(request: &SectionBuildRequest, report: &IntelligenceReport) -> String {
    match request.description.as_deref() {
        Some(d) if !d.trim().is_empty() => d.to_string(),
        _ if !report.description.is_empty() => report.description.clone(),
        _ => fallback_description(&request.section_type),
    }
}

/// Generate the artifact bundle for a request from its intelligence report
pub fn generate(request: &SectionBuildRequest, report: &IntelligenceReport) -> GeneratedArtifactBundle {
    let family = SectionType::from_name(&request.section_type);
    if family.is_none() {
        tracing::debug!(
            "No template family for '{}', using generic templates",
            request.section_type
        );
    }

    let settings = working_settings(report, request.use_advanced_settings);
    let schema = build_schema(
        &request.name,
        &request.section_type,
        &settings,
        &report.suggested_blocks,
    );

    let description = resolve_description(request, report);
    let header = TemplateHeader {
        section_type: &request.section_type,
        description: &description,
        score: report.score,
    };

    let template_body = compose_template(&header, &schema, markup_for(family));

    tracing::debug!(
        "Generated '{}' ({}): {} settings, {} blocks",
        request.name,
        request.section_type,
        schema.settings.len(),
        schema.blocks.len()
    );

    GeneratedArtifactBundle {
        template_body,
        style_sheet: stylesheet_for(family).to_string(),
        behavior_script: script_for(family).to_string(),
        schema,
    }
}

/// Analyze-then-generate entry point over a shared catalog
#[derive(Debug, Clone, Copy)]
pub struct SectionBuilder<'a> {
    analyzer: Analyzer<'a>,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            analyzer: Analyzer::new(catalog),
        }
    }

    pub fn analyzer(&self) -> &Analyzer<'a> {
        &self.analyzer
    }

    /// Build a section from its name, type, optional description and
    /// advanced-settings flag
    pub fn generate_section(
        &self,
        name: &str,
        section_type: &str,
        description: Option<&str>,
        use_advanced: bool,
    ) -> GeneratedArtifactBundle {
        let mut request = SectionBuildRequest::new(name, section_type).with_advanced(use_advanced);
        request.description = description.map(str::to_string);

        let report = self.analyzer.analyze(section_type);
        generate(&request, &report)
    }

    /// Like [`SectionBuilder::generate_section`], but fails when the catalog
    /// entry for `section_type` was rejected as malformed
    pub fn try_generate_section(
        &self,
        name: &str,
        section_type: &str,
        description: Option<&str>,
        use_advanced: bool,
    ) -> Result<GeneratedArtifactBundle> {
        let mut request = SectionBuildRequest::new(name, section_type).with_advanced(use_advanced);
        request.description = description.map(str::to_string);

        let report = self.analyzer.try_analyze(section_type)?;
        Ok(generate(&request, &report))
    }
}
