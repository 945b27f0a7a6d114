//! @acp:module "Build Request"
//! @acp:summary "Generator input and output value types"
//! @acp:domain generator
//! @acp:layer types

use serde::Serialize;

use super::schema::SectionSchema;

/// Caller-supplied description of the section to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBuildRequest {
    /// Section name, also the file stem of the generated artifacts
    pub name: String,
    /// Section type, validated by the caller
    pub section_type: String,
    /// Overrides the catalog description when non-empty
    pub description: Option<String>,
    /// Include advanced-tier settings in the working set
    pub use_advanced_settings: bool,
}

impl SectionBuildRequest {
    /// Request with no description and advanced settings enabled
    pub fn new(name: impl Into<String>, section_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            section_type: section_type.into(),
            description: None,
            use_advanced_settings: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_advanced(mut self, use_advanced_settings: bool) -> Self {
        self.use_advanced_settings = use_advanced_settings;
        self
    }
}

/// Generated text artifacts for one section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifactBundle {
    /// Complete template file: info header, embedded schema, markup
    pub template_body: String,
    pub style_sheet: String,
    /// Empty when the type has no interactive behavior
    pub behavior_script: String,
    /// Schema embedded in `template_body`
    pub schema: SectionSchema,
}

impl GeneratedArtifactBundle {
    pub fn has_behavior_script(&self) -> bool {
        !self.behavior_script.is_empty()
    }
}
