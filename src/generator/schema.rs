//! @acp:module "Schema Assembly"
//! @acp:summary "Build the theme settings schema from the working set"
//! @acp:domain generator
//! @acp:layer logic

use serde::Serialize;
use serde_json::{Map, Value};

use crate::analyzer::{IntelligenceReport, PriorityTier, SettingDescriptor};
use crate::catalog::BlockTemplate;

/// Preset category shown in the theme editor
pub const PRESET_CATEGORY: &str = "Custom Sections";

/// Settings schema of a generated section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSchema {
    pub name: String,
    pub tag: String,
    pub class: String,
    pub settings: Vec<SettingDescriptor>,
    pub blocks: Vec<BlockTemplate>,
    pub presets: Vec<Preset>,
}

/// Default values offered when the merchant adds the section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub name: String,
    pub category: String,
    pub settings: Map<String, Value>,
}

impl SectionSchema {
    /// Ids of the schema settings in order
    pub fn setting_ids(&self) -> Vec<&str> {
        self.settings.iter().map(|s| s.id.as_str()).collect()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> String {
        // String-keyed maps of plain data always serialize
        match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize section schema: {}", e);
                String::from("{}")
            }
        }
    }
}

/// Settings included in one build: essential and recommended, plus advanced
/// when requested
pub fn working_settings(report: &IntelligenceReport, use_advanced: bool) -> Vec<SettingDescriptor> {
    let organized = &report.organized_settings;
    let mut settings = organized.suggested();
    if use_advanced {
        settings.extend(organized.advanced.iter().cloned());
    }
    settings
}

/// `{id: default}` for every setting whose default is not null
pub fn preset_defaults(settings: &[SettingDescriptor]) -> Map<String, Value> {
    settings
        .iter()
        .filter(|s| s.has_default())
        .map(|s| (s.id.clone(), s.default_value.clone()))
        .collect()
}

/// Assemble the schema for a section.
///
/// The schema and its preset are named after the section exactly as given.
/// Settings are regrouped by their own tier tag: essential and recommended
/// first, advanced appended after. The theme format has a single settings
/// list, so advanced settings share it.
pub fn build_schema(
    name: &str,
    section_type: &str,
    settings: &[SettingDescriptor],
    blocks: &[BlockTemplate],
) -> SectionSchema {
    let (advanced, primary): (Vec<_>, Vec<_>) = settings
        .iter()
        .cloned()
        .partition(|s| s.priority_tier == PriorityTier::Advanced);

    let css_name = format!("section-{}", section_type);

    SectionSchema {
        name: name.to_string(),
        tag: css_name.clone(),
        class: css_name,
        settings: primary.into_iter().chain(advanced).collect(),
        blocks: blocks.to_vec(),
        presets: vec![Preset {
            name: name.to_string(),
            category: PRESET_CATEGORY.to_string(),
            settings: preset_defaults(settings),
        }],
    }
}
