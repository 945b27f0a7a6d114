//! @acp:module "Analyzer Types"
//! @acp:summary "Normalized setting descriptors and the intelligence report"
//! @acp:domain analyzer
//! @acp:layer types

use serde::Serialize;
use serde_json::{Number, Value};
use std::fmt;

use crate::catalog::{BlockTemplate, ChoiceOption, SettingKind};

/// Priority tier of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    Essential,
    Recommended,
    Advanced,
}

impl PriorityTier {
    pub fn all() -> &'static [PriorityTier] {
        &[
            PriorityTier::Essential,
            PriorityTier::Recommended,
            PriorityTier::Advanced,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Essential => "essential",
            PriorityTier::Recommended => "recommended",
            PriorityTier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bounds for a range setting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeBounds {
    pub min: Number,
    pub max: Number,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

/// One configurable option, normalized and tagged with its tier.
///
/// Serializes to a theme schema setting entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingDescriptor {
    #[serde(rename = "type")]
    pub kind: SettingKind,

    pub id: String,

    pub label: String,

    /// `Null` only for image settings; omitted from the schema when null
    #[serde(rename = "default", skip_serializing_if = "Value::is_null")]
    pub default_value: Value,

    #[serde(rename = "required")]
    pub is_required: bool,

    #[serde(rename = "info", skip_serializing_if = "String::is_empty")]
    pub help_text: String,

    #[serde(rename = "category")]
    pub priority_tier: PriorityTier,

    #[serde(rename = "options", skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceOption>,

    #[serde(flatten)]
    pub range: Option<RangeBounds>,

    #[serde(rename = "validation", skip_serializing_if = "Option::is_none")]
    pub validation_rule: Option<Value>,
}

impl SettingDescriptor {
    pub fn has_default(&self) -> bool {
        !self.default_value.is_null()
    }
}

/// Settings grouped by tier, each list in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizedSettings {
    pub essential: Vec<SettingDescriptor>,
    pub recommended: Vec<SettingDescriptor>,
    pub advanced: Vec<SettingDescriptor>,
}

impl OrganizedSettings {
    /// Settings of one tier
    pub fn tier(&self, tier: PriorityTier) -> &[SettingDescriptor] {
        match tier {
            PriorityTier::Essential => &self.essential,
            PriorityTier::Recommended => &self.recommended,
            PriorityTier::Advanced => &self.advanced,
        }
    }

    /// Essential followed by recommended
    pub fn suggested(&self) -> Vec<SettingDescriptor> {
        self.essential
            .iter()
            .chain(&self.recommended)
            .cloned()
            .collect()
    }

    /// All settings, essential first and advanced last
    pub fn all(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.essential
            .iter()
            .chain(&self.recommended)
            .chain(&self.advanced)
    }

    pub fn len(&self) -> usize {
        self.essential.len() + self.recommended.len() + self.advanced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where a report's configuration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportOrigin {
    /// Known type, built from its catalog profile
    Catalog,
    /// Unknown type, synthesized on the fly
    Generic,
}

/// Analyzer output for one section type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceReport {
    pub section_type: String,
    pub description: String,
    pub origin: ReportOrigin,
    pub organized_settings: OrganizedSettings,
    /// Always `essential ⧺ recommended`
    pub suggested_settings: Vec<SettingDescriptor>,
    /// Configuration richness, 0-100
    pub score: u8,
    pub optimization_tips: Vec<String>,
    pub suggested_blocks: Vec<BlockTemplate>,
    pub common_use_cases: Vec<String>,
}

impl IntelligenceReport {
    pub fn is_generic(&self) -> bool {
        self.origin == ReportOrigin::Generic
    }
}
