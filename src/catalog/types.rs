//! @acp:module "Catalog Types"
//! @acp:summary "Type definitions matching section-intelligence.json"
//! @acp:domain catalog
//! @acp:layer types

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Root catalog document: known section types keyed by type name.
///
/// Each profile is decoded on its own. An entry that fails to decode is kept
/// out of `section_types` and its error is remembered under the type name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CatalogDocument")]
pub struct Catalog {
    pub section_types: BTreeMap<String, SectionTypeProfile>,

    /// Reserved. Parsed and kept, never interpreted.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub intelligence_rules: Value,

    /// Decode errors of rejected profiles, keyed by type name
    #[serde(skip)]
    pub rejected_profiles: BTreeMap<String, String>,
}

/// Catalog as written on disk, before profiles are decoded
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    #[serde(default)]
    section_types: BTreeMap<String, Value>,

    #[serde(default)]
    intelligence_rules: Value,
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        let mut section_types = BTreeMap::new();
        let mut rejected_profiles = BTreeMap::new();

        for (name, raw) in document.section_types {
            match serde_json::from_value::<SectionTypeProfile>(raw) {
                Ok(profile) => {
                    section_types.insert(name, profile);
                }
                Err(e) => {
                    tracing::warn!("Skipping malformed catalog entry '{}': {}", name, e);
                    rejected_profiles.insert(name, e.to_string());
                }
            }
        }

        Self {
            section_types,
            intelligence_rules: document.intelligence_rules,
            rejected_profiles,
        }
    }
}

impl Catalog {
    /// Catalog with no known types; every lookup takes the generic path
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the profile for a section type
    pub fn lookup(&self, section_type: &str) -> Option<&SectionTypeProfile> {
        self.section_types.get(section_type)
    }

    pub fn contains(&self, section_type: &str) -> bool {
        self.section_types.contains_key(section_type)
    }

    /// Why the entry for `section_type` was rejected, if it was
    pub fn profile_error(&self, section_type: &str) -> Option<&str> {
        self.rejected_profiles.get(section_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.section_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.section_types.is_empty()
    }

    /// Known type names in sorted order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.section_types.keys().map(String::as_str)
    }
}

/// Catalog entry for one known section type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTypeProfile {
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub essential_settings: Vec<RawSetting>,

    #[serde(default)]
    pub recommended_settings: Vec<RawSetting>,

    #[serde(default)]
    pub advanced_settings: Vec<RawSetting>,

    #[serde(default)]
    pub suggested_blocks: Vec<BlockTemplate>,

    #[serde(default)]
    pub common_use_cases: Vec<String>,
}

/// Setting kind, serialized with the theme schema's type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SettingKind {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "textarea")]
    LongText,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "image_picker")]
    Image,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "checkbox")]
    Boolean,
    #[serde(rename = "range")]
    NumericRange,
    #[serde(rename = "select")]
    Choice,
}

impl SettingKind {
    /// Schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKind::Text => "text",
            SettingKind::LongText => "textarea",
            SettingKind::Color => "color",
            SettingKind::Image => "image_picker",
            SettingKind::Url => "url",
            SettingKind::Boolean => "checkbox",
            SettingKind::NumericRange => "range",
            SettingKind::Choice => "select",
        }
    }
}

/// One entry of a select setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A setting as written in the catalog; every field may be omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSetting {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SettingKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Legacy alias for `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Value>,
}

impl RawSetting {
    /// Minimal raw setting with an id and kind
    pub fn new(id: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = options;
        self
    }
}

/// Block template offered to merchants; passed through to the schema as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTemplate {
    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default)]
    pub settings: Vec<Value>,
}
