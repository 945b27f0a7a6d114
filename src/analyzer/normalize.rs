//! @acp:module "Setting Normalization"
//! @acp:summary "Turn raw catalog settings into complete descriptors"
//! @acp:domain analyzer
//! @acp:layer logic

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Number, Value};

use super::types::{OrganizedSettings, PriorityTier, RangeBounds, SettingDescriptor};
use crate::catalog::{RawSetting, SectionTypeProfile, SettingKind};

/// Id used when a raw setting has neither `id` nor `name`
pub const FALLBACK_SETTING_ID: &str = "setting";

/// Separators replaced by spaces when deriving a label from an id
static SEPARATOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\-\s]+").unwrap());

/// Per-kind default value used when the catalog gives none
pub fn default_for_kind(kind: SettingKind) -> Value {
    match kind {
        SettingKind::Text => json!("Default text"),
        SettingKind::LongText => json!("Default description"),
        SettingKind::Color => json!("#000000"),
        SettingKind::Image => Value::Null,
        SettingKind::Url => json!("/"),
        SettingKind::Boolean => json!(false),
        SettingKind::NumericRange => json!(50),
        SettingKind::Choice => json!(""),
    }
}

/// Split on separators and capitalize each word ("heading_text" -> "Heading Text")
pub fn title_case(s: &str) -> String {
    SEPARATOR_PATTERN
        .split(s.trim())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize each run of letters and keep everything else in place
/// ("my_widget" -> "My_Widget")
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    out
}

/// Normalize a raw setting and tag it with the tier it was listed under
pub fn normalize_setting(raw: &RawSetting, tier: PriorityTier) -> SettingDescriptor {
    let kind = raw.kind.unwrap_or_default();

    let id = raw
        .id
        .as_deref()
        .or(raw.name.as_deref())
        .filter(|id| !id.is_empty())
        .unwrap_or(FALLBACK_SETTING_ID)
        .to_string();

    let label = match raw.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => title_case(&id),
    };

    let default_value = raw
        .default
        .clone()
        .unwrap_or_else(|| default_for_kind(kind));

    let choices = if kind == SettingKind::Choice {
        raw.options.clone()
    } else {
        Vec::new()
    };

    let range = (kind == SettingKind::NumericRange).then(|| RangeBounds {
        min: raw.min.clone().unwrap_or_else(|| Number::from(0)),
        max: raw.max.clone().unwrap_or_else(|| Number::from(100)),
        unit: raw.unit.clone().unwrap_or_default(),
    });

    SettingDescriptor {
        kind,
        id,
        label,
        default_value,
        is_required: raw.required.unwrap_or(false),
        help_text: raw.info.clone().unwrap_or_default(),
        priority_tier: tier,
        choices,
        range,
        validation_rule: raw.validation.clone(),
    }
}

/// Normalize all three tier lists of a profile.
///
/// Ids stay unique across the section: a later duplicate is dropped, so an
/// id listed as essential wins over the same id listed as advanced.
pub fn organize_settings(profile: &SectionTypeProfile) -> OrganizedSettings {
    let mut seen = HashSet::new();
    let mut organized = OrganizedSettings::default();

    let tiers = [
        (PriorityTier::Essential, &profile.essential_settings),
        (PriorityTier::Recommended, &profile.recommended_settings),
        (PriorityTier::Advanced, &profile.advanced_settings),
    ];

    for (tier, raw_settings) in tiers {
        for raw in raw_settings {
            let setting = normalize_setting(raw, tier);
            if !seen.insert(setting.id.clone()) {
                tracing::debug!("Dropping duplicate setting id '{}' ({})", setting.id, tier);
                continue;
            }
            match tier {
                PriorityTier::Essential => organized.essential.push(setting),
                PriorityTier::Recommended => organized.recommended.push(setting),
                PriorityTier::Advanced => organized.advanced.push(setting),
            }
        }
    }

    organized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ChoiceOption;

    #[test]
    fn test_label_derived_from_id() {
        let raw = RawSetting::new("heading_text", SettingKind::Text);
        let setting = normalize_setting(&raw, PriorityTier::Essential);
        assert_eq!(setting.label, "Heading Text");
        assert_eq!(setting.priority_tier, PriorityTier::Essential);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("widget"), "Widget");
        assert_eq!(title_case("hero-banner"), "Hero Banner");
        assert_eq!(title_case("BIG_news  item"), "Big News Item");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_capitalize_words_keeps_separators() {
        assert_eq!(capitalize_words("widget"), "Widget");
        assert_eq!(capitalize_words("my_widget"), "My_Widget");
        assert_eq!(capitalize_words("hero-banner"), "Hero-Banner");
        assert_eq!(capitalize_words("PROMO strip"), "Promo Strip");
        assert_eq!(capitalize_words("top10list"), "Top10List");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_default_table() {
        assert_eq!(default_for_kind(SettingKind::Text), json!("Default text"));
        assert_eq!(default_for_kind(SettingKind::LongText), json!("Default description"));
        assert_eq!(default_for_kind(SettingKind::Color), json!("#000000"));
        assert_eq!(default_for_kind(SettingKind::Image), Value::Null);
        assert_eq!(default_for_kind(SettingKind::Url), json!("/"));
        assert_eq!(default_for_kind(SettingKind::Boolean), json!(false));
        assert_eq!(default_for_kind(SettingKind::NumericRange), json!(50));
        assert_eq!(default_for_kind(SettingKind::Choice), json!(""));
    }

    #[test]
    fn test_missing_kind_and_id() {
        let raw = RawSetting {
            name: Some("promo_code".to_string()),
            ..Default::default()
        };
        let setting = normalize_setting(&raw, PriorityTier::Recommended);
        assert_eq!(setting.kind, SettingKind::Text);
        assert_eq!(setting.id, "promo_code");
        assert_eq!(setting.default_value, json!("Default text"));

        let anonymous = normalize_setting(&RawSetting::default(), PriorityTier::Advanced);
        assert_eq!(anonymous.id, FALLBACK_SETTING_ID);
        assert_eq!(anonymous.label, "Setting");
    }

    #[test]
    fn test_range_bounds_defaults() {
        let mut raw = RawSetting::new("height", SettingKind::NumericRange);
        raw.max = Some(Number::from(900));
        let setting = normalize_setting(&raw, PriorityTier::Advanced);

        let range = setting.range.expect("range bounds");
        assert_eq!(range.min, Number::from(0));
        assert_eq!(range.max, Number::from(900));
        assert_eq!(range.unit, "");
        assert_eq!(setting.default_value, json!(50));
    }

    #[test]
    fn test_options_only_kept_for_choice() {
        let options = vec![ChoiceOption::new("a", "A")];
        let text = RawSetting::new("t", SettingKind::Text).with_options(options.clone());
        let choice = RawSetting::new("c", SettingKind::Choice).with_options(options);

        assert!(normalize_setting(&text, PriorityTier::Essential).choices.is_empty());
        assert_eq!(normalize_setting(&choice, PriorityTier::Essential).choices.len(), 1);
    }

    #[test]
    fn test_organize_drops_duplicate_ids() {
        let profile = SectionTypeProfile {
            essential_settings: vec![RawSetting::new("heading", SettingKind::Text)],
            advanced_settings: vec![
                RawSetting::new("heading", SettingKind::LongText),
                RawSetting::new("animation", SettingKind::Choice),
            ],
            ..Default::default()
        };
        let organized = organize_settings(&profile);
        assert_eq!(organized.essential.len(), 1);
        assert_eq!(organized.advanced.len(), 1);
        assert_eq!(organized.advanced[0].id, "animation");
    }
}
