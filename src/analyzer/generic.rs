//! @acp:module "Generic Configuration"
//! @acp:summary "Minimal configuration synthesized for types missing from the catalog"
//! @acp:domain analyzer
//! @acp:layer logic

use super::normalize::{capitalize_words, organize_settings};
use super::scoring::GENERIC_SCORE;
use super::tips::GENERIC_TIP;
use super::types::{IntelligenceReport, ReportOrigin};
use crate::catalog::{ChoiceOption, RawSetting, SectionTypeProfile, SettingKind};

/// Description used when neither the caller nor the catalog provides one
pub fn fallback_description(section_type: &str) -> String {
    format!("Custom {} section", section_type)
}

/// Profile with a heading, two colors and an entrance animation
pub fn generic_profile(section_type: &str) -> SectionTypeProfile {
    SectionTypeProfile {
        description: fallback_description(section_type),
        essential_settings: vec![RawSetting::new("heading", SettingKind::Text)
            .with_label("Section Heading")
            .with_default(format!("{} Section", capitalize_words(section_type)))],
        recommended_settings: vec![
            RawSetting::new("background_color", SettingKind::Color)
                .with_label("Background Color")
                .with_default("#ffffff"),
            RawSetting::new("text_color", SettingKind::Color)
                .with_label("Text Color")
                .with_default("#000000"),
        ],
        advanced_settings: vec![RawSetting::new("animation", SettingKind::Choice)
            .with_label("Animation Effect")
            .with_options(vec![
                ChoiceOption::new("none", "None"),
                ChoiceOption::new("fadeIn", "Fade In"),
            ])
            .with_default("fadeIn")],
        suggested_blocks: Vec::new(),
        common_use_cases: Vec::new(),
    }
}

/// Report for a type the catalog doesn't know
pub fn generic_report(section_type: &str) -> IntelligenceReport {
    let profile = generic_profile(section_type);
    let organized_settings = organize_settings(&profile);

    IntelligenceReport {
        section_type: section_type.to_string(),
        description: profile.description,
        origin: ReportOrigin::Generic,
        suggested_settings: organized_settings.suggested(),
        organized_settings,
        score: GENERIC_SCORE,
        optimization_tips: vec![GENERIC_TIP.to_string()],
        suggested_blocks: Vec::new(),
        common_use_cases: Vec::new(),
    }
}
