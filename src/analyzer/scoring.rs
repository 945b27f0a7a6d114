//! @acp:module "Intelligence Scoring"
//! @acp:summary "Configuration richness score for a section type profile"
//! @acp:domain analyzer
//! @acp:layer logic

use crate::catalog::SectionTypeProfile;

pub const ESSENTIAL_POINTS: u32 = 30;
pub const RECOMMENDED_POINTS: u32 = 25;
pub const POINTS_PER_ADVANCED: u32 = 5;
pub const ADVANCED_CAP: u32 = 20;
pub const BLOCKS_POINTS: u32 = 15;
pub const USE_CASES_POINTS: u32 = 10;
pub const MAX_SCORE: u32 = 100;

/// Score fixed for types synthesized by the generic path
pub const GENERIC_SCORE: u8 = 25;

/// Calculate the intelligence score of a profile.
///
/// Measures how richly the type is configured, not whether the configuration
/// is correct: an empty profile scores 0, a fully furnished one 100.
pub fn calculate_score(profile: &SectionTypeProfile) -> u8 {
    let mut score = 0u32;

    if !profile.essential_settings.is_empty() {
        score += ESSENTIAL_POINTS;
    }

    if !profile.recommended_settings.is_empty() {
        score += RECOMMENDED_POINTS;
    }

    // Capped so a long tail of power-user options can't dominate
    let advanced = profile.advanced_settings.len() as u32;
    score += advanced.saturating_mul(POINTS_PER_ADVANCED).min(ADVANCED_CAP);

    if !profile.suggested_blocks.is_empty() {
        score += BLOCKS_POINTS;
    }

    if !profile.common_use_cases.is_empty() {
        score += USE_CASES_POINTS;
    }

    score.min(MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BlockTemplate, RawSetting, SettingKind};

    fn settings(n: usize) -> Vec<RawSetting> {
        (0..n)
            .map(|i| RawSetting::new(format!("s{}", i), SettingKind::Text))
            .collect()
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        assert_eq!(calculate_score(&SectionTypeProfile::default()), 0);
    }

    #[test]
    fn test_fully_furnished_profile_scores_hundred() {
        let profile = SectionTypeProfile {
            essential_settings: settings(2),
            recommended_settings: settings(2),
            advanced_settings: settings(4),
            suggested_blocks: vec![BlockTemplate {
                kind: "item".to_string(),
                name: "Item".to_string(),
                limit: None,
                settings: vec![],
            }],
            common_use_cases: vec!["Homepage".to_string()],
            ..Default::default()
        };
        assert_eq!(calculate_score(&profile), 100);
    }

    #[test]
    fn test_advanced_points_are_capped() {
        let two = SectionTypeProfile {
            advanced_settings: settings(2),
            ..Default::default()
        };
        let nine = SectionTypeProfile {
            advanced_settings: settings(9),
            ..Default::default()
        };
        assert_eq!(calculate_score(&two), 10);
        assert_eq!(calculate_score(&nine), 20);
    }

    #[test]
    fn test_partial_profile() {
        // 30 essential + 25 recommended + 10 use cases
        let profile = SectionTypeProfile {
            essential_settings: settings(1),
            recommended_settings: settings(1),
            common_use_cases: vec!["Landing page".to_string()],
            ..Default::default()
        };
        assert_eq!(calculate_score(&profile), 65);
    }
}
