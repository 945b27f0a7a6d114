//! @acp:module "Analyzer"
//! @acp:summary "Section type analysis: tiered settings, score, tips and blocks"
//! @acp:domain analyzer
//! @acp:layer feature
//!
//! # Analysis
//!
//! [`Analyzer::analyze`] never fails. Known types are built from their
//! catalog profile:
//! 1. Each tier list is normalized into [`SettingDescriptor`]s
//! 2. The profile is scored for configuration richness (0-100)
//! 3. Bespoke optimization tips are attached where they exist
//!
//! Unknown types get a synthesized configuration with a fixed score of 25.
//! [`Analyzer::try_analyze`] additionally refuses types whose catalog entry
//! was rejected as malformed.

pub mod generic;
pub mod normalize;
pub mod scoring;
pub mod tips;
pub mod types;

pub use generic::{fallback_description, generic_report};
pub use normalize::{
    capitalize_words, default_for_kind, normalize_setting, organize_settings, title_case,
};
pub use scoring::calculate_score;
pub use tips::optimization_tips;
pub use types::*;

use crate::catalog::Catalog;
use crate::error::{Result, SectionError};

/// Stateless analyzer over a borrowed catalog
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Analyzer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Like [`Analyzer::analyze`], but fails when the catalog entry for
    /// `section_type` exists and was rejected as malformed
    pub fn try_analyze(&self, section_type: &str) -> Result<IntelligenceReport> {
        if let Some(reason) = self.catalog.profile_error(section_type) {
            return Err(SectionError::MalformedProfile {
                section_type: section_type.to_string(),
                reason: reason.to_string(),
            });
        }
        Ok(self.analyze(section_type))
    }

    /// Produce the intelligence report for a section type
    pub fn analyze(&self, section_type: &str) -> IntelligenceReport {
        let Some(profile) = self.catalog.lookup(section_type) else {
            if self.catalog.profile_error(section_type).is_some() {
                tracing::warn!(
                    "Catalog entry for '{}' is malformed, using generic configuration",
                    section_type
                );
            } else {
                tracing::debug!("'{}' not in catalog, using generic configuration", section_type);
            }
            return generic_report(section_type);
        };

        let organized_settings = organize_settings(profile);
        let score = calculate_score(profile);

        tracing::debug!(
            "Analyzed '{}': {} essential, {} recommended, {} advanced, score {}",
            section_type,
            organized_settings.essential.len(),
            organized_settings.recommended.len(),
            organized_settings.advanced.len(),
            score
        );

        let description = if profile.description.is_empty() {
            fallback_description(section_type)
        } else {
            profile.description.clone()
        };

        IntelligenceReport {
            section_type: section_type.to_string(),
            description,
            origin: ReportOrigin::Catalog,
            suggested_settings: organized_settings.suggested(),
            organized_settings,
            score,
            optimization_tips: optimization_tips(section_type),
            suggested_blocks: profile.suggested_blocks.clone(),
            common_use_cases: profile.common_use_cases.clone(),
        }
    }
}
