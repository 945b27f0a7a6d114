//! @acp:module "Section Types"
//! @acp:summary "The closed set of section types with bespoke templates"
//! @acp:domain cli
//! @acp:layer model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SectionError;

/// Section types the generator has bespoke artifacts for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    Features,
    Testimonials,
    Gallery,
    Cta,
    Contact,
    Newsletter,
    Stats,
}

impl SectionType {
    /// Get all supported section types
    pub fn all() -> &'static [SectionType] {
        &[
            SectionType::Hero,
            SectionType::Features,
            SectionType::Testimonials,
            SectionType::Gallery,
            SectionType::Cta,
            SectionType::Contact,
            SectionType::Newsletter,
            SectionType::Stats,
        ]
    }

    /// Get the identifier used on the command line and in the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Features => "features",
            SectionType::Testimonials => "testimonials",
            SectionType::Gallery => "gallery",
            SectionType::Cta => "cta",
            SectionType::Contact => "contact",
            SectionType::Newsletter => "newsletter",
            SectionType::Stats => "stats",
        }
    }

    /// Get a one-line description for listings
    pub fn summary(&self) -> &'static str {
        match self {
            SectionType::Hero => "Hero/banner section for homepage",
            SectionType::Features => "Features/benefits section",
            SectionType::Testimonials => "Customer testimonials section",
            SectionType::Gallery => "Image gallery section",
            SectionType::Cta => "Call-to-action section",
            SectionType::Contact => "Contact form section",
            SectionType::Newsletter => "Newsletter signup section",
            SectionType::Stats => "Statistics/numbers section",
        }
    }

    /// Parse a section type by exact identifier
    pub fn from_name(name: &str) -> Option<SectionType> {
        Self::all().iter().copied().find(|t| t.as_str() == name)
    }

    /// Comma-separated list of valid identifiers
    pub fn valid_names() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for SectionType {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SectionError::InvalidType {
            given: s.to_string(),
            valid: Self::valid_names(),
        })
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
