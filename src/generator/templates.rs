//! @acp:module "Template Families"
//! @acp:summary "Per-type dispatch tables for markup, stylesheet and script"
//! @acp:domain generator
//! @acp:layer data
//!
//! Each artifact kind has its own table because not every type defines all
//! three. `None` selects the generic family. Liquid expressions inside the
//! templates are emitted verbatim and resolved by the theme at render time.

use crate::section_type::SectionType;

const GENERIC_MARKUP: &str = include_str!("../../templates/generic.liquid");
const GENERIC_STYLES: &str = include_str!("../../templates/generic.css");
const GENERIC_SCRIPT: &str = include_str!("../../templates/generic.js");

/// Section markup
pub fn markup_for(section_type: Option<SectionType>) -> &'static str {
    match section_type {
        Some(SectionType::Hero) => include_str!("../../templates/hero.liquid"),
        Some(SectionType::Features) => include_str!("../../templates/features.liquid"),
        Some(SectionType::Testimonials) => include_str!("../../templates/testimonials.liquid"),
        Some(SectionType::Gallery) => include_str!("../../templates/gallery.liquid"),
        Some(SectionType::Cta) => include_str!("../../templates/cta.liquid"),
        Some(SectionType::Contact) => include_str!("../../templates/contact.liquid"),
        Some(SectionType::Newsletter) => include_str!("../../templates/newsletter.liquid"),
        Some(SectionType::Stats) => include_str!("../../templates/stats.liquid"),
        None => GENERIC_MARKUP,
    }
}

/// Section stylesheet
pub fn stylesheet_for(section_type: Option<SectionType>) -> &'static str {
    match section_type {
        Some(SectionType::Hero) => include_str!("../../templates/hero.css"),
        Some(SectionType::Features) => include_str!("../../templates/features.css"),
        Some(SectionType::Testimonials) => include_str!("../../templates/testimonials.css"),
        Some(SectionType::Gallery) => include_str!("../../templates/gallery.css"),
        Some(SectionType::Cta) => include_str!("../../templates/cta.css"),
        Some(SectionType::Contact) => include_str!("../../templates/contact.css"),
        Some(SectionType::Newsletter) => include_str!("../../templates/newsletter.css"),
        Some(SectionType::Stats) => include_str!("../../templates/stats.css"),
        None => GENERIC_STYLES,
    }
}

/// Section behavior script. Features and CTA sections fall back to the
/// generic animate-on-scroll script.
pub fn script_for(section_type: Option<SectionType>) -> &'static str {
    match section_type {
        Some(SectionType::Hero) => include_str!("../../templates/hero.js"),
        Some(SectionType::Testimonials) => include_str!("../../templates/testimonials.js"),
        Some(SectionType::Gallery) => include_str!("../../templates/gallery.js"),
        Some(SectionType::Contact) => include_str!("../../templates/contact.js"),
        Some(SectionType::Newsletter) => include_str!("../../templates/newsletter.js"),
        Some(SectionType::Stats) => include_str!("../../templates/stats.js"),
        Some(SectionType::Features) | Some(SectionType::Cta) | None => GENERIC_SCRIPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_bespoke_markup_and_styles() {
        for t in SectionType::all() {
            assert_ne!(markup_for(Some(*t)), GENERIC_MARKUP, "{}", t);
            assert_ne!(stylesheet_for(Some(*t)), GENERIC_STYLES, "{}", t);
        }
    }

    #[test]
    fn test_script_fallbacks() {
        assert_eq!(script_for(Some(SectionType::Features)), GENERIC_SCRIPT);
        assert_eq!(script_for(Some(SectionType::Cta)), GENERIC_SCRIPT);
        assert_eq!(script_for(None), GENERIC_SCRIPT);
        assert_ne!(script_for(Some(SectionType::Hero)), GENERIC_SCRIPT);
        assert!(script_for(Some(SectionType::Stats)).contains(".stat-number"));
    }

    #[test]
    fn test_deferred_expressions_are_verbatim() {
        assert!(stylesheet_for(Some(SectionType::Hero))
            .contains("{{ section.settings.height | default: 500 }}px"));
        assert!(stylesheet_for(None).contains("{{ section.settings.background_color"));
    }
}
