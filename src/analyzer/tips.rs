//! @acp:module "Optimization Tips"
//! @acp:summary "Hand-written advice per section type"
//! @acp:domain analyzer
//! @acp:layer data

const HERO_TIPS: &[&str] = &[
    "Use high-quality background images for better visual impact",
    "Keep heading text concise and compelling",
    "Consider adding a secondary CTA button for better conversion",
];

const FEATURES_TIPS: &[&str] = &[
    "Use consistent icon styles across all features",
    "Limit features to 3-6 for better readability",
    "Add hover effects to increase interactivity",
];

const TESTIMONIALS_TIPS: &[&str] = &[
    "Include customer photos for authenticity",
    "Use varied testimonial lengths for visual interest",
    "Consider adding company logos for B2B credibility",
];

const GALLERY_TIPS: &[&str] = &[
    "Optimize images for web to improve loading speed",
    "Use consistent aspect ratios for better grid layout",
    "Add alt text for better accessibility",
];

/// The single tip given to synthesized configurations
pub const GENERIC_TIP: &str = "Consider adding more specific settings for better customization";

/// Tips for a known section type; other types get none
pub fn optimization_tips(section_type: &str) -> Vec<String> {
    let tips: &[&str] = match section_type {
        "hero" => HERO_TIPS,
        "features" => FEATURES_TIPS,
        "testimonials" => TESTIMONIALS_TIPS,
        "gallery" => GALLERY_TIPS,
        _ => &[],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bespoke_tips() {
        for t in ["hero", "features", "testimonials", "gallery"] {
            assert_eq!(optimization_tips(t).len(), 3, "{}", t);
        }
    }

    #[test]
    fn test_other_types_have_no_tips() {
        assert!(optimization_tips("cta").is_empty());
        assert!(optimization_tips("stats").is_empty());
        assert!(optimization_tips("Hero").is_empty());
    }
}
