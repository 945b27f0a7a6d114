//! @acp:module "Template Composition"
//! @acp:summary "Assemble the section template file around the embedded schema"
//! @acp:domain generator
//! @acp:layer output

use super::schema::SectionSchema;
use crate::analyzer::PriorityTier;

/// Facts about the build shown in the template's header comment
#[derive(Debug, Clone)]
pub struct TemplateHeader<'a> {
    pub section_type: &'a str,
    pub description: &'a str,
    pub score: u8,
}

/// Compose the full template: info comment, captured schema JSON, the
/// settings script tag and the type's markup
pub fn compose_template(header: &TemplateHeader<'_>, schema: &SectionSchema, markup: &str) -> String {
    let essential = schema
        .settings
        .iter()
        .filter(|s| s.priority_tier == PriorityTier::Essential)
        .count();

    let info = format!(
        "<!-- Section Intelligence Info:\n\
         Type: {section_type}\n\
         Description: {description}\n\
         Intelligence Score: {score}/100\n\
         Settings: {total} total ({essential} essential)\n\
         Blocks: {blocks} available\n\
         -->\n",
        section_type = header.section_type,
        description = header.description,
        score = header.score,
        total = schema.settings.len(),
        essential = essential,
        blocks = schema.blocks.len(),
    );

    format!(
        "{info}\n{{%- capture section_settings -%}}\n{schema}\n{{% endcapture -%}}\n\n\
         <script type=\"application/json\" data-section-type=\"{section_type}\" data-section-settings>\n  \
         {{{{ section_settings | raw }}}}\n</script>\n\n{markup}",
        info = info,
        schema = schema.to_json(),
        section_type = header.section_type,
        markup = markup,
    )
}
