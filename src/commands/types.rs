//! @acp:module "List Types Command"
//! @acp:summary "List the section types that can be generated"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::analyzer::Analyzer;
use crate::catalog::Catalog;
use crate::section_type::SectionType;

/// Execute the list-types command
pub fn execute_list_types(catalog: &Catalog) -> Result<()> {
    let analyzer = Analyzer::new(catalog);

    println!("{}", style("Section types:").bold());
    for section_type in SectionType::all() {
        let report = analyzer.analyze(section_type.as_str());
        let marker = if catalog.profile_error(section_type.as_str()).is_some() {
            style("✗").red()
        } else if report.is_generic() {
            style("○").dim()
        } else {
            style("●").green()
        };
        println!(
            "  {} {:<14} {:>3}/100  {}",
            marker,
            section_type.as_str(),
            report.score,
            section_type.summary()
        );
    }

    let extra: Vec<&str> = catalog
        .type_names()
        .filter(|name| SectionType::from_name(name).is_none())
        .collect();
    if !extra.is_empty() {
        println!(
            "\n  {} Catalog also describes: {} (analyze only)",
            style("→").cyan(),
            extra.join(", ")
        );
    }

    for (name, reason) in &catalog.rejected_profiles {
        println!(
            "  {} Catalog entry '{}' is malformed: {}",
            style("✗").red(),
            name,
            reason
        );
    }

    Ok(())
}
