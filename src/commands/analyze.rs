//! @acp:module "Analyze Command"
//! @acp:summary "Print a section type's intelligence report without generating files"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::analyzer::{Analyzer, IntelligenceReport, PriorityTier, SettingDescriptor};
use crate::catalog::Catalog;

/// Options for the analyze command
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Section type; any name is accepted, unknown ones get the generic report
    pub section_type: String,
    /// Emit the report as JSON
    pub json: bool,
}

/// Execute the analyze command
pub fn execute_analyze(options: AnalyzeOptions, catalog: &Catalog) -> Result<()> {
    let section_type = options.section_type.trim();
    if section_type.is_empty() {
        anyhow::bail!("Section type must not be empty");
    }

    let report = Analyzer::new(catalog).try_analyze(section_type)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &IntelligenceReport) {
    println!(
        "{} {} - {}",
        style("→").cyan(),
        style(&report.section_type).bold(),
        report.description
    );
    if report.is_generic() {
        println!(
            "  {} Not in the catalog, showing generic settings",
            style("⚠").yellow()
        );
    }
    println!("  Intelligence Score: {}/100", report.score);

    for tier in PriorityTier::all() {
        let settings = report.organized_settings.tier(*tier);
        if settings.is_empty() {
            continue;
        }
        println!("\n  {} ({}):", style(tier.as_str()).bold(), settings.len());
        for setting in settings {
            println!("    {}", describe_setting(setting));
        }
    }

    if !report.suggested_blocks.is_empty() {
        println!("\n  {}:", style("blocks").bold());
        for block in &report.suggested_blocks {
            match block.limit {
                Some(limit) => println!("    {} ({}, max {})", block.name, block.kind, limit),
                None => println!("    {} ({})", block.name, block.kind),
            }
        }
    }

    if !report.optimization_tips.is_empty() {
        println!("\n  {}:", style("tips").bold());
        for tip in &report.optimization_tips {
            println!("    • {}", tip);
        }
    }

    if !report.common_use_cases.is_empty() {
        println!("\n  Perfect for: {}", report.common_use_cases.join(", "));
    }
}

fn describe_setting(setting: &SettingDescriptor) -> String {
    let mut line = format!("{} [{}] {}", setting.id, setting.kind.as_str(), setting.label);
    if setting.is_required {
        line.push_str(" *");
    }
    if setting.has_default() {
        line.push_str(&format!(" = {}", setting.default_value));
    }
    line
}
