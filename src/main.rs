#![forbid(unsafe_code)]
//! Sectiongen Command Line Interface

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use sectiongen::commands::{
    execute_analyze, execute_generate, execute_list_types, AnalyzeOptions, GenerateOptions,
};
use sectiongen::config::CONFIG_FILE;
use sectiongen::{builtin_catalog, load_catalog_or_empty, Catalog, Config};

const EXAMPLES: &str = "\
Examples:
  sectiongen --name hero-banner --type hero --description \"Homepage hero\"
  sectiongen --name product-features --type features --no-advanced
  sectiongen --type hero --analyze --json
  sectiongen --list-types";

#[derive(Parser)]
#[command(name = "sectiongen")]
#[command(about = "Storefront section generator - settings intelligence, templates, styles and scripts")]
#[command(version)]
#[command(after_help = EXAMPLES)]
struct Cli {
    /// Section name, used as the file stem (e.g., hero-banner)
    #[arg(long, required_unless_present_any = ["list_types", "analyze"])]
    name: Option<String>,

    /// Section type (see --list-types)
    #[arg(long = "type", value_name = "TYPE", required_unless_present = "list_types")]
    section_type: Option<String>,

    /// Section description
    #[arg(long)]
    description: Option<String>,

    /// Theme root directory [default: shopify-theme]
    #[arg(long)]
    theme_path: Option<PathBuf>,

    /// Include advanced settings (default)
    #[arg(long, overrides_with = "no_advanced")]
    advanced: bool,

    /// Leave advanced settings out of the schema
    #[arg(long, overrides_with = "advanced")]
    no_advanced: bool,

    /// Catalog file (JSON or YAML); the built-in catalog is used otherwise
    #[arg(long, env = "SECTIONGEN_CATALOG")]
    catalog: Option<PathBuf>,

    /// Config file path
    #[arg(long, default_value = CONFIG_FILE)]
    config_file: PathBuf,

    /// Overwrite existing section files
    #[arg(short, long)]
    force: bool,

    /// Show what would be written without writing
    #[arg(long)]
    dry_run: bool,

    /// Print the intelligence report instead of generating
    #[arg(long)]
    analyze: bool,

    /// Print the report as JSON (with --analyze)
    #[arg(long, requires = "analyze")]
    json: bool,

    /// List available section types
    #[arg(long)]
    list_types: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}

/// Log to stderr; `SECTIONGEN_LOG` overrides the level chosen by `--verbose`
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SECTIONGEN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "sectiongen=debug"
        } else {
            "sectiongen=warn"
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(&cli.config_file);
    let catalog = resolve_catalog(cli.catalog.as_deref().or(config.catalog.as_deref()))?;

    if cli.list_types {
        return execute_list_types(&catalog);
    }

    let section_type = cli.section_type.context("--type is required")?;

    if cli.analyze {
        let options = AnalyzeOptions {
            section_type,
            json: cli.json,
        };
        return execute_analyze(options, &catalog);
    }

    let use_advanced = if cli.no_advanced {
        false
    } else if cli.advanced {
        true
    } else {
        config.use_advanced
    };

    let options = GenerateOptions {
        name: cli.name.context("--name is required")?,
        section_type,
        description: cli.description,
        theme_path: cli.theme_path.unwrap_or(config.theme_path),
        use_advanced,
        template_extension: config.template_extension,
        force: cli.force,
        dry_run: cli.dry_run,
    };
    execute_generate(options, &catalog)
}

/// The built-in catalog unless a catalog file is configured. A configured
/// file that fails to load is reported by the library and degrades to the
/// generic path.
fn resolve_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Ok(load_catalog_or_empty(path)),
        None => Ok(builtin_catalog()?),
    }
}
