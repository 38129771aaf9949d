// SPDX-License-Identifier: PMPL-1.0-or-later

//! soundboard-catalog: generate and validate the soundboard localization plist

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use soundboard_catalog::config::{CatalogConfig, ValidateOverrides};
use soundboard_catalog::generate;
use soundboard_catalog::report::{self, ReportFormatter};
use soundboard_catalog::validate::{self, Role};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "soundboard-catalog")]
#[command(version)]
#[command(about = "Generate and validate the multilingual SoundboardCategories.plist")]
#[command(long_about = None)]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file [default: ./soundboard.yaml when present]
    #[arg(long, global = true, env = "SOUNDBOARD_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in catalog to the document path (overwrites)
    Generate {
        /// Document path [default: Resources/SoundboardCategories.plist]
        #[arg(short, long, env = "SOUNDBOARD_PLIST", value_name = "FILE")]
        path: Option<PathBuf>,
    },

    /// Check a document; exits 1 if any check fails
    Validate {
        /// Document path [default: Resources/SoundboardCategories.plist]
        #[arg(short, long, env = "SOUNDBOARD_PLIST", value_name = "FILE")]
        path: Option<PathBuf>,

        /// Report shape and default minimum language count
        #[arg(short, long, value_enum, default_value_t = Role::Structure)]
        role: Role,

        /// Languages every category must list (coverage role: 28)
        #[arg(long, value_name = "N")]
        min_languages: Option<usize>,

        /// Category id that must be present (repeatable; replaces the built-in list)
        #[arg(long = "expect", value_name = "CATEGORY")]
        expect: Vec<String>,

        /// Do not fail on repeated category ids
        #[arg(long)]
        allow_duplicate_ids: bool,

        /// Also save the report as JSON
        #[arg(short = 'o', long, value_name = "FILE")]
        report: Option<PathBuf>,
    },

    /// List the catalog languages
    Languages,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CatalogConfig::discover(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Generate { path } => {
            let path = config.document_path(path.as_deref());
            let summary = generate::generate_default(&path)
                .with_context(|| format!("generating {}", path.display()))?;
            ReportFormatter::new().print_generated(&summary);
        }

        Commands::Validate {
            path,
            role,
            min_languages,
            expect,
            allow_duplicate_ids,
            report: report_path,
        } => {
            let path = config.document_path(path.as_deref());
            let overrides = ValidateOverrides {
                min_languages,
                expected_categories: expect,
                allow_duplicate_ids,
            };
            let validation = config.validation(role, &overrides);

            let outcome = match validate::validate_file(&path, &validation) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{} {}", "[ERR]".red().bold(), e);
                    process::exit(1);
                }
            };

            report::print_report(&outcome);
            if let Some(output_path) = report_path {
                report::save_report(&outcome, output_path)?;
            }
            if !outcome.passed() {
                process::exit(1);
            }
        }

        Commands::Languages => ReportFormatter::new().print_languages(),
    }

    Ok(())
}
