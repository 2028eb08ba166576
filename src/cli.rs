use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{self, CommandReport};
use crate::commands::migrate_tags::MigrateTagsOptions;
use crate::commands::parse_artifact::ParseArtifactOptions;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "folio: portfolio content maintenance",
    long_about = None
)]
struct Cli {
    /// Emit the command report as JSON instead of human-readable lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge legacy technologies/builtWith lists into the tags field.
    MigrateTags {
        /// Projects root to migrate (defaults to FOLIO_PROJECTS_DIR).
        #[arg(long)]
        projects_dir: Option<PathBuf>,

        /// Report what would change without rewriting any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// Decode a work-artifact spec such as code:src/main.rs:10-25:"Caption".
    ParseArtifact {
        /// The artifact specification string.
        spec: String,

        /// Resolve the spec against the filesystem and extract code lines.
        #[arg(long)]
        capture: bool,
    },

    /// Show resolved paths, configuration and pending-migration counts.
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = match &cli.command {
        Commands::MigrateTags {
            projects_dir,
            dry_run,
        } => commands::migrate_tags::run(&MigrateTagsOptions {
            projects_dir: projects_dir.clone(),
            dry_run: *dry_run,
        })?,
        Commands::ParseArtifact { spec, capture } => {
            commands::parse_artifact::run(&ParseArtifactOptions {
                spec: spec.clone(),
                capture: *capture,
            })?
        }
        Commands::Status => commands::status::run()?,
    };

    print_report(&report, cli.json)
}

fn print_report(report: &CommandReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for detail in &report.details {
        println!("{detail}");
    }
    for issue in &report.issues {
        eprintln!("issue: {issue}");
    }
    Ok(())
}
