use anyhow::Result;
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::folio::config::load_config;
use crate::folio::migrate;
use crate::folio::paths::resolve_paths;

#[derive(Debug, Clone, Default)]
pub struct MigrateTagsOptions {
    pub projects_dir: Option<PathBuf>,
    pub dry_run: bool,
}

pub fn run(opts: &MigrateTagsOptions) -> Result<CommandReport> {
    let cfg = load_config()?;
    let mut report = CommandReport::new("migrate-tags");

    let projects_dir = match &opts.projects_dir {
        Some(dir) => dir.clone(),
        None => resolve_paths()?.projects_dir,
    };

    report.detail(format!("projects_dir={}", projects_dir.display()));
    report.detail(format!("settings_file={}", cfg.migrate.settings_file));

    if !projects_dir.is_dir() {
        report.issue(format!(
            "projects dir does not exist: {}",
            projects_dir.display()
        ));
        return Ok(report);
    }

    if opts.dry_run {
        report.detail("dry-run: no files will be rewritten".to_string());
    }

    let outcome = migrate::migrate_projects(&projects_dir, &cfg.migrate, opts.dry_run)?;
    report.detail(format!("scanned={}", outcome.scanned));
    report.detail(format!("migrated={}", outcome.migrated));
    report.detail(format!("clean={}", outcome.clean));
    if outcome.failed > 0 {
        report.issue(format!(
            "{} folder(s) skipped after parse or write failures",
            outcome.failed
        ));
    }

    Ok(report)
}
