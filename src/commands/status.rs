use anyhow::Result;

use crate::commands::CommandReport;
use crate::folio::config::load_config;
use crate::folio::migrate;
use crate::folio::paths::resolve_paths;

pub fn run() -> Result<CommandReport> {
    let paths = resolve_paths()?;
    let cfg = load_config()?;
    let mut report = CommandReport::new("status");

    report.detail(format!("folio_home={}", paths.folio_home.display()));
    report.detail(format!("projects_dir={}", paths.projects_dir.display()));
    report.detail(format!("settings_file={}", cfg.migrate.settings_file));
    report.detail(format!("skip_prefix={}", cfg.migrate.skip_prefix));

    if !paths.projects_dir.is_dir() {
        report.issue(format!(
            "missing projects dir ({} or FOLIO_PROJECTS_DIR)",
            paths.projects_dir.display()
        ));
        return Ok(report);
    }

    let scan = migrate::scan_projects(&paths.projects_dir, &cfg.migrate)?;
    report.detail(format!("projects={}", scan.scanned));
    report.detail(format!("pending_migration={}", scan.pending));
    if scan.failed > 0 {
        report.issue(format!("{} settings file(s) failed to parse", scan.failed));
    }

    Ok(report)
}
