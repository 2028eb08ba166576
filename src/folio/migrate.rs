use crate::folio::config::MigrateTagsConfig;
use crate::folio::settings;
use crate::folio::warn;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const TAGS_KEY: &str = "tags";
const LEGACY_KEYS: [&str; 2] = ["technologies", "builtWith"];

#[derive(Debug, Clone, Copy, Default)]
pub struct MigrateOutcome {
    pub scanned: usize,
    pub migrated: usize,
    pub clean: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOutcome {
    pub scanned: usize,
    pub pending: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FolderOutcome {
    Migrated,
    Clean,
    Failed,
}

/// A folder needs migration only while at least one legacy key still holds
/// entries. This is the idempotence guard: a migrated document re-reads as
/// clean and is never rewritten.
pub fn needs_migration(doc: &Mapping) -> bool {
    LEGACY_KEYS
        .iter()
        .any(|key| !settings::string_set(doc, key).is_empty())
}

/// Union of the current tags and both legacy lists, deduplicated and
/// alphabetically sorted.
pub fn merged_tags(doc: &Mapping) -> Vec<String> {
    let mut tags: BTreeSet<String> = settings::string_set(doc, TAGS_KEY);
    for key in LEGACY_KEYS {
        tags.extend(settings::string_set(doc, key));
    }
    tags.into_iter().collect()
}

fn folder_label(folder: &Path) -> String {
    folder
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| folder.display().to_string())
}

fn migrate_project(folder: &Path, cfg: &MigrateTagsConfig, dry_run: bool) -> FolderOutcome {
    let settings_path = folder.join(&cfg.settings_file);
    if !settings_path.is_file() {
        return FolderOutcome::Clean;
    }

    let mut doc = match settings::load(&settings_path) {
        Ok(Some(doc)) => doc,
        Ok(None) => return FolderOutcome::Clean,
        Err(err) => {
            warn::emit(
                "SETTINGS_PARSE",
                &folder.display().to_string(),
                &cfg.settings_file,
                "skipping_folder",
                &err.to_string(),
            );
            return FolderOutcome::Failed;
        }
    };

    if !needs_migration(&doc) {
        return FolderOutcome::Clean;
    }

    let label = folder_label(folder);
    if dry_run {
        println!("Would migrate {label}");
        return FolderOutcome::Migrated;
    }
    println!("Migrating {label}...");

    let merged: Vec<Value> = merged_tags(&doc).into_iter().map(Value::String).collect();
    doc.insert(Value::from(TAGS_KEY), Value::Sequence(merged));
    for key in LEGACY_KEYS {
        doc.shift_remove(key);
    }

    let title = settings::title(&doc, &cfg.fallback_title);
    let written = settings::render(&doc, &title)
        .and_then(|out| settings::write_atomic(&settings_path, &out));
    match written {
        Ok(()) => FolderOutcome::Migrated,
        Err(err) => {
            warn::emit(
                "SETTINGS_WRITE",
                &folder.display().to_string(),
                &cfg.settings_file,
                "skipping_folder",
                &format!("{err:#}"),
            );
            FolderOutcome::Failed
        }
    }
}

/// Direct subdirectories of the projects root, minus skip-prefixed folders,
/// in stable name order.
fn project_folders(projects_dir: &Path, cfg: &MigrateTagsConfig) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(projects_dir)
        .with_context(|| format!("failed to read {}", projects_dir.display()))?;

    let mut folders = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if name.starts_with(&cfg.skip_prefix) {
            continue;
        }
        folders.push(path);
    }
    folders.sort();
    Ok(folders)
}

/// Migrate every project folder under `projects_dir`. A folder that fails
/// to parse or write is warned about and skipped; the run always continues
/// with the remaining folders.
pub fn migrate_projects(
    projects_dir: &Path,
    cfg: &MigrateTagsConfig,
    dry_run: bool,
) -> Result<MigrateOutcome> {
    let mut outcome = MigrateOutcome::default();
    for folder in project_folders(projects_dir, cfg)? {
        outcome.scanned += 1;
        match migrate_project(&folder, cfg, dry_run) {
            FolderOutcome::Migrated => outcome.migrated += 1,
            FolderOutcome::Clean => outcome.clean += 1,
            FolderOutcome::Failed => outcome.failed += 1,
        }
    }
    Ok(outcome)
}

/// Read-only census of the projects tree: how many folders still carry
/// legacy keys, and how many cannot be parsed at all.
pub fn scan_projects(projects_dir: &Path, cfg: &MigrateTagsConfig) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();
    for folder in project_folders(projects_dir, cfg)? {
        outcome.scanned += 1;
        let settings_path = folder.join(&cfg.settings_file);
        if !settings_path.is_file() {
            continue;
        }
        match settings::load(&settings_path) {
            Ok(Some(doc)) if needs_migration(&doc) => outcome.pending += 1,
            Ok(_) => {}
            Err(_) => outcome.failed += 1,
        }
    }
    Ok(outcome)
}
