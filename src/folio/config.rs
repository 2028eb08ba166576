use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrateTagsConfig {
    /// File name of the per-project settings document.
    pub settings_file: String,
    /// Folders whose name starts with this prefix are never touched.
    pub skip_prefix: String,
    /// Header title used when a document carries no `title` key.
    pub fallback_title: String,
}

impl Default for MigrateTagsConfig {
    fn default() -> Self {
        Self {
            settings_file: "settings.yaml".to_string(),
            skip_prefix: "_".to_string(),
            fallback_title: "Project".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    pub migrate: MigrateTagsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialFolioConfig {
    migrate: Option<MigrateTagsConfig>,
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn validate(cfg: &FolioConfig) -> Result<()> {
    let file = cfg.migrate.settings_file.as_str();
    if file.trim().is_empty() {
        return Err(anyhow!("invalid settings file name: cannot be empty"));
    }
    if file.contains('/') || file.contains('\\') {
        return Err(anyhow!(
            "invalid settings file name: must be a bare file name, not a path"
        ));
    }
    if cfg.migrate.skip_prefix.is_empty() {
        return Err(anyhow!(
            "invalid skip prefix: an empty prefix would skip every folder"
        ));
    }
    if cfg.migrate.fallback_title.trim().is_empty() {
        return Err(anyhow!("invalid fallback title: cannot be empty"));
    }
    Ok(())
}

fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(custom) = env::var("FOLIO_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let home = dirs::home_dir()?;
    Some(home.join(".config").join("folio.toml"))
}

fn merge_file_config(base: &mut FolioConfig) -> Result<()> {
    let Some(path) = resolve_config_path() else {
        return Ok(());
    };
    if !path.exists() {
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let parsed: PartialFolioConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse folio config {}: {err}", path.display()))?;
    if let Some(migrate) = parsed.migrate {
        base.migrate = migrate;
    }
    Ok(())
}

pub fn load_config() -> Result<FolioConfig> {
    let mut cfg = FolioConfig::default();
    merge_file_config(&mut cfg)?;

    cfg.migrate.settings_file = env_or_string("FOLIO_SETTINGS_FILE", &cfg.migrate.settings_file);
    cfg.migrate.skip_prefix = env_or_string("FOLIO_SKIP_PREFIX", &cfg.migrate.skip_prefix);
    cfg.migrate.fallback_title =
        env_or_string("FOLIO_FALLBACK_TITLE", &cfg.migrate.fallback_title);

    validate(&cfg)?;
    Ok(cfg)
}
