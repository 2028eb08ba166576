use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FolioPaths {
    pub folio_home: PathBuf,
    pub projects_dir: PathBuf,
}

fn required_home_dir() -> Result<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        return Ok(home);
    }
    Err(anyhow::anyhow!("HOME directory could not be resolved"))
}

fn env_or_default_path(var: &str, fallback: PathBuf) -> PathBuf {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => PathBuf::from(v.trim()),
        _ => fallback,
    }
}

pub fn resolve_paths() -> Result<FolioPaths> {
    let home = required_home_dir()?;
    let folio_home = env_or_default_path("FOLIO_HOME", home.join("portfolio-site"));

    let projects_dir = env_or_default_path("FOLIO_PROJECTS_DIR", folio_home.join("projects"));

    Ok(FolioPaths {
        folio_home,
        projects_dir,
    })
}
