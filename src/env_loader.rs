use std::env;
use std::path::PathBuf;

fn fallback_dotenv_path(folio_home: Option<PathBuf>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    let base = folio_home.or(home_dir)?;
    Some(base.join("folio/.env"))
}

pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let fallback = fallback_dotenv_path(
        env::var_os("FOLIO_HOME").map(PathBuf::from),
        dirs::home_dir(),
    );

    let Some(path) = fallback else {
        return;
    };
    if path.is_file() {
        let _ = dotenvy::from_path(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_dotenv_path;
    use std::path::PathBuf;

    #[test]
    fn fallback_prefers_folio_home_over_home_dir() {
        let got = fallback_dotenv_path(
            Some(PathBuf::from("/srv/portfolio")),
            Some(PathBuf::from("/home/alice")),
        );

        let want = Some(PathBuf::from("/srv/portfolio/folio/.env"));
        assert_eq!(got, want);
    }

    #[test]
    fn fallback_uses_home_when_folio_home_unset() {
        let got = fallback_dotenv_path(None, Some(PathBuf::from("/home/alice")));
        let want = Some(PathBuf::from("/home/alice/folio/.env"));
        assert_eq!(got, want);
    }
}
