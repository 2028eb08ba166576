use crate::folio::artifact::{ArtifactKind, ArtifactSpec, LineRange};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fs;

/// An artifact spec resolved against the filesystem. `code` artifacts carry
/// the referenced lines in `content`; line numbers stay on the spec as
/// provenance metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedArtifact {
    pub spec: ArtifactSpec,
    pub content: Option<String>,
}

/// Take lines `start..=end` (1-based, inclusive) out of `source`, clamped
/// to the file. An inverted range yields nothing rather than an error.
fn extract_lines(source: &str, range: LineRange) -> String {
    if range.end < range.start {
        return String::new();
    }
    let first = range.start.max(1) as usize;
    let count = range.end as usize - (first - 1);
    source
        .lines()
        .skip(first - 1)
        .take(count)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn capture(spec: &ArtifactSpec) -> Result<CapturedArtifact> {
    if !spec.path.exists() {
        bail!("artifact path does not exist: {}", spec.path.display());
    }

    let content = if spec.kind == ArtifactKind::Code {
        let raw = fs::read_to_string(&spec.path)
            .with_context(|| format!("failed to read {}", spec.path.display()))?;
        match spec.lines {
            Some(range) => Some(extract_lines(&raw, range)),
            None => Some(raw),
        }
    } else {
        None
    };

    Ok(CapturedArtifact {
        spec: spec.clone(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::{capture, extract_lines};
    use crate::folio::artifact::{LineRange, parse};
    use std::fs;
    use tempfile::tempdir;

    const SOURCE: &str = "one\ntwo\nthree\nfour\nfive\n";

    #[test]
    fn extracts_an_inner_range() {
        let got = extract_lines(SOURCE, LineRange { start: 2, end: 4 });
        assert_eq!(got, "two\nthree\nfour");
    }

    #[test]
    fn clamps_past_end_of_file() {
        let got = extract_lines(SOURCE, LineRange { start: 4, end: 99 });
        assert_eq!(got, "four\nfive");
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let got = extract_lines(SOURCE, LineRange { start: 4, end: 2 });
        assert_eq!(got, "");
    }

    #[test]
    fn capture_fills_content_for_code_only() {
        let tmp = tempdir().expect("tempdir");
        let file = tmp.path().join("snippet.py");
        fs::write(&file, SOURCE).expect("write source");

        let spec = format!("code:{}:2-3:\"snip\"", file.display());
        let captured = capture(&parse(&spec).expect("parse")).expect("capture");
        assert_eq!(captured.content.as_deref(), Some("two\nthree"));

        let spec = format!("data:{}:\"metrics\"", file.display());
        let captured = capture(&parse(&spec).expect("parse")).expect("capture");
        assert_eq!(captured.content, None);
    }

    #[test]
    fn capture_rejects_missing_paths() {
        let spec = parse("image:/definitely/not/here.png:\"x\"").expect("parse");
        assert!(capture(&spec).is_err());
    }
}
