use crate::error::InvalidSpec;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The recognized kinds of captured work artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Code,
    Data,
    Doc,
    Image,
    Terminal,
    Video,
}

impl ArtifactKind {
    /// Every kind, sorted by name. Error messages lean on this order.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Code,
        ArtifactKind::Data,
        ArtifactKind::Doc,
        ArtifactKind::Image,
        ArtifactKind::Terminal,
        ArtifactKind::Video,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Data => "data",
            Self::Doc => "doc",
            Self::Image => "image",
            Self::Terminal => "terminal",
            Self::Video => "video",
        }
    }

    fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = InvalidSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Self::Code),
            "data" => Ok(Self::Data),
            "doc" => Ok(Self::Doc),
            "image" => Ok(Self::Image),
            "terminal" => Ok(Self::Terminal),
            "video" => Ok(Self::Video),
            other => Err(InvalidSpec::UnknownKind {
                found: other.to_string(),
                valid: Self::valid_list(),
            }),
        }
    }
}

/// 1-based inclusive source line range. `start <= end` is not enforced at
/// this layer; extraction clamps instead of rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

/// A decoded artifact specification such as `code:src/main.rs:10-25:"Caption"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Present only for `code` artifacts.
    pub lines: Option<LineRange>,
    /// Empty string when no caption was given.
    pub caption: String,
}

/// Parse an artifact specification string.
///
/// Accepted forms:
///
/// ```text
/// image:/path/to/file.png:"Optional caption"
/// code:src/file.py:10-25:"Caption"
/// terminal:/path/to/session.txt:"Caption"
/// video:/path/to/demo.mp4:"Caption"
/// doc:/path/to/spec.pdf:"Caption"
/// data:/path/to/metrics.json:"Caption"
/// ```
///
/// Only the first colon separates the kind from the remainder; the path may
/// itself contain colons, so the remainder is split from the right.
pub fn parse(spec: &str) -> Result<ArtifactSpec, InvalidSpec> {
    let Some((kind_raw, rest)) = spec.split_once(':') else {
        return Err(InvalidSpec::MissingType(spec.to_string()));
    };
    let kind: ArtifactKind = kind_raw.trim().parse()?;

    let (rest, caption) = split_trailing_caption(rest);

    let (path_raw, lines) = if kind == ArtifactKind::Code {
        let Some((path_raw, range_raw)) = rest.rsplit_once(':') else {
            return Err(InvalidSpec::BadLineRange {
                segment: rest.trim().to_string(),
                spec: spec.to_string(),
            });
        };
        (path_raw, Some(parse_line_range(range_raw, spec)?))
    } else {
        (rest, None)
    };

    let path = path_raw.trim();
    if path.is_empty() {
        return Err(InvalidSpec::MissingPath(spec.to_string()));
    }

    Ok(ArtifactSpec {
        kind,
        path: PathBuf::from(path),
        lines,
        caption,
    })
}

fn quoted(segment: &str) -> Option<String> {
    let s = segment.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Some(s[1..s.len() - 1].to_string())
    } else {
        None
    }
}

/// Split the trailing quoted caption segment off `rest`, if present.
/// Everything before it is returned untouched and may still contain colons.
fn split_trailing_caption(rest: &str) -> (&str, String) {
    if let Some(caption) = quoted(rest) {
        return ("", caption);
    }
    if let Some((head, tail)) = rest.rsplit_once(':') {
        if let Some(caption) = quoted(tail) {
            return (head, caption);
        }
    }
    (rest, String::new())
}

fn parse_line_range(segment: &str, spec: &str) -> Result<LineRange, InvalidSpec> {
    let segment = segment.trim();
    let bad = || InvalidSpec::BadLineRange {
        segment: segment.to_string(),
        spec: spec.to_string(),
    };

    let (start_raw, end_raw) = segment.split_once('-').ok_or_else(bad)?;
    let start = start_raw.trim().parse::<u32>().map_err(|_| bad())?;
    let end = end_raw.trim().parse::<u32>().map_err(|_| bad())?;
    Ok(LineRange { start, end })
}
