use crate::error::DocumentParseError;
use anyhow::{Context, Result};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;

fn parse_error(path: &Path, reason: impl Into<String>) -> DocumentParseError {
    DocumentParseError {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Load a settings document. `Ok(None)` means the file holds an empty or
/// null document; anything that is not a key/value mapping is an error.
pub fn load(path: &Path) -> Result<Option<Mapping>, DocumentParseError> {
    let raw = fs::read_to_string(path).map_err(|err| parse_error(path, err.to_string()))?;
    let value: Option<Value> =
        serde_yaml::from_str(&raw).map_err(|err| parse_error(path, err.to_string()))?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(doc)) => Ok(Some(doc)),
        Some(_) => Err(parse_error(path, "document is not a key/value mapping")),
    }
}

fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read a list-of-strings key as a sorted set. Absent keys, null values and
/// non-list values all read as empty; non-scalar list entries are dropped.
pub fn string_set(doc: &Mapping, key: &str) -> BTreeSet<String> {
    match doc.get(key) {
        Some(Value::Sequence(items)) => items.iter().filter_map(value_as_string).collect(),
        _ => BTreeSet::new(),
    }
}

/// The document title used for the header comment, falling back when the
/// key is absent or not a scalar.
pub fn title(doc: &Mapping, fallback: &str) -> String {
    doc.get("title")
        .and_then(value_as_string)
        .unwrap_or_else(|| fallback.to_string())
}

/// Render the document as it is written back to disk: a `# {title}` header
/// comment, a blank line, then the mapping in block style with key order
/// preserved.
pub fn render(doc: &Mapping, title: &str) -> Result<String> {
    let body = serde_yaml::to_string(doc).context("failed to serialize settings document")?;
    Ok(format!("# {title}\n\n{body}"))
}

/// Replace the file at `path` via a temp file in the same directory. The
/// temp file must live next to the target or the final rename can cross
/// filesystems.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("no parent directory for {}", path.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write temp file for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
