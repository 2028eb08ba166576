use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a work-artifact specification string. Every variant carries
/// the offending input.
#[derive(Debug, Error)]
pub enum InvalidSpec {
    #[error("invalid artifact spec (missing type): {0}")]
    MissingType(String),
    #[error("unknown artifact type '{found}'. Valid: {valid}")]
    UnknownKind { found: String, valid: String },
    #[error("invalid line range '{segment}' (expected <start>-<end>): {spec}")]
    BadLineRange { segment: String, spec: String },
    #[error("invalid artifact spec (missing path): {0}")]
    MissingPath(String),
}

/// A settings document that could not be read or parsed as a key/value
/// mapping. Logged and skipped by the migrator; never aborts a run.
#[derive(Debug, Error)]
#[error("failed to parse {}: {reason}", path.display())]
pub struct DocumentParseError {
    pub path: PathBuf,
    pub reason: String,
}
