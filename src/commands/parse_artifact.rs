use anyhow::Result;

use crate::commands::CommandReport;
use crate::folio::artifact;
use crate::folio::capture;

#[derive(Debug, Clone)]
pub struct ParseArtifactOptions {
    pub spec: String,
    pub capture: bool,
}

pub fn run(opts: &ParseArtifactOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("parse-artifact");

    let parsed = artifact::parse(&opts.spec)?;

    report.detail(format!("kind={}", parsed.kind));
    report.detail(format!("path={}", parsed.path.display()));
    if let Some(lines) = parsed.lines {
        report.detail(format!("lines={}-{}", lines.start, lines.end));
    }
    report.detail(format!("caption={}", parsed.caption));

    if opts.capture {
        let captured = capture::capture(&parsed)?;
        if let Some(content) = captured.content {
            report.detail(format!("content_lines={}", content.lines().count()));
            for line in content.lines() {
                report.detail(format!("| {line}"));
            }
        }
    }

    Ok(report)
}
