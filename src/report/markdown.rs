//! Markdown rendering for pull request comments.
//!
//! The table layout (column order, two-space-indented header) is read by
//! people and by tooling that scrapes old comments, so keep it stable.

use super::format::{format_change, format_kb, format_threshold};
use crate::diff::{ClassificationResult, Delta, Thresholds};

const TABLE_HEADER: &str = "
  | Name | +/- | Base | Current | +/- gzip | Base gzip | Current gzip |
  | ---- | --- | ---- | ------- | -------- | --------- | ------------ |";

/// Inputs to the renderer besides the classified deltas
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Deep-link template with `{head}`, `{base}`, `{path}` placeholders
    pub link_template: String,

    /// Thresholds quoted in the section descriptions
    pub thresholds: Thresholds,
}

/// Render the full size report
///
/// Pure function of its inputs: identical arguments give identical text.
pub fn render_report(
    base_commit: &str,
    head_commit: &str,
    classification: &ClassificationResult,
    options: &ReportOptions,
) -> String {
    let link = |delta: &Delta| {
        artifact_link(&options.link_template, base_commit, head_commit, &delta.path)
    };

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("Comparing: {}...{}\n\n", base_commit, head_commit));

    out.push_str("## Critical size changes\n\n");
    out.push_str(&format!(
        "Includes critical production bundles, as well as any change greater than {}%:\n\n",
        format_threshold(options.thresholds.critical)
    ));
    out.push_str(TABLE_HEADER);
    out.push('\n');
    out.push_str(&render_rows(&classification.critical, &link));
    out.push_str("\n\n");

    out.push_str("## Significant size changes\n\n");
    out.push_str(&format!(
        "Includes any change greater than {}%:\n\n",
        format_threshold(options.thresholds.significance)
    ));
    if classification.significant.is_empty() {
        out.push_str("(No significant changes)");
    } else {
        out.push_str("\n<details>\n<summary>Expand to show</summary>\n");
        out.push_str(TABLE_HEADER);
        out.push('\n');
        out.push_str(&render_rows(&classification.significant, &link));
        out.push_str("\n</details>\n");
    }
    out.push('\n');

    out
}

fn render_rows(deltas: &[Delta], link: &dyn Fn(&Delta) -> String) -> String {
    deltas
        .iter()
        .map(|delta| render_row(delta, &link(delta)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One table row
fn render_row(delta: &Delta, url: &str) -> String {
    let base = delta.base_or_zero();
    let head = delta.head_or_zero();
    [
        format!("| [{}]({})", delta.path, url),
        format!("**{}**", format_change(&delta.raw_change)),
        format_kb(base.raw_bytes),
        format_kb(head.raw_bytes),
        format_change(&delta.compressed_change),
        format_kb(base.compressed_bytes),
        format_kb(head.compressed_bytes),
    ]
    .join(" | ")
}

/// Fill the link template for one artifact
pub fn artifact_link(template: &str, base_commit: &str, head_commit: &str, path: &str) -> String {
    template
        .replace("{head}", head_commit)
        .replace("{base}", base_commit)
        .replace("{path}", path)
}
