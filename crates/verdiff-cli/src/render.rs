//! Text and JSON rendering of comparison reports.
//!
//! JSON output mirrors the stored payload plus the report id; text output is
//! the tester-facing summary (file statistics, code analysis, testing
//! focus).

use std::fmt::Write as _;

use colored::Colorize;

use verdiff_sdk::{ReportId, StoredReport};
use verdiff_types::{ComparisonReport, DiffKind, PdfComparisonReport};

/// Serialize a stored report with its id, pretty-printed.
pub fn to_json(id: &ReportId, report: &StoredReport) -> anyhow::Result<String> {
    let mut value = serde_json::to_value(report)?;
    value
        .as_object_mut()
        .expect("reports serialize to objects")
        .insert("id".into(), serde_json::Value::String(id.to_string()));
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Render the tree-mode summary.
pub fn tree_summary(report: &ComparisonReport, detailed: bool) -> String {
    let stats = &report.statistics;
    let mut out = String::new();

    let _ = writeln!(out, "{}", "File statistics".bold());
    let _ = writeln!(out, "  Total files: {}", stats.total_files);
    let _ = writeln!(
        out,
        "  Unchanged:   {} ({:.1}%)",
        stats.unchanged_files_count, stats.unchanged_percentage
    );
    let _ = writeln!(
        out,
        "  Modified:    {} ({:.1}%)",
        stats.modified_files_count, stats.modified_percentage
    );
    let _ = writeln!(
        out,
        "  Added:       {} ({:.1}%)",
        stats.added_files_count, stats.added_percentage
    );
    let _ = writeln!(
        out,
        "  Deleted:     {} ({:.1}%)",
        stats.deleted_files_count, stats.deleted_percentage
    );

    let _ = writeln!(out, "\n{}", "Code analysis".bold());
    let _ = writeln!(
        out,
        "  Average similarity: {:.1}%",
        stats.average_similarity
    );
    let _ = writeln!(out, "  Code stability:     {:.1}", stats.code_stability);
    let _ = writeln!(out, "  Lines added:        {}", report.total_lines_added());
    let _ = writeln!(out, "  Lines deleted:      {}", report.total_lines_deleted());

    let _ = writeln!(out, "\n{}", "Testing focus".bold());
    let _ = writeln!(
        out,
        "  Re-test {} modified file(s); {} unchanged file(s) are safe to skip.",
        stats.modified_files_count, stats.unchanged_files_count
    );
    let _ = writeln!(
        out,
        "  New tests needed for {} added file(s); retire tests for {} deleted file(s).",
        stats.added_files_count, stats.deleted_files_count
    );

    if detailed && !report.detailed_changes.is_empty() {
        let _ = writeln!(out, "\n{}", "Modified files".bold());
        for (path, detail) in &report.detailed_changes {
            let _ = writeln!(
                out,
                "  {}  {:.1}%  +{} -{}",
                path.yellow(),
                detail.similarity,
                detail.added_lines,
                detail.deleted_lines
            );
        }
    }

    out
}

/// Render the document-mode summary.
pub fn doc_summary(report: &PdfComparisonReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Document comparison".bold());
    let _ = writeln!(
        out,
        "  Pages: {} vs {}",
        report.doc1_pages, report.doc2_pages
    );
    let _ = writeln!(out, "  Similarity: {:.1}%", report.similarity);
    let _ = writeln!(
        out,
        "  Common: {:.1}%  Only doc 1: {:.1}%  Only doc 2: {:.1}%",
        report.common_percentage, report.unique1_percentage, report.unique2_percentage
    );

    if report.differences.is_empty() {
        let _ = writeln!(out, "\nNo differences.");
    } else {
        let _ = writeln!(
            out,
            "\n{} ({})",
            "Differences".bold(),
            report.differences.len()
        );
        for diff in &report.differences {
            let label = match diff.kind {
                DiffKind::Added => "added".green(),
                DiffKind::Modified => "modified".yellow(),
                DiffKind::Removed => "removed".red(),
            };
            let _ = writeln!(
                out,
                "  [{}] page {}: {}",
                label,
                diff.page,
                first_line(&diff.text)
            );
        }
    }

    out
}

fn first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((first, _)) => format!("{first} …"),
        None => text.to_string(),
    }
}
