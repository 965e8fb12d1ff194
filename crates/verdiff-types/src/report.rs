//! Report records produced by the comparators.
//!
//! Field names are load-bearing: renderers and exporters consume these
//! records as JSON, so every field serializes under the exact name listed
//! here and unknown fields are rejected when deserializing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a diff hunk relates the two documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Content present only in document 2.
    Added,
    /// A replace hunk: adjacent removed and inserted content.
    Modified,
    /// Content present only in document 1.
    Removed,
}

/// One contiguous diff hunk in a document comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Difference {
    #[serde(rename = "type")]
    pub kind: DiffKind,
    /// The hunk text, lines joined by newlines.
    pub text: String,
    /// 1-based page the hunk belongs to.
    pub page: usize,
}

/// The report for a document (PDF-mode) comparison.
///
/// Invariant: `common_percentage + unique1_percentage + unique2_percentage`
/// is 100 up to floating rounding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdfComparisonReport {
    /// Overall similarity as a 0-100 percentage.
    pub similarity: f64,
    pub doc1_pages: usize,
    pub doc2_pages: usize,
    pub common_percentage: f64,
    pub unique1_percentage: f64,
    pub unique2_percentage: f64,
    pub differences: Vec<Difference>,
}

/// Per-file detail recorded for every modified path in a tree comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileChangeDetail {
    /// Similarity of the two versions as a 0-100 percentage.
    pub similarity: f64,
    pub added_lines: usize,
    pub deleted_lines: usize,
    pub total_lines_v1: usize,
    pub total_lines_v2: usize,
}

/// Aggregate statistics over a tree comparison.
///
/// The four counts partition the union of both trees' paths, so the four
/// percentage fields sum to 100 (up to rounding) whenever `total_files > 0`;
/// every field is zero when `total_files == 0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Statistics {
    pub total_files: usize,
    pub unchanged_files_count: usize,
    pub modified_files_count: usize,
    pub added_files_count: usize,
    pub deleted_files_count: usize,
    pub unchanged_percentage: f64,
    pub modified_percentage: f64,
    pub added_percentage: f64,
    pub deleted_percentage: f64,
    /// Mean similarity (0-100) across modified files; 0 when none.
    pub average_similarity: f64,
    /// Weighted 0-100 stability score, see [`Statistics::from_counts`].
    pub code_stability: f64,
}

impl Statistics {
    /// Build statistics from the four classification counts.
    ///
    /// `average_similarity` is the mean 0-100 similarity over modified files
    /// (0 when there are none). Code stability is defined as
    ///
    /// ```text
    /// code_stability = unchanged_percentage
    ///                + modified_percentage * (average_similarity / 100)
    /// ```
    ///
    /// which is monotonic: more unchanged files and higher modified-file
    /// similarity both strictly increase it, while added and deleted files
    /// contribute nothing.
    pub fn from_counts(
        unchanged: usize,
        modified: usize,
        added: usize,
        deleted: usize,
        average_similarity: f64,
    ) -> Self {
        let total = unchanged + modified + added + deleted;
        if total == 0 {
            return Self::default();
        }

        let pct = |count: usize| count as f64 / total as f64 * 100.0;
        let unchanged_percentage = pct(unchanged);
        let modified_percentage = pct(modified);

        Self {
            total_files: total,
            unchanged_files_count: unchanged,
            modified_files_count: modified,
            added_files_count: added,
            deleted_files_count: deleted,
            unchanged_percentage,
            modified_percentage,
            added_percentage: pct(added),
            deleted_percentage: pct(deleted),
            average_similarity,
            code_stability: unchanged_percentage
                + modified_percentage * (average_similarity / 100.0),
        }
    }
}

/// The report for a tree (software-mode) comparison.
///
/// File lists are sorted by path; `detailed_changes` holds one entry per
/// modified path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonReport {
    pub statistics: Statistics,
    pub unchanged_files: Vec<String>,
    pub modified_files: Vec<String>,
    pub added_files: Vec<String>,
    pub deleted_files: Vec<String>,
    pub detailed_changes: BTreeMap<String, FileChangeDetail>,
}

impl ComparisonReport {
    /// Returns `true` if the two trees were identical.
    pub fn is_unchanged(&self) -> bool {
        self.statistics.total_files == self.statistics.unchanged_files_count
    }

    /// Total lines added across all modified files.
    pub fn total_lines_added(&self) -> usize {
        self.detailed_changes.values().map(|d| d.added_lines).sum()
    }

    /// Total lines deleted across all modified files.
    pub fn total_lines_deleted(&self) -> usize {
        self.detailed_changes.values().map(|d| d.deleted_lines).sum()
    }
}
