use std::collections::BTreeMap;

use rayon::prelude::*;

use verdiff_score::score;
use verdiff_types::{
    CompareError, CompareResult, ComparisonReport, FileChangeDetail, Statistics, UnitLabel,
};

/// A file tree: relative path to raw content.
///
/// `BTreeMap` keys keep every traversal sorted by path, which makes all
/// output orderings reproducible.
pub type FileTree = BTreeMap<String, Vec<u8>>;

/// Compare two file trees and produce a full report.
///
/// Every path in either tree is classified exactly once: present in both
/// trees as unchanged (byte-identical) or modified, present only in `old` as
/// deleted, present only in `new` as added. Each modified path gets a
/// [`FileChangeDetail`] entry. Scoring of modified files runs on a parallel
/// iterator; ordered collection keeps the output identical to a sequential
/// run.
///
/// Fails with [`CompareError::ContentDecode`] if any file in either tree is
/// not valid UTF-8. No partial report is produced.
pub fn compare_trees(old: &FileTree, new: &FileTree) -> CompareResult<ComparisonReport> {
    let old_text = decode_tree(old)?;
    let new_text = decode_tree(new)?;

    let mut unchanged_files = Vec::new();
    let mut to_score: Vec<(&str, &str, &str)> = Vec::new();

    for (path, old_content) in &old_text {
        if let Some(new_content) = new_text.get(path) {
            if old_content == new_content {
                unchanged_files.push((*path).to_string());
            } else {
                to_score.push((*path, *old_content, *new_content));
            }
        }
    }

    let deleted_files: Vec<String> = old_text
        .keys()
        .filter(|path| !new_text.contains_key(*path))
        .map(|path| (*path).to_string())
        .collect();
    let added_files: Vec<String> = new_text
        .keys()
        .filter(|path| !old_text.contains_key(*path))
        .map(|path| (*path).to_string())
        .collect();

    // Per-path scoring is independent; `to_score` is already path-sorted and
    // the ordered collect preserves that.
    let details: Vec<(String, FileChangeDetail)> = to_score
        .par_iter()
        .map(|(path, old_content, new_content)| {
            let result = score(old_content, new_content);
            let detail = FileChangeDetail {
                similarity: result.percentage(),
                added_lines: result.added_lines,
                deleted_lines: result.deleted_lines,
                total_lines_v1: count_lines(old_content),
                total_lines_v2: count_lines(new_content),
            };
            ((*path).to_string(), detail)
        })
        .collect();

    let average_similarity = if details.is_empty() {
        0.0
    } else {
        details.iter().map(|(_, d)| d.similarity).sum::<f64>() / details.len() as f64
    };

    let statistics = Statistics::from_counts(
        unchanged_files.len(),
        details.len(),
        added_files.len(),
        deleted_files.len(),
        average_similarity,
    );

    let modified_files = details.iter().map(|(path, _)| path.clone()).collect();

    Ok(ComparisonReport {
        statistics,
        unchanged_files,
        modified_files,
        added_files,
        deleted_files,
        detailed_changes: details.into_iter().collect(),
    })
}

fn decode_tree(tree: &FileTree) -> CompareResult<BTreeMap<&str, &str>> {
    tree.iter()
        .map(|(path, bytes)| {
            let content =
                std::str::from_utf8(bytes).map_err(|e| CompareError::ContentDecode {
                    unit: UnitLabel::path(path.clone()),
                    offset: e.valid_up_to(),
                })?;
            Ok((path.as_str(), content))
        })
        .collect()
}

fn count_lines(content: &str) -> usize {
    content.split_inclusive('\n').count()
}
