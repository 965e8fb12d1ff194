use similar::{capture_diff_slices, Algorithm, DiffOp, DiffTag};

use verdiff_score::score_lines;
use verdiff_types::{DiffKind, Difference, PdfComparisonReport};

/// A document flattened into lines, each tagged with its 1-based page.
struct PagedLines<'a> {
    lines: Vec<&'a str>,
    pages: Vec<usize>,
}

impl<'a> PagedLines<'a> {
    fn new(page_texts: &'a [String]) -> Self {
        let mut lines = Vec::new();
        let mut pages = Vec::new();
        for (index, text) in page_texts.iter().enumerate() {
            for line in text.split_inclusive('\n') {
                lines.push(line);
                pages.push(index + 1);
            }
        }
        Self { lines, pages }
    }

    fn hunk_text(&self, range: std::ops::Range<usize>) -> String {
        self.lines[range]
            .iter()
            .map(|line| line.trim_end_matches('\n'))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Compare two paginated documents.
///
/// `similarity` and `common_percentage` are the normalized LCS ratio over
/// all lines of both documents as a 0-100 percentage;
/// `unique1_percentage` / `unique2_percentage` are the shares of lines only
/// in document 1 / document 2, so the three always sum to 100. One
/// [`Difference`] is emitted per contiguous diff hunk: deletions are
/// `removed` and carry the page of document 1, insertions are `added`,
/// replacements are `modified`, both carrying the page of document 2.
///
/// Two empty documents are fully similar by definition.
pub fn compare_documents(pages_a: &[String], pages_b: &[String]) -> PdfComparisonReport {
    let doc1 = PagedLines::new(pages_a);
    let doc2 = PagedLines::new(pages_b);

    let similarity = score_lines(&doc1.lines, &doc2.lines);
    let total_lines = doc1.lines.len() + doc2.lines.len();

    let (unique1_percentage, unique2_percentage) = if total_lines == 0 {
        (0.0, 0.0)
    } else {
        (
            similarity.deleted_lines as f64 / total_lines as f64 * 100.0,
            similarity.added_lines as f64 / total_lines as f64 * 100.0,
        )
    };
    let common_percentage = 100.0 - unique1_percentage - unique2_percentage;

    let ops = capture_diff_slices(Algorithm::Myers, &doc1.lines, &doc2.lines);
    let differences = ops
        .iter()
        .filter_map(|op| difference_for_op(op, &doc1, &doc2))
        .collect();

    PdfComparisonReport {
        similarity: similarity.percentage(),
        doc1_pages: pages_a.len(),
        doc2_pages: pages_b.len(),
        common_percentage,
        unique1_percentage,
        unique2_percentage,
        differences,
    }
}

fn difference_for_op(op: &DiffOp, doc1: &PagedLines, doc2: &PagedLines) -> Option<Difference> {
    match op.tag() {
        DiffTag::Equal => None,
        DiffTag::Delete => {
            let range = op.old_range();
            Some(Difference {
                kind: DiffKind::Removed,
                text: doc1.hunk_text(range.clone()),
                page: doc1.pages[range.start],
            })
        }
        DiffTag::Insert => {
            let range = op.new_range();
            Some(Difference {
                kind: DiffKind::Added,
                text: doc2.hunk_text(range.clone()),
                page: doc2.pages[range.start],
            })
        }
        DiffTag::Replace => {
            let range = op.new_range();
            Some(Difference {
                kind: DiffKind::Modified,
                text: doc2.hunk_text(range.clone()),
                page: doc2.pages[range.start],
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    fn percentage_sum(report: &PdfComparisonReport) -> f64 {
        report.common_percentage + report.unique1_percentage + report.unique2_percentage
    }

    // -----------------------------------------------------------------------
    // Identity and degenerate inputs
    // -----------------------------------------------------------------------

    #[test]
    fn identical_single_page_documents() {
        let report = compare_documents(&pages(&["Hello world"]), &pages(&["Hello world"]));

        assert_eq!(report.similarity, 100.0);
        assert_eq!(report.common_percentage, 100.0);
        assert_eq!(report.unique1_percentage, 0.0);
        assert_eq!(report.unique2_percentage, 0.0);
        assert!(report.differences.is_empty());
        assert_eq!(report.doc1_pages, 1);
        assert_eq!(report.doc2_pages, 1);
    }

    #[test]
    fn two_empty_documents_are_fully_similar() {
        let report = compare_documents(&[], &[]);
        assert_eq!(report.similarity, 100.0);
        assert_eq!(report.common_percentage, 100.0);
        assert_eq!(report.doc1_pages, 0);
        assert!(report.differences.is_empty());
    }

    #[test]
    fn one_empty_document_shares_nothing() {
        let report = compare_documents(&[], &pages(&["content"]));
        assert_eq!(report.similarity, 0.0);
        assert!((report.unique2_percentage - 100.0).abs() < EPSILON);
        assert_eq!(report.differences.len(), 1);
        assert_eq!(report.differences[0].kind, DiffKind::Added);
    }

    // -----------------------------------------------------------------------
    // Page attribution
    // -----------------------------------------------------------------------

    #[test]
    fn extra_page_is_reported_as_added_on_page_two() {
        let report = compare_documents(&pages(&["A"]), &pages(&["A", "B"]));

        assert_eq!(report.differences.len(), 1);
        let diff = &report.differences[0];
        assert_eq!(diff.kind, DiffKind::Added);
        assert_eq!(diff.text, "B");
        assert_eq!(diff.page, 2);
    }

    #[test]
    fn dropped_page_is_reported_as_removed_with_source_page() {
        let report = compare_documents(&pages(&["A", "B", "C"]), &pages(&["A", "C"]));

        assert_eq!(report.differences.len(), 1);
        let diff = &report.differences[0];
        assert_eq!(diff.kind, DiffKind::Removed);
        assert_eq!(diff.text, "B");
        assert_eq!(diff.page, 2);
    }

    #[test]
    fn replaced_text_is_modified_and_carries_doc2_page() {
        let report = compare_documents(
            &pages(&["intro", "old body", "outro"]),
            &pages(&["intro", "new body", "outro"]),
        );

        assert_eq!(report.differences.len(), 1);
        let diff = &report.differences[0];
        assert_eq!(diff.kind, DiffKind::Modified);
        assert_eq!(diff.text, "new body");
        assert_eq!(diff.page, 2);
    }

    #[test]
    fn multi_line_pages_attribute_hunks_inside_a_page() {
        let report = compare_documents(
            &pages(&["l1\nl2\nl3", "p2a\np2b"]),
            &pages(&["l1\nl2\nl3", "p2a\nCHANGED"]),
        );

        assert_eq!(report.differences.len(), 1);
        assert_eq!(report.differences[0].page, 2);
        assert_eq!(report.differences[0].text, "CHANGED");
    }

    #[test]
    fn multi_line_hunk_joins_lines_with_newlines() {
        let report = compare_documents(&pages(&["a\nz"]), &pages(&["a\nb\nc\nz"]));
        assert_eq!(report.differences.len(), 1);
        assert_eq!(report.differences[0].kind, DiffKind::Added);
        assert_eq!(report.differences[0].text, "b\nc");
    }

    // -----------------------------------------------------------------------
    // Percentage invariant
    // -----------------------------------------------------------------------

    #[test]
    fn percentages_always_sum_to_one_hundred() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["x"], &["x"]),
            (&["a\nb\nc"], &["a\nz\nc"]),
            (&["page one", "page two"], &["page one"]),
            (&["a"], &["b"]),
            (&[], &["only"]),
        ];
        for (a, b) in cases {
            let report = compare_documents(&pages(a), &pages(b));
            assert!(
                (percentage_sum(&report) - 100.0).abs() < EPSILON,
                "sum invariant violated for {a:?} vs {b:?}"
            );
        }
    }

    #[test]
    fn common_percentage_tracks_similarity() {
        let report = compare_documents(&pages(&["a\nb\nc\nd"]), &pages(&["a\nb\nx\nd"]));
        assert!((report.common_percentage - report.similarity).abs() < EPSILON);
        assert!(report.similarity < 100.0);
        assert!(report.similarity > 0.0);
    }

    #[test]
    fn disjoint_documents_have_zero_common() {
        let report = compare_documents(&pages(&["aaa\nbbb"]), &pages(&["ccc\nddd"]));
        assert_eq!(report.similarity, 0.0);
        assert!((report.unique1_percentage - 50.0).abs() < EPSILON);
        assert!((report.unique2_percentage - 50.0).abs() < EPSILON);
    }

    #[test]
    fn symmetric_inputs_swap_unique_shares() {
        let a = pages(&["a\nb\nc", "d"]);
        let b = pages(&["a\nx", "d\ne"]);
        let forward = compare_documents(&a, &b);
        let backward = compare_documents(&b, &a);

        assert!((forward.similarity - backward.similarity).abs() < EPSILON);
        assert!((forward.unique1_percentage - backward.unique2_percentage).abs() < EPSILON);
        assert!((forward.unique2_percentage - backward.unique1_percentage).abs() < EPSILON);
    }
}
