use similar::{capture_diff_slices, Algorithm, DiffTag, TextDiff};

/// The result of scoring two text blobs.
///
/// `ratio` is `2 * matched_lines / (lines_a + lines_b)`, so it is 1.0 exactly
/// when the blobs are identical and 0.0 when they share no common line.
/// The ratio is symmetric: swapping the inputs swaps `added_lines` and
/// `deleted_lines` but leaves `ratio` unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityResult {
    /// Normalized similarity in `[0, 1]`.
    pub ratio: f64,
    /// Lines present only in the second blob.
    pub added_lines: usize,
    /// Lines present only in the first blob.
    pub deleted_lines: usize,
}

impl SimilarityResult {
    /// The identical-inputs result. Also covers the empty-vs-empty case,
    /// which is defined as fully similar rather than an error.
    pub const IDENTICAL: Self = Self {
        ratio: 1.0,
        added_lines: 0,
        deleted_lines: 0,
    };

    /// `ratio` as a 0-100 percentage.
    pub fn percentage(&self) -> f64 {
        self.ratio * 100.0
    }

    /// Returns `true` when the alignment found no differences.
    pub fn is_identical(&self) -> bool {
        self.ratio == 1.0 && self.added_lines == 0 && self.deleted_lines == 0
    }
}

/// Score two text blobs by line-level LCS alignment.
///
/// Lines keep their terminators during alignment, so `"x"` and `"x\n"` are
/// distinct: the ratio is 1.0 iff the blobs are byte-identical.
pub fn score(a: &str, b: &str) -> SimilarityResult {
    if a == b {
        return SimilarityResult::IDENTICAL;
    }

    let diff = TextDiff::from_lines(a, b);
    let lines_a = a.split_inclusive('\n').count();
    let lines_b = b.split_inclusive('\n').count();
    reduce_ops(diff.ops(), lines_a, lines_b)
}

/// Score two pre-split line sequences.
///
/// Used by the document comparator, which aligns page-tagged line slices
/// rather than whole strings.
pub fn score_lines(a: &[&str], b: &[&str]) -> SimilarityResult {
    if a == b {
        return SimilarityResult::IDENTICAL;
    }

    let ops = capture_diff_slices(Algorithm::Myers, a, b);
    reduce_ops(&ops, a.len(), b.len())
}

fn reduce_ops(ops: &[similar::DiffOp], lines_a: usize, lines_b: usize) -> SimilarityResult {
    let mut matched = 0usize;
    let mut added = 0usize;
    let mut deleted = 0usize;

    for op in ops {
        match op.tag() {
            DiffTag::Equal => matched += op.old_range().len(),
            DiffTag::Delete => deleted += op.old_range().len(),
            DiffTag::Insert => added += op.new_range().len(),
            DiffTag::Replace => {
                deleted += op.old_range().len();
                added += op.new_range().len();
            }
        }
    }

    let total = lines_a + lines_b;
    let ratio = if total == 0 {
        1.0
    } else {
        (2.0 * matched as f64 / total as f64).clamp(0.0, 1.0)
    };

    SimilarityResult {
        ratio,
        added_lines: added,
        deleted_lines: deleted,
    }
}
