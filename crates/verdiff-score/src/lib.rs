//! Line-level similarity scoring for verdiff.
//!
//! Uses the `similar` crate (Myers diff algorithm) to align two texts line
//! by line and reduce the alignment to a [`SimilarityResult`]: a normalized
//! ratio in `[0, 1]` plus added/deleted line counts. Both comparators build
//! on this one primitive.

pub mod score;

pub use score::{score, score_lines, SimilarityResult};
