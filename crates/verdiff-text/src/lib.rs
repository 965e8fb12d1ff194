//! Document comparator for verdiff (PDF mode).
//!
//! Compares two ordered sequences of page texts. Pages are flattened into
//! page-tagged line sequences so one line-level LCS alignment covers the
//! whole document while every diff hunk keeps the 1-based page it belongs
//! to. Produces a [`PdfComparisonReport`](verdiff_types::PdfComparisonReport).

pub mod compare;
pub mod decode;

pub use compare::compare_documents;
pub use decode::decode_pages;
