//! Tree comparator for verdiff.
//!
//! Compares two mappings from relative path to file content, classifying
//! every path as unchanged, modified, added, or deleted, and aggregates the
//! result into a [`ComparisonReport`](verdiff_types::ComparisonReport).

pub mod compare;

pub use compare::{compare_trees, FileTree};
