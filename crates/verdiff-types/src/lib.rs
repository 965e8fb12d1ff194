//! Foundation types for verdiff.
//!
//! This crate provides the report records, unit labels, and error taxonomy
//! used throughout the verdiff system. Every other verdiff crate depends on
//! `verdiff-types`.
//!
//! # Key Types
//!
//! - [`ComparisonReport`] / [`Statistics`] / [`FileChangeDetail`] — Tree-mode report
//! - [`PdfComparisonReport`] / [`Difference`] — Document-mode report
//! - [`UnitLabel`] — Addressable content unit (a file path or a page number)
//! - [`CompareError`] — Shared comparison error taxonomy
//!
//! All report records serialize to the exact JSON field names consumed by
//! downstream renderers and exporters; unknown fields are rejected on input.

pub mod error;
pub mod report;
pub mod unit;

pub use error::{CompareError, CompareResult};
pub use report::{
    ComparisonReport, DiffKind, Difference, FileChangeDetail, PdfComparisonReport, Statistics,
};
pub use unit::UnitLabel;
