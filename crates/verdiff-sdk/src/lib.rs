//! High-level SDK for verdiff.
//!
//! Provides the [`Engine`] facade implementing the two comparison request
//! contracts (document mode and tree mode) plus result lookup, over an
//! injected [`ReportStore`](verdiff_store::ReportStore). This is the entry
//! point for request handlers and for applications embedding verdiff.

pub mod engine;
pub mod error;

pub use engine::Engine;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use verdiff_store::{InMemoryReportStore, ReportId, ReportKind, ReportStore, StoredReport};
pub use verdiff_tree::FileTree;
pub use verdiff_types::{CompareError, ComparisonReport, PdfComparisonReport};
