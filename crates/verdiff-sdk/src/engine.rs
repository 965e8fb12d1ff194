use std::sync::Arc;

use tracing::debug;

use verdiff_store::{InMemoryReportStore, ReportId, ReportKind, ReportStore, StoredReport};
use verdiff_text::{compare_documents, decode_pages};
use verdiff_tree::{compare_trees, FileTree};
use verdiff_types::{CompareError, ComparisonReport, PdfComparisonReport};

use crate::error::{SdkError, SdkResult};

/// The comparison engine facade.
///
/// Each call is an independent, stateless request: the engine computes a
/// complete report, stores it under a fresh [`ReportId`], and returns both.
/// The backing [`ReportStore`] is injected so persistence is swappable and
/// testable; the engine itself holds no other state.
pub struct Engine {
    store: Arc<dyn ReportStore>,
}

impl Engine {
    /// Engine over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryReportStore::new()))
    }

    /// Engine over a caller-provided store.
    pub fn with_store(store: Arc<dyn ReportStore>) -> Self {
        Self { store }
    }

    /// Compare two paginated documents (PDF mode).
    ///
    /// Both documents are required; `None` means the caller never supplied
    /// that input and fails with [`CompareError::MissingInput`]. An empty
    /// page list is a valid (degenerate) document, not a missing one.
    pub fn compare_pdf(
        &self,
        doc1: Option<&[String]>,
        doc2: Option<&[String]>,
    ) -> SdkResult<(ReportId, PdfComparisonReport)> {
        let pages_a = require(doc1, "document 1")?;
        let pages_b = require(doc2, "document 2")?;

        debug!(
            doc1_pages = pages_a.len(),
            doc2_pages = pages_b.len(),
            "comparing documents"
        );
        let report = compare_documents(pages_a, pages_b);

        let id = ReportId::new(ReportKind::Pdf);
        self.store.put(&id, &StoredReport::Pdf(report.clone()))?;
        debug!(%id, similarity = report.similarity, "document report stored");
        Ok((id, report))
    }

    /// Like [`Engine::compare_pdf`], but decoding raw per-page bytes first.
    pub fn compare_pdf_bytes(
        &self,
        doc1: Option<&[Vec<u8>]>,
        doc2: Option<&[Vec<u8>]>,
    ) -> SdkResult<(ReportId, PdfComparisonReport)> {
        let pages_a = decode_pages(require(doc1, "document 1")?)?;
        let pages_b = decode_pages(require(doc2, "document 2")?)?;
        self.compare_pdf(Some(&pages_a), Some(&pages_b))
    }

    /// Compare two file trees (software mode).
    pub fn compare_tree(
        &self,
        old: Option<&FileTree>,
        new: Option<&FileTree>,
    ) -> SdkResult<(ReportId, ComparisonReport)> {
        let old = require(old, "version 1")?;
        let new = require(new, "version 2")?;

        debug!(
            old_files = old.len(),
            new_files = new.len(),
            "comparing trees"
        );
        let report = compare_trees(old, new)?;

        let id = ReportId::new(ReportKind::Software);
        self.store
            .put(&id, &StoredReport::Software(report.clone()))?;
        debug!(
            %id,
            total_files = report.statistics.total_files,
            code_stability = report.statistics.code_stability,
            "tree report stored"
        );
        Ok((id, report))
    }

    /// Fetch a previously stored report by id.
    pub fn fetch(&self, id: &ReportId) -> SdkResult<StoredReport> {
        self.store
            .get(id)?
            .ok_or_else(|| SdkError::ReportNotFound(id.clone()))
    }

    /// Fetch a report from an untrusted id string.
    pub fn fetch_raw(&self, raw: &str) -> SdkResult<StoredReport> {
        let id = ReportId::parse(raw)?;
        self.fetch(&id)
    }
}

fn require<'a, T: ?Sized>(input: Option<&'a T>, side: &str) -> SdkResult<&'a T> {
    input.ok_or_else(|| CompareError::MissingInput(side.to_string()).into())
}
