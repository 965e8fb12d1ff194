use crate::error::StoreResult;
use crate::id::ReportId;
use crate::record::StoredReport;

/// Keyed storage for finished reports.
///
/// All implementations must satisfy these invariants:
/// - A report written under an id is returned unchanged by later `get`s.
/// - `get` for an unknown id is `Ok(None)`, never an error.
/// - Concurrent access from multiple request handlers is safe.
/// - The store never inspects or rewrites report contents.
pub trait ReportStore: Send + Sync {
    /// Store a report under the given id, replacing any previous entry.
    fn put(&self, id: &ReportId, report: &StoredReport) -> StoreResult<()>;

    /// Fetch a report by id. Returns `Ok(None)` if the id is unknown.
    fn get(&self, id: &ReportId) -> StoreResult<Option<StoredReport>>;

    /// Remove a report by id. Returns `true` if the report existed.
    fn delete(&self, id: &ReportId) -> StoreResult<bool>;
}
