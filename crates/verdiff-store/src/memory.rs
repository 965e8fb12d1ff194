use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::id::ReportId;
use crate::record::StoredReport;
use crate::traits::ReportStore;

/// In-memory, HashMap-based report store.
///
/// Intended for tests and embedding. All reports are held in memory behind a
/// `RwLock` for safe concurrent access. Reports are cloned on read/write.
pub struct InMemoryReportStore {
    reports: RwLock<HashMap<ReportId, StoredReport>>,
}

impl InMemoryReportStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            reports: RwLock::new(HashMap::new()),
        }
    }

    /// Number of reports currently stored.
    pub fn len(&self) -> usize {
        self.reports.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.reports.read().expect("lock poisoned").is_empty()
    }

    /// Remove all reports from the store.
    pub fn clear(&self) {
        self.reports.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all report ids in the store.
    pub fn all_ids(&self) -> Vec<ReportId> {
        let map = self.reports.read().expect("lock poisoned");
        let mut ids: Vec<ReportId> = map.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportStore for InMemoryReportStore {
    fn put(&self, id: &ReportId, report: &StoredReport) -> StoreResult<()> {
        let mut map = self.reports.write().expect("lock poisoned");
        map.insert(id.clone(), report.clone());
        Ok(())
    }

    fn get(&self, id: &ReportId) -> StoreResult<Option<StoredReport>> {
        let map = self.reports.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn delete(&self, id: &ReportId) -> StoreResult<bool> {
        let mut map = self.reports.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }
}

impl std::fmt::Debug for InMemoryReportStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryReportStore")
            .field("report_count", &self.len())
            .finish()
    }
}
