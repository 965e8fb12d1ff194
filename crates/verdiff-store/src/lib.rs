//! Report storage for verdiff.
//!
//! Finished reports are kept behind the [`ReportStore`] trait so the engine
//! and its persistence are independently testable; nothing in verdiff holds
//! a process-global result map.
//!
//! # Key Types
//!
//! - [`ReportId`] / [`ReportKind`] — Opaque, prefixed report identifiers
//! - [`StoredReport`] — Tagged union of the two report shapes
//! - [`ReportStore`] — Storage abstraction (`put` / `get` / `delete`)
//! - [`InMemoryReportStore`] — `HashMap`-based backend for tests and embedding

pub mod error;
pub mod id;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use id::{ReportId, ReportKind};
pub use memory::InMemoryReportStore;
pub use record::StoredReport;
pub use traits::ReportStore;
