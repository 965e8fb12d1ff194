use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Which kind of report an id refers to.
///
/// The prefix doubles as the user-visible id namespace: `pdf-…` for document
/// reports, `result-…` for software (tree) reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Pdf,
    Software,
}

impl ReportKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Software => "result",
        }
    }
}

/// Opaque identifier for a stored report: `<prefix>-<uuid v7>`.
///
/// UUID v7 is time-ordered, so ids sort by creation time without carrying a
/// separate timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Mint a fresh id for a report of the given kind.
    pub fn new(kind: ReportKind) -> Self {
        Self(format!("{}-{}", kind.prefix(), Uuid::now_v7()))
    }

    /// Parse an id received from a caller, validating prefix and uuid.
    pub fn parse(raw: &str) -> StoreResult<Self> {
        for kind in [ReportKind::Pdf, ReportKind::Software] {
            if let Some(rest) = raw.strip_prefix(kind.prefix()).and_then(|r| r.strip_prefix('-')) {
                return Uuid::parse_str(rest)
                    .map(|_| Self(raw.to_string()))
                    .map_err(|_| StoreError::InvalidId(raw.to_string()));
            }
        }
        Err(StoreError::InvalidId(raw.to_string()))
    }

    /// The kind encoded in the id prefix.
    pub fn kind(&self) -> ReportKind {
        if self.0.starts_with("pdf-") {
            ReportKind::Pdf
        } else {
            ReportKind::Software
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
