use serde::{Deserialize, Serialize};

use verdiff_types::{ComparisonReport, PdfComparisonReport};

use crate::id::ReportKind;

/// A finished report of either mode, tagged for retrieval by id.
///
/// Serializes with a `type` discriminator (`"pdf"` / `"software"`) alongside
/// the report fields, which is the shape result-lookup callers consume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoredReport {
    Pdf(PdfComparisonReport),
    Software(ComparisonReport),
}

impl StoredReport {
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Pdf(_) => ReportKind::Pdf,
            Self::Software(_) => ReportKind::Software,
        }
    }
}
