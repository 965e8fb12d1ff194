use thiserror::Error;

use verdiff_store::{ReportId, StoreError};
use verdiff_types::CompareError;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("report not found: {0}")]
    ReportNotFound(ReportId),

    #[error("comparison error: {0}")]
    Compare(#[from] CompareError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
