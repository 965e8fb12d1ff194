use thiserror::Error;

use crate::unit::UnitLabel;

/// Errors produced while running a comparison request.
///
/// A comparison either succeeds with a complete report or fails with exactly
/// one of these; partial reports are never produced. Degenerate-but-defined
/// inputs (both sides empty, fully disjoint content) are handled by the
/// scoring formulas and are not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    /// One or both inputs were absent (distinct from present-but-empty).
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Content that should be text failed UTF-8 decoding.
    #[error("content at {unit} is not valid UTF-8 (invalid byte at offset {offset})")]
    ContentDecode { unit: UnitLabel, offset: usize },
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_offending_path() {
        let err = CompareError::ContentDecode {
            unit: UnitLabel::path("bin/data.dat"),
            offset: 12,
        };
        let msg = err.to_string();
        assert!(msg.contains("bin/data.dat"));
        assert!(msg.contains("offset 12"));
    }

    #[test]
    fn decode_error_names_the_offending_page() {
        let err = CompareError::ContentDecode {
            unit: UnitLabel::page(7),
            offset: 0,
        };
        assert!(err.to_string().contains("page 7"));
    }
}
