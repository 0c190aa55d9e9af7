//! Error types for hirschberg
//!
//! The alignment core is a pure computation, so the taxonomy is narrow:
//! rejected scoring schemes and the I/O failures of the FASTA glue.
//! Inconsistencies inside the dynamic programming tables are bugs and
//! panic instead of surfacing here.

use std::io;
use thiserror::Error;

/// Result type alias for hirschberg operations
pub type Result<T> = std::result::Result<T, HirschbergError>;

/// Error types that can occur in hirschberg
#[derive(Debug, Error)]
pub enum HirschbergError {
    /// Scoring parameters that would make alignment degenerate
    #[error(
        "Invalid scoring scheme (match={match_score}, mismatch={mismatch_score}, gap={gap}): {reason}"
    )]
    InvalidScoringScheme {
        /// Score for identical symbols
        match_score: i32,
        /// Score for differing symbols
        mismatch_score: i32,
        /// Score for a symbol aligned against a gap
        gap: i32,
        /// Which constraint was violated
        reason: &'static str,
    },

    /// Malformed FASTA input
    #[error("Invalid FASTA format at line {line}: {msg}")]
    InvalidFastaFormat {
        /// Line number where error occurred (1-based)
        line: usize,
        /// Error message
        msg: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HirschbergError::InvalidScoringScheme {
            match_score: 1,
            mismatch_score: 3,
            gap: -1,
            reason: "match score must exceed mismatch score",
        };
        assert!(err.to_string().contains("match=1"));
        assert!(err.to_string().contains("must exceed"));

        let err = HirschbergError::InvalidFastaFormat {
            line: 3,
            msg: "gap symbol".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid FASTA format at line 3: gap symbol");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing.fa");
        let err: HirschbergError = io_err.into();
        assert!(matches!(err, HirschbergError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
