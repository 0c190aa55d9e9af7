//! Linear gap-penalty scoring for sequence alignment

use crate::error::{HirschbergError, Result};

/// Scoring scheme for pairwise alignment
///
/// Defines the score for identical symbols, the score for differing
/// symbols, and the (linear) penalty for aligning a symbol against a gap.
/// Every gap column costs `gap`; there is no separate open penalty.
///
/// # Example
///
/// ```
/// use hirschberg::alignment::ScoringScheme;
///
/// // Default scoring (match=2, mismatch=-1, gap=-1)
/// let scoring = ScoringScheme::default();
///
/// // Custom scoring
/// let custom = ScoringScheme {
///     match_score: 5,
///     mismatch_score: -4,
///     gap: -3,
/// };
/// assert!(custom.validate().is_ok());
/// # let _ = scoring;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    /// Score for identical symbols (positive)
    pub match_score: i32,
    /// Score for differing symbols (non-positive)
    pub mismatch_score: i32,
    /// Score for a symbol aligned against a gap (non-positive)
    pub gap: i32,
}

impl Default for ScoringScheme {
    /// Default scoring parameters
    ///
    /// - Match: +2
    /// - Mismatch: -1
    /// - Gap: -1
    fn default() -> Self {
        Self {
            match_score: 2,
            mismatch_score: -1,
            gap: -1,
        }
    }
}

impl ScoringScheme {
    /// Create a scoring scheme without validation
    ///
    /// Unusual values still produce well-defined (if unintuitive)
    /// alignments; use [`ScoringScheme::try_new`] to reject them.
    pub fn new(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }

    /// Create a scoring scheme, rejecting degenerate parameters
    ///
    /// # Example
    ///
    /// ```
    /// use hirschberg::alignment::ScoringScheme;
    ///
    /// assert!(ScoringScheme::try_new(2, -1, -1).is_ok());
    /// assert!(ScoringScheme::try_new(1, 1, -1).is_err());
    /// assert!(ScoringScheme::try_new(2, -1, 1).is_err());
    /// ```
    pub fn try_new(match_score: i32, mismatch_score: i32, gap: i32) -> Result<Self> {
        let scoring = Self::new(match_score, mismatch_score, gap);
        scoring.validate()?;
        Ok(scoring)
    }

    /// Check that identical symbols score strictly better than differing
    /// ones and that mismatches and gaps are penalties
    pub fn validate(&self) -> Result<()> {
        let reason = if self.match_score <= 0 {
            Some("match score must be positive")
        } else if self.match_score <= self.mismatch_score {
            Some("match score must exceed mismatch score")
        } else if self.mismatch_score > 0 {
            Some("mismatch score must not be positive")
        } else if self.gap > 0 {
            Some("gap penalty must not be positive")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(HirschbergError::InvalidScoringScheme {
                match_score: self.match_score,
                mismatch_score: self.mismatch_score,
                gap: self.gap,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Calculate the score for aligning two symbols
    ///
    /// # Example
    ///
    /// ```
    /// use hirschberg::alignment::ScoringScheme;
    ///
    /// let scoring = ScoringScheme::default();
    /// assert_eq!(scoring.score(b'A', b'A'), 2);  // Match
    /// assert_eq!(scoring.score(b'A', b'C'), -1); // Mismatch
    /// ```
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}
