//! Linear-space Needleman-Wunsch scoring
//!
//! # Algorithm
//!
//! The score of a global alignment only ever needs the previous row of the
//! DP matrix, so the final row can be computed with two buffers that are
//! swapped after every row:
//!
//! ```text
//! row[0][j] = j * gap
//! row[i][0] = row[i-1][0] + gap
//! row[i][j] = max(
//!     row[i-1][j-1] + score(row_seq[i-1], col_seq[j-1]),  // Diagonal
//!     row[i][j-1]   + gap,                                // Up
//!     row[i-1][j]   + gap,                                // Left
//! )
//! ```
//!
//! Hirschberg needs the same row computed over *reversed* sequences; the
//! [`Orientation`] parameter reads the inputs back to front instead of
//! allocating reversed copies.

use crate::alignment::ScoringScheme;

/// Direction in which a sequence is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Front to back
    Forward,
    /// Back to front
    Reversed,
}

impl Orientation {
    /// Symbol `i` of `seq` when read in this orientation
    #[inline]
    pub(crate) fn symbol(self, seq: &[u8], i: usize) -> u8 {
        match self {
            Orientation::Forward => seq[i],
            Orientation::Reversed => seq[seq.len() - 1 - i],
        }
    }
}

/// Reusable double buffer for last-row scoring
///
/// Keeping one scorer alive across calls avoids reallocating the two rows;
/// buffers only grow.
#[derive(Debug, Default, Clone)]
pub struct LastRowScorer {
    previous: Vec<i32>,
    current: Vec<i32>,
}

impl LastRowScorer {
    /// Create a scorer with empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer able to handle columns of `column_len` without growing
    pub fn with_capacity(column_len: usize) -> Self {
        Self {
            previous: Vec::with_capacity(column_len + 1),
            current: Vec::with_capacity(column_len + 1),
        }
    }

    /// Final DP row for aligning `row_seq` against `col_seq`
    ///
    /// Both sequences are read in `orientation`. The returned row has
    /// `col_seq.len() + 1` entries and stays valid until the next call.
    pub fn score(
        &mut self,
        row_seq: &[u8],
        col_seq: &[u8],
        orientation: Orientation,
        scoring: &ScoringScheme,
    ) -> &[i32] {
        let gap = scoring.gap;
        let width = col_seq.len() + 1;

        self.current.clear();
        self.current.extend((0..width as i32).map(|j| j * gap));
        self.previous.clear();
        self.previous.resize(width, 0);

        for i in 0..row_seq.len() {
            std::mem::swap(&mut self.previous, &mut self.current);
            let symbol = orientation.symbol(row_seq, i);

            self.current[0] = self.previous[0] + gap;
            for j in 1..width {
                let diagonal =
                    self.previous[j - 1] + scoring.score(symbol, orientation.symbol(col_seq, j - 1));
                let up = self.current[j - 1] + gap;
                let left = self.previous[j] + gap;
                self.current[j] = diagonal.max(up).max(left);
            }
        }

        &self.current
    }
}

/// Final row of the Needleman-Wunsch matrix of `row_seq` against `col_seq`
///
/// Runs in O(|row_seq|·|col_seq|) time and O(|col_seq|) space.
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{last_row, ScoringScheme};
///
/// let scoring = ScoringScheme::default();
/// assert_eq!(last_row(b"AC", b"ACG", &scoring), vec![-2, 1, 4, 3]);
/// // Empty row sequence: the gap ramp
/// assert_eq!(last_row(b"", b"ACG", &scoring), vec![0, -1, -2, -3]);
/// ```
pub fn last_row(row_seq: &[u8], col_seq: &[u8], scoring: &ScoringScheme) -> Vec<i32> {
    LastRowScorer::with_capacity(col_seq.len())
        .score(row_seq, col_seq, Orientation::Forward, scoring)
        .to_vec()
}

/// [`last_row`] computed over both sequences reversed
pub fn last_row_reversed(row_seq: &[u8], col_seq: &[u8], scoring: &ScoringScheme) -> Vec<i32> {
    LastRowScorer::with_capacity(col_seq.len())
        .score(row_seq, col_seq, Orientation::Reversed, scoring)
        .to_vec()
}

/// Optimal global alignment score of `a` against `b` in linear space
///
/// ```
/// use hirschberg::alignment::{global_score, ScoringScheme};
///
/// assert_eq!(global_score(b"GCATGCU", b"GATTACA", &ScoringScheme::default()), 4);
/// ```
pub fn global_score(a: &[u8], b: &[u8], scoring: &ScoringScheme) -> i32 {
    let mut scorer = LastRowScorer::with_capacity(b.len());
    scorer.score(a, b, Orientation::Forward, scoring)[b.len()]
}
