//! Smith-Waterman trimming to the best local region
//!
//! # Algorithm
//!
//! A linear-space Smith-Waterman pass (scores floored at zero) finds the
//! cell holding the best local score, which is where the optimal local
//! alignment *ends*. Everything after it in either sequence is dropped.
//! Running the same pass over the reversed prefixes finds where the
//! alignment *starts*. What remains is the substring pair the global
//! aligner should work on.
//!
//! ```text
//! left = max(0, cur[j-1]  + gap)
//! up   = max(0, prev[j]   + gap)
//! diag = max(0, prev[j-1] + score(a[j-1], b[i]))
//! cur[j] = max(left, up, diag)
//! ```
//!
//! Rows are indexed by positions of the first sequence; the outer loop
//! walks the second sequence. The first strictly greater cell in scan
//! order is kept as the maximum.

use std::ops::Range;

use crate::alignment::last_row::Orientation;
use crate::alignment::{align, AlignedPair, ScoringScheme};

/// End of the best local alignment found by one trimming pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocalEnd {
    score: i32,
    /// Exclusive end in the first sequence
    first_end: usize,
    /// Exclusive end in the second sequence
    second_end: usize,
}

/// Locate where the best local alignment ends, reading both inputs in
/// `orientation`
fn local_end(
    first: &[u8],
    second: &[u8],
    orientation: Orientation,
    scoring: &ScoringScheme,
) -> LocalEnd {
    let gap = scoring.gap;
    let width = first.len() + 1;
    let mut previous = vec![0i32; width];
    let mut current = vec![0i32; width];

    let mut best = LocalEnd {
        score: 0,
        first_end: 0,
        second_end: 0,
    };

    for i in 0..second.len() {
        let symbol = orientation.symbol(second, i);
        current[0] = 0;
        for j in 1..width {
            let left = (current[j - 1] + gap).max(0);
            let up = (previous[j] + gap).max(0);
            let diag = (previous[j - 1]
                + scoring.score(orientation.symbol(first, j - 1), symbol))
            .max(0);
            let cell = diag.max(up).max(left);
            current[j] = cell;

            if cell > best.score {
                best = LocalEnd {
                    score: cell,
                    first_end: j,
                    second_end: i + 1,
                };
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}

/// Best-scoring local region of two sequences
///
/// Ranges index into the inputs in their original order. When no pair of
/// symbols scores above zero both ranges are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRegion {
    /// Region of the first input
    pub first: Range<usize>,
    /// Region of the second input
    pub second: Range<usize>,
    /// Smith-Waterman score of the region
    pub score: i32,
}

impl LocalRegion {
    /// Check if no positive-scoring region exists
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }
}

/// Find the substring pair bounding the best local alignment
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{find_local_region, ScoringScheme};
///
/// let region = find_local_region(b"TTTTGATTACATTTT", b"CCGATTACACC", &ScoringScheme::default());
/// assert_eq!(region.first, 4..11);
/// assert_eq!(region.second, 2..9);
/// assert_eq!(region.score, 14);
/// ```
pub fn find_local_region(a: &[u8], b: &[u8], scoring: &ScoringScheme) -> LocalRegion {
    let tail = local_end(a, b, Orientation::Forward, scoring);
    if tail.score == 0 {
        return LocalRegion {
            first: 0..0,
            second: 0..0,
            score: 0,
        };
    }

    // Reading the kept prefixes backwards turns their start into an end
    let head = local_end(
        &a[..tail.first_end],
        &b[..tail.second_end],
        Orientation::Reversed,
        scoring,
    );

    let region = LocalRegion {
        first: tail.first_end - head.first_end..tail.first_end,
        second: tail.second_end - head.second_end..tail.second_end,
        score: tail.score,
    };
    log::debug!(
        "local region: first {:?}, second {:?}, score {}",
        region.first,
        region.second,
        region.score
    );
    region
}

/// Trimmed sequences ready for global alignment
///
/// `row` is never shorter than `column`; `swapped` records whether that
/// required exchanging the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedPair<'a> {
    /// Longer trimmed sequence
    pub row: &'a [u8],
    /// Shorter trimmed sequence
    pub column: &'a [u8],
    /// True if `row` comes from the second input
    pub swapped: bool,
    /// Region located in the inputs
    pub region: LocalRegion,
}

/// Trim both sequences to their best local region, longer one first
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{reduce_to_local_alignment, ScoringScheme};
///
/// let trimmed = reduce_to_local_alignment(b"ACGT", b"ACGGT", &ScoringScheme::default());
/// assert_eq!(trimmed.row, b"ACGGT");
/// assert_eq!(trimmed.column, b"ACGT");
/// assert!(trimmed.swapped);
/// ```
pub fn reduce_to_local_alignment<'a>(
    a: &'a [u8],
    b: &'a [u8],
    scoring: &ScoringScheme,
) -> TrimmedPair<'a> {
    let region = find_local_region(a, b, scoring);
    let first = &a[region.first.clone()];
    let second = &b[region.second.clone()];

    if first.len() < second.len() {
        TrimmedPair {
            row: second,
            column: first,
            swapped: true,
            region,
        }
    } else {
        TrimmedPair {
            row: first,
            column: second,
            swapped: false,
            region,
        }
    }
}

/// Optimal alignment of the best local region of two sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAlignment {
    /// Region of each input that was aligned
    pub region: LocalRegion,
    /// Gapped region; `first()` derives from the first input
    pub aligned: AlignedPair,
    /// Global score of `aligned`
    pub score: i32,
}

/// Trim to the best local region, then align it globally in linear space
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{local_align, ScoringScheme};
///
/// let result = local_align(b"XXACGTACGTYY", b"ACGTTACGT", &ScoringScheme::default());
/// assert_eq!(result.aligned.first(), b"ACG-TACGT");
/// assert_eq!(result.aligned.second(), b"ACGTTACGT");
/// assert_eq!(result.score, 15);
/// ```
pub fn local_align(a: &[u8], b: &[u8], scoring: &ScoringScheme) -> LocalAlignment {
    let trimmed = reduce_to_local_alignment(a, b, scoring);
    let aligned = align(trimmed.row, trimmed.column, scoring);
    let aligned = if trimmed.swapped {
        aligned.swapped()
    } else {
        aligned
    };

    LocalAlignment {
        score: aligned.score(scoring),
        region: trimmed.region,
        aligned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_core() {
        let scoring = ScoringScheme::default();
        let region = find_local_region(b"GGACGTCC", b"AAACGTAA", &scoring);
        assert_eq!(region.first, 2..6);
        assert_eq!(region.second, 2..6);
        assert_eq!(region.score, 8);
    }

    #[test]
    fn test_no_shared_symbols() {
        let scoring = ScoringScheme::default();
        let region = find_local_region(b"AAAA", b"TTTT", &scoring);
        assert!(region.is_empty());
        assert_eq!(region.score, 0);

        let trimmed = reduce_to_local_alignment(b"AAAA", b"TTTT", &scoring);
        assert!(trimmed.row.is_empty());
        assert!(trimmed.column.is_empty());
        assert!(!trimmed.swapped);
    }

    #[test]
    fn test_empty_inputs() {
        let scoring = ScoringScheme::default();
        assert!(find_local_region(b"", b"ACGT", &scoring).is_empty());
        assert!(find_local_region(b"ACGT", b"", &scoring).is_empty());
        assert!(find_local_region(b"", b"", &scoring).is_empty());
    }

    #[test]
    fn test_forward_pass_keeps_first_maximum() {
        let scoring = ScoringScheme::default();
        // Two equal ACGT hits in the first input; the earlier end wins
        let end = local_end(b"ACGTTTACGT", b"ACGT", Orientation::Forward, &scoring);
        assert_eq!(end.score, 8);
        assert_eq!(end.first_end, 4);
        assert_eq!(end.second_end, 4);
    }

    #[test]
    fn test_classic_example_region() {
        let scoring = ScoringScheme::default();
        let trimmed = reduce_to_local_alignment(b"GCATGCU", b"GATTACA", &scoring);
        assert_eq!(trimmed.row, b"GCAT");
        assert_eq!(trimmed.column, b"GAT");
        assert!(!trimmed.swapped);
        assert_eq!(trimmed.region.score, 5);
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let scoring = ScoringScheme::default();
        let inputs: [(&[u8], &[u8]); 3] = [
            (b"TTTTGATTACATTTT", b"CCGATTACACC"),
            (b"XXACGTACGTYY", b"ACGTTACGT"),
            (b"GCATGCU", b"GATTACA"),
        ];
        for (a, b) in inputs {
            let once = reduce_to_local_alignment(a, b, &scoring);
            let twice = reduce_to_local_alignment(once.row, once.column, &scoring);
            assert_eq!(twice.row, once.row);
            assert_eq!(twice.column, once.column);
            assert!(!twice.swapped);
        }
    }

    #[test]
    fn test_local_align_restores_input_order() {
        let scoring = ScoringScheme::default();
        let result = local_align(b"ACGT", b"ACGGT", &scoring);
        assert_eq!(result.aligned.ungapped_first(), b"ACGT");
        assert_eq!(result.aligned.ungapped_second(), b"ACGGT");
        assert_eq!(result.score, 7);
        assert_eq!(result.region.first, 0..4);
        assert_eq!(result.region.second, 0..5);
    }

    #[test]
    fn test_local_align_without_region() {
        let result = local_align(b"AAAA", b"TTTT", &ScoringScheme::default());
        assert!(result.aligned.is_empty());
        assert_eq!(result.score, 0);
    }
}
