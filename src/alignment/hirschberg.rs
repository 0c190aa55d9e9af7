//! Hirschberg linear-space global alignment
//!
//! # Algorithm
//!
//! Split the row sequence at its midpoint, score the upper half forwards
//! and the lower half backwards against the whole column sequence, and
//! cut the column sequence where the two score rows sum to their maximum.
//! The optimal path crosses the midpoint there, so each half can be
//! aligned independently and the results concatenated.
//!
//! Recursion bottoms out when either side is empty (all gaps) or has a
//! single symbol (full-matrix Needleman-Wunsch on at most 2·(n+1) cells).
//!
//! # Complexity
//!
//! O(|row|·|col|) time and O(|row| + |col|) working space. The two score
//! rows live in a workspace shared by the whole recursion, so row buffers
//! are allocated once per call to [`align`].

use crate::alignment::last_row::{LastRowScorer, Orientation};
use crate::alignment::{best_split, needleman_wunsch, AlignedPair, ScoringScheme};

/// Score rows reused by every level of the recursion
struct Workspace {
    forward: LastRowScorer,
    reversed: LastRowScorer,
}

/// Optimal global alignment of `row_seq` against `col_seq` in linear space
///
/// Produces the same score as [`needleman_wunsch`]; among co-optimal
/// alignments the two may pick different ones.
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{align, ScoringScheme};
///
/// let scoring = ScoringScheme::default();
/// let aligned = align(b"GCATGCU", b"GATTACA", &scoring);
///
/// assert_eq!(aligned.first(), b"GCATG-CU");
/// assert_eq!(aligned.second(), b"G-ATTACA");
/// assert_eq!(aligned.score(&scoring), 4);
/// ```
pub fn align(row_seq: &[u8], col_seq: &[u8], scoring: &ScoringScheme) -> AlignedPair {
    log::debug!(
        "Hirschberg alignment of {} x {} symbols",
        row_seq.len(),
        col_seq.len()
    );

    let mut workspace = Workspace {
        forward: LastRowScorer::with_capacity(col_seq.len()),
        reversed: LastRowScorer::with_capacity(col_seq.len()),
    };
    let mut aligned = AlignedPair::with_capacity(row_seq.len() + col_seq.len());
    align_into(row_seq, col_seq, scoring, &mut workspace, &mut aligned);
    aligned
}

/// Append the alignment of `row_seq` against `col_seq` to `out`
fn align_into(
    row_seq: &[u8],
    col_seq: &[u8],
    scoring: &ScoringScheme,
    workspace: &mut Workspace,
    out: &mut AlignedPair,
) {
    if row_seq.is_empty() {
        out.push_second_only(col_seq);
        return;
    }
    if col_seq.is_empty() {
        out.push_first_only(row_seq);
        return;
    }
    if row_seq.len() == 1 || col_seq.len() == 1 {
        out.append(needleman_wunsch(row_seq, col_seq, scoring));
        return;
    }

    let mid = row_seq.len() / 2;
    let (upper, lower) = row_seq.split_at(mid);

    let forward = workspace
        .forward
        .score(upper, col_seq, Orientation::Forward, scoring);
    let reversed = workspace
        .reversed
        .score(lower, col_seq, Orientation::Reversed, scoring);
    let split = best_split(forward, reversed);

    log::trace!(
        "split rows at {} of {}, columns at {} of {}",
        mid,
        row_seq.len(),
        split,
        col_seq.len()
    );

    let (left, right) = col_seq.split_at(split);
    align_into(upper, left, scoring, workspace, out);
    align_into(lower, right, scoring, workspace, out);
}
