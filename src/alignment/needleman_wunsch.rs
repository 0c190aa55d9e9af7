//! Full-matrix Needleman-Wunsch global alignment
//!
//! Quadratic in space, so Hirschberg only calls it once one side has
//! shrunk to a single symbol; there the matrix is O(max(|a|, |b|)) cells.
//! It is correct for any input size and doubles as the reference the
//! linear-space path is checked against.

use crate::alignment::{AlignedPair, ScoringScheme, GAP};

/// Global alignment with full traceback
///
/// # Algorithm
///
/// ```text
/// F(i,0) = i * gap
/// F(0,j) = j * gap
/// F(i,j) = max(
///     F(i-1, j-1) + score(a[i-1], b[j-1]),  // Diagonal
///     F(i-1, j)   + gap,                    // Up: a[i-1] against a gap
///     F(i, j-1)   + gap,                    // Left: gap against b[j-1]
/// )
/// ```
///
/// Traceback walks from `(|a|, |b|)` to the origin preferring
/// Diagonal, then Up, then Left.
///
/// # Panics
///
/// Panics if the traceback reaches a cell no transition can explain,
/// which would mean the matrix was filled inconsistently.
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{needleman_wunsch, ScoringScheme};
///
/// let aligned = needleman_wunsch(b"GCATGCU", b"GATTACA", &ScoringScheme::default());
/// assert_eq!(aligned.first(), b"GCA-TGCU");
/// assert_eq!(aligned.second(), b"G-ATTACA");
/// ```
pub fn needleman_wunsch(a: &[u8], b: &[u8], scoring: &ScoringScheme) -> AlignedPair {
    let m = a.len();
    let n = b.len();
    let gap = scoring.gap;

    let mut matrix = vec![vec![0i32; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i as i32 * gap;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j as i32 * gap;
    }

    for i in 1..=m {
        for j in 1..=n {
            let diagonal = matrix[i - 1][j - 1] + scoring.score(a[i - 1], b[j - 1]);
            let up = matrix[i - 1][j] + gap;
            let left = matrix[i][j - 1] + gap;
            matrix[i][j] = diagonal.max(up).max(left);
        }
    }

    traceback(&matrix, a, b, scoring)
}

fn traceback(matrix: &[Vec<i32>], a: &[u8], b: &[u8], scoring: &ScoringScheme) -> AlignedPair {
    let mut aligned = AlignedPair::with_capacity(a.len() + b.len());
    let mut i = a.len();
    let mut j = b.len();

    // Columns are collected back to front
    while i > 0 || j > 0 {
        let cell = matrix[i][j];
        if i > 0 && j > 0 && cell == matrix[i - 1][j - 1] + scoring.score(a[i - 1], b[j - 1]) {
            aligned.push(a[i - 1], b[j - 1]);
            i -= 1;
            j -= 1;
        } else if i > 0 && cell == matrix[i - 1][j] + scoring.gap {
            aligned.push(a[i - 1], GAP);
            i -= 1;
        } else if j > 0 && cell == matrix[i][j - 1] + scoring.gap {
            aligned.push(GAP, b[j - 1]);
            j -= 1;
        } else {
            panic!("traceback stalled at ({i}, {j}): no transition reproduces score {cell}");
        }
    }

    let (mut first, mut second) = aligned.into_parts();
    first.reverse();
    second.reverse();
    AlignedPair::from_gapped(first, second)
}
