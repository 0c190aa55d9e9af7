//! Column split for Hirschberg's divide step
//!
//! Given the forward last row of the upper half and the reversed last row
//! of the lower half, the optimal path through the full matrix crosses the
//! middle row at the column maximising their sum.

/// Column where the optimal alignment path crosses the row midpoint
///
/// `forward` is the last row for the upper half of the row sequence against
/// the full column sequence. `reversed` is the last row for the reversed
/// lower half against the reversed column sequence, so `reversed[k]`
/// belongs to column `n - k`.
///
/// Ties resolve to the lowest column index.
///
/// # Panics
///
/// Panics if the rows differ in length.
///
/// # Example
///
/// ```
/// use hirschberg::alignment::best_split;
///
/// // Sums per column: 0+0, 3+0, 3+0, 1+1
/// assert_eq!(best_split(&[0, 3, 3, 1], &[1, 0, 0, 0]), 1);
/// ```
pub fn best_split(forward: &[i32], reversed: &[i32]) -> usize {
    assert_eq!(
        forward.len(),
        reversed.len(),
        "score rows must span the same columns"
    );

    let mut best_column = 0;
    let mut best_sum = i32::MIN;
    for (column, (&f, &r)) in forward.iter().zip(reversed.iter().rev()).enumerate() {
        let sum = f + r;
        if sum > best_sum {
            best_sum = sum;
            best_column = column;
        }
    }

    best_column
}
