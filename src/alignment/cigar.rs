//! CIGAR (Compact Idiosyncratic Gapped Alignment Report) operations
//!
//! A gapped pair describes every alignment column explicitly; CIGAR
//! collapses runs of the same column kind into `<len><code>` operations.
//! The first sequence of a pair plays the query role, the second the
//! reference role.

/// CIGAR operation types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarOp {
    /// M: symbol aligned with symbol (match or mismatch)
    Match(usize),
    /// I: symbol in the first sequence aligned with a gap
    Insertion(usize),
    /// D: gap aligned with a symbol of the second sequence
    Deletion(usize),
}

impl CigarOp {
    /// Get the length of this operation
    pub fn len(&self) -> usize {
        match self {
            CigarOp::Match(n) | CigarOp::Insertion(n) | CigarOp::Deletion(n) => *n,
        }
    }

    /// Check if this operation has zero length (never produced by this crate)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the operation code as a character
    pub fn code(&self) -> char {
        match self {
            CigarOp::Match(_) => 'M',
            CigarOp::Insertion(_) => 'I',
            CigarOp::Deletion(_) => 'D',
        }
    }

    /// Same operation kind with a different length
    fn with_len(self, len: usize) -> Self {
        match self {
            CigarOp::Match(_) => CigarOp::Match(len),
            CigarOp::Insertion(_) => CigarOp::Insertion(len),
            CigarOp::Deletion(_) => CigarOp::Deletion(len),
        }
    }

    fn same_kind(&self, other: &CigarOp) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for CigarOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.len(), self.code())
    }
}

/// Merge adjacent operations of the same kind
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{CigarOp, compress_cigar};
///
/// let ops = vec![
///     CigarOp::Match(1),
///     CigarOp::Match(1),
///     CigarOp::Deletion(1),
///     CigarOp::Match(2),
/// ];
/// assert_eq!(
///     compress_cigar(ops),
///     vec![CigarOp::Match(2), CigarOp::Deletion(1), CigarOp::Match(2)]
/// );
/// ```
pub fn compress_cigar(ops: Vec<CigarOp>) -> Vec<CigarOp> {
    let mut compressed: Vec<CigarOp> = Vec::with_capacity(ops.len());

    for op in ops {
        match compressed.last_mut() {
            Some(last) if last.same_kind(&op) => *last = last.with_len(last.len() + op.len()),
            _ => compressed.push(op),
        }
    }

    compressed
}

/// Format CIGAR operations as a string (e.g. `4M1D3M`)
pub fn format_cigar(cigar: &[CigarOp]) -> String {
    cigar.iter().map(|op| op.to_string()).collect()
}
