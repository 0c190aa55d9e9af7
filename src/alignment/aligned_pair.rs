//! Gapped alignment of two sequences

use crate::alignment::{compress_cigar, CigarOp, ScoringScheme};

/// Gap marker inserted into aligned sequences
pub const GAP: u8 = b'-';

/// Two equal-length gapped sequences
///
/// Column `k` pairs `first()[k]` with `second()[k]`; at most one of the two
/// is [`GAP`]. Removing the gaps from `first()` gives back the first input
/// and likewise for `second()`.
///
/// # Example
///
/// ```
/// use hirschberg::alignment::{align, ScoringScheme};
///
/// let scoring = ScoringScheme::default();
/// let aligned = align(b"ACGT", b"AGT", &scoring);
///
/// assert_eq!(aligned.first(), b"ACGT");
/// assert_eq!(aligned.second(), b"A-GT");
/// assert_eq!(aligned.cigar_string(), "1M1I2M");
/// assert_eq!(aligned.score(&scoring), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AlignedPair {
    first: Vec<u8>,
    second: Vec<u8>,
}

impl AlignedPair {
    /// Create an empty pair
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            first: Vec::with_capacity(capacity),
            second: Vec::with_capacity(capacity),
        }
    }

    /// Build a pair from already gapped sequences
    ///
    /// # Panics
    ///
    /// Panics if the sequences differ in length.
    pub fn from_gapped(first: Vec<u8>, second: Vec<u8>) -> Self {
        assert_eq!(
            first.len(),
            second.len(),
            "aligned sequences must have equal length"
        );
        Self { first, second }
    }

    /// Gapped first sequence
    pub fn first(&self) -> &[u8] {
        &self.first
    }

    /// Gapped second sequence
    pub fn second(&self) -> &[u8] {
        &self.second
    }

    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Check if the alignment has no columns
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Consume the pair, returning `(first, second)`
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.first, self.second)
    }

    /// Exchange the roles of the two sequences
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Iterate over `(first, second)` columns
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }

    pub(crate) fn push(&mut self, a: u8, b: u8) {
        self.first.push(a);
        self.second.push(b);
    }

    /// Pair every symbol of `seq` with a gap on the second side
    pub(crate) fn push_first_only(&mut self, seq: &[u8]) {
        self.first.extend_from_slice(seq);
        self.second.resize(self.second.len() + seq.len(), GAP);
    }

    /// Pair every symbol of `seq` with a gap on the first side
    pub(crate) fn push_second_only(&mut self, seq: &[u8]) {
        self.first.resize(self.first.len() + seq.len(), GAP);
        self.second.extend_from_slice(seq);
    }

    pub(crate) fn append(&mut self, other: AlignedPair) {
        self.first.extend(other.first);
        self.second.extend(other.second);
    }

    /// Total score of the alignment under `scoring`
    ///
    /// Symbol/symbol columns score [`ScoringScheme::score`], symbol/gap
    /// columns score `scoring.gap`.
    pub fn score(&self, scoring: &ScoringScheme) -> i32 {
        self.columns()
            .map(|(a, b)| {
                if a == GAP || b == GAP {
                    scoring.gap
                } else {
                    scoring.score(a, b)
                }
            })
            .sum()
    }

    /// First sequence with gaps removed
    pub fn ungapped_first(&self) -> Vec<u8> {
        self.first.iter().copied().filter(|&s| s != GAP).collect()
    }

    /// Second sequence with gaps removed
    pub fn ungapped_second(&self) -> Vec<u8> {
        self.second.iter().copied().filter(|&s| s != GAP).collect()
    }

    /// Columns pairing identical symbols
    pub fn matches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a == b && a != GAP)
            .count()
    }

    /// Columns pairing differing symbols
    pub fn mismatches(&self) -> usize {
        self.columns()
            .filter(|&(a, b)| a != b && a != GAP && b != GAP)
            .count()
    }

    /// Columns containing a gap
    pub fn gaps(&self) -> usize {
        self.columns().filter(|&(a, b)| a == GAP || b == GAP).count()
    }

    /// Fraction of columns that are matches (0.0 for an empty alignment)
    pub fn identity(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.matches() as f64 / self.len() as f64
        }
    }

    /// Compressed CIGAR describing the alignment
    pub fn cigar(&self) -> Vec<CigarOp> {
        let ops = self
            .columns()
            .map(|(a, b)| {
                if b == GAP {
                    CigarOp::Insertion(1)
                } else if a == GAP {
                    CigarOp::Deletion(1)
                } else {
                    CigarOp::Match(1)
                }
            })
            .collect();
        compress_cigar(ops)
    }

    /// CIGAR string for display
    pub fn cigar_string(&self) -> String {
        crate::alignment::cigar::format_cigar(&self.cigar())
    }
}
