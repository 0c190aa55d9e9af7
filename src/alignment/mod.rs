//! Pairwise sequence alignment in linear space
//!
//! This module computes an optimal alignment of two symbol sequences under
//! a linear gap penalty. The usual pipeline first trims both inputs to the
//! region of their best local alignment (Smith-Waterman, two rolling rows)
//! and then aligns that region globally with Hirschberg's divide and
//! conquer, which keeps working memory linear in the sequence lengths.
//!
//! # Core Components
//!
//! - [`ScoringScheme`]: match / mismatch / gap scores
//! - [`last_row`]: final Needleman-Wunsch row in O(n) space
//! - [`best_split`]: column where the optimal path crosses the middle row
//! - [`needleman_wunsch`]: full-matrix base case with traceback
//! - [`align`]: Hirschberg recursion over the pieces above
//! - [`reduce_to_local_alignment`]: Smith-Waterman trimming of both ends
//! - [`local_align`]: trimming followed by [`align`]
//!
//! # Examples
//!
//! ## Global alignment
//! ```
//! use hirschberg::alignment::{align, ScoringScheme};
//!
//! let scoring = ScoringScheme::default();
//! let aligned = align(b"GCATGCU", b"GATTACA", &scoring);
//!
//! assert_eq!(aligned.len(), 8);
//! assert_eq!(aligned.score(&scoring), 4);
//! ```
//!
//! ## Local region, aligned globally
//! ```
//! use hirschberg::alignment::{local_align, ScoringScheme};
//!
//! let result = local_align(b"TTTTGATTACATTTT", b"CCGATTACACC", &ScoringScheme::default());
//! assert_eq!(result.aligned.first(), b"GATTACA");
//! assert_eq!(result.aligned.second(), b"GATTACA");
//! assert_eq!(result.score, 14);
//! ```

pub mod aligned_pair;
pub mod cigar;
pub mod hirschberg;
pub mod last_row;
pub mod local;
pub mod needleman_wunsch;
pub mod partition;
pub mod scoring;

// Re-export public API
pub use aligned_pair::{AlignedPair, GAP};
pub use cigar::{compress_cigar, format_cigar, CigarOp};
pub use hirschberg::align;
pub use last_row::{global_score, last_row, last_row_reversed, LastRowScorer, Orientation};
pub use local::{
    find_local_region, local_align, reduce_to_local_alignment, LocalAlignment, LocalRegion,
    TrimmedPair,
};
pub use needleman_wunsch::needleman_wunsch;
pub use partition::best_split;
pub use scoring::ScoringScheme;
