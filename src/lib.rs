//! # hirschberg
//!
//! Optimal pairwise sequence alignment in linear space.
//!
//! Two sequences are first reduced to the region of their best local
//! alignment (Smith-Waterman with scores floored at zero, two rolling rows),
//! and that region is then aligned end to end with Hirschberg's
//! divide-and-conquer Needleman-Wunsch. Memory stays proportional to the
//! sequence lengths rather than their product.
//!
//! ## Quick Start
//!
//! ```
//! use hirschberg::{local_align, ScoringScheme};
//!
//! let scoring = ScoringScheme::default(); // +2 / -1 / -1
//! let result = local_align(b"GGACGTCC", b"AAACGTAA", &scoring);
//!
//! assert_eq!(result.aligned.first(), b"ACGT");
//! assert_eq!(result.aligned.second(), b"ACGT");
//! assert_eq!(result.score, 8);
//! ```
//!
//! ## Reading FASTA input
//!
//! ```no_run
//! use hirschberg::io::{read_sequence, write_report};
//! use hirschberg::{local_align, ScoringScheme};
//!
//! # fn main() -> hirschberg::Result<()> {
//! let a = read_sequence("first.fa")?;
//! let b = read_sequence("second.fa.gz")?;
//! let result = local_align(&a, &b, &ScoringScheme::default());
//! write_report(std::io::stdout().lock(), &result.aligned)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod alignment;
pub mod error;
pub mod io;

pub use alignment::{
    align, local_align, reduce_to_local_alignment, AlignedPair, LocalAlignment, ScoringScheme,
    GAP,
};
pub use error::{HirschbergError, Result};
