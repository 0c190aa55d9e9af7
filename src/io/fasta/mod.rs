//! FASTA input and output
//!
//! Input is read as a single sequence with header lines dropped; output is
//! the aligned pair as two unwrapped records.

mod reader;
mod writer;

pub use reader::{parse_sequence, read_sequence};
pub use writer::{write_alignment, write_alignment_to, FIRST_HEADER, SECOND_HEADER};
