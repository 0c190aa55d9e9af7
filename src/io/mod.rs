//! I/O glue: FASTA input, alignment output, text reports
//!
//! The alignment core never touches files; these helpers feed it raw
//! sequences and render what it returns.

pub mod compression;
pub mod fasta;
pub mod report;

pub use compression::{is_compressed, open_path};
pub use fasta::{parse_sequence, read_sequence, write_alignment, write_alignment_to};
pub use report::{match_track, write_report};
