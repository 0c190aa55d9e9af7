//! Single-sequence FASTA reader
//!
//! # Format
//!
//! Every line starting with `>` is a header or comment and is skipped; all
//! remaining lines are concatenated into one sequence:
//!
//! ```text
//! >sequence1 description
//! GATTACAGATTACATGCATGCA
//! GATTACA
//! ```
//!
//! Trailing whitespace (including `\r` from CRLF files) and blank lines are
//! ignored. The gap marker `-` is rejected since it could not be told apart
//! from an inserted gap after alignment.

use crate::alignment::GAP;
use crate::error::{HirschbergError, Result};
use crate::io::compression::open_path;
use std::io::BufRead;
use std::path::Path;

/// Read the sequence stored in a FASTA file (optionally gzip-compressed)
///
/// # Example
///
/// ```no_run
/// use hirschberg::io::read_sequence;
///
/// # fn main() -> hirschberg::Result<()> {
/// let sequence = read_sequence("first.fa")?;
/// println!("{} symbols", sequence.len());
/// # Ok(())
/// # }
/// ```
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let sequence = parse_sequence(open_path(path)?)?;
    log::info!("read {} symbols from {}", sequence.len(), path.display());
    Ok(sequence)
}

/// Parse one sequence from any buffered reader
///
/// # Example
///
/// ```
/// use hirschberg::io::parse_sequence;
///
/// let input = b">seq1 test\nGATT\r\nACA\n\n>comment\nGG\n";
/// assert_eq!(parse_sequence(&input[..]).unwrap(), b"GATTACAGG");
/// ```
pub fn parse_sequence<R: BufRead>(mut reader: R) -> Result<Vec<u8>> {
    let mut sequence = Vec::new();
    let mut line = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        line_number += 1;

        if line.first() == Some(&b'>') {
            continue;
        }

        let end = line
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |last| last + 1);
        let content = &line[..end];
        if let Some(column) = content.iter().position(|&s| s == GAP) {
            return Err(HirschbergError::InvalidFastaFormat {
                line: line_number,
                msg: format!(
                    "gap symbol '{}' at column {} is reserved for alignments",
                    GAP as char,
                    column + 1
                ),
            });
        }
        sequence.extend_from_slice(content);
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_headers_and_blank_lines() {
        let input = b">chr1\nACGT\n\nTTGA\n>chr1 continued\nCC";
        assert_eq!(parse_sequence(&input[..]).unwrap(), b"ACGTTTGACC");
    }

    #[test]
    fn test_headerless_input() {
        assert_eq!(parse_sequence(&b"GATTACA\n"[..]).unwrap(), b"GATTACA");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_sequence(&b""[..]).unwrap().is_empty());
        assert!(parse_sequence(&b">only a header\n"[..]).unwrap().is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = b">seq\r\nAC\r\nGT\r\n";
        assert_eq!(parse_sequence(&input[..]).unwrap(), b"ACGT");
    }

    #[test]
    fn test_rejects_gap_symbol() {
        let input = b">seq\nACGT\nAC-GT\n";
        match parse_sequence(&input[..]) {
            Err(HirschbergError::InvalidFastaFormat { line, msg }) => {
                assert_eq!(line, 3);
                assert!(msg.contains("column 3"));
            }
            other => panic!("expected InvalidFastaFormat, got {other:?}"),
        }
    }
}
