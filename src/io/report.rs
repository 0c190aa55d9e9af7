//! Human-readable rendering of an aligned pair
//!
//! ```text
//! GCATG-CU
//! | || x x
//! G-ATTACA
//! ```

use crate::alignment::{AlignedPair, GAP};
use crate::error::Result;
use std::io::Write;

/// Symbol shown between identical symbols
pub const MATCH_MARK: u8 = b'|';
/// Symbol shown between differing symbols
pub const MISMATCH_MARK: u8 = b'x';
/// Symbol shown wherever either side is a gap
pub const GAP_MARK: u8 = b' ';

/// Middle line of the report, one mark per alignment column
///
/// # Example
///
/// ```
/// use hirschberg::io::match_track;
/// use hirschberg::AlignedPair;
///
/// let aligned = AlignedPair::from_gapped(b"GCATG-CU".to_vec(), b"G-ATTACA".to_vec());
/// assert_eq!(match_track(&aligned), b"| || x x");
/// ```
pub fn match_track(aligned: &AlignedPair) -> Vec<u8> {
    aligned
        .columns()
        .map(|(a, b)| {
            if a == GAP || b == GAP {
                GAP_MARK
            } else if a == b {
                MATCH_MARK
            } else {
                MISMATCH_MARK
            }
        })
        .collect()
}

/// Write first sequence, match track and second sequence as three lines
pub fn write_report<W: Write>(mut writer: W, aligned: &AlignedPair) -> Result<()> {
    for line in [aligned.first(), &match_track(aligned), aligned.second()] {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
