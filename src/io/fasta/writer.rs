//! FASTA output of an aligned pair
//!
//! # Format
//!
//! Two records, one per gapped sequence, each on a single unwrapped line
//! so that alignment columns stay aligned by position:
//!
//! ```text
//! >Optimal local alignment of the first sequence:
//! GCATG-CU
//! >Optimal local alignment of the second sequence:
//! G-ATTACA
//! ```

use crate::alignment::AlignedPair;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header of the first record
pub const FIRST_HEADER: &str = "Optimal local alignment of the first sequence:";

/// Header of the second record
pub const SECOND_HEADER: &str = "Optimal local alignment of the second sequence:";

/// Write `aligned` as two FASTA records to any writer
pub fn write_alignment_to<W: Write>(mut writer: W, aligned: &AlignedPair) -> Result<()> {
    let records = [
        (FIRST_HEADER, aligned.first()),
        (SECOND_HEADER, aligned.second()),
    ];
    for (header, sequence) in records {
        writeln!(writer, ">{}", header)?;
        writer.write_all(sequence)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `aligned` as two FASTA records to `path`
///
/// # Example
///
/// ```no_run
/// use hirschberg::io::write_alignment;
/// use hirschberg::{align, ScoringScheme};
///
/// # fn main() -> hirschberg::Result<()> {
/// let aligned = align(b"GCATGCU", b"GATTACA", &ScoringScheme::default());
/// write_alignment("alignment.fa", &aligned)?;
/// # Ok(())
/// # }
/// ```
pub fn write_alignment<P: AsRef<Path>>(path: P, aligned: &AlignedPair) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_alignment_to(BufWriter::new(file), aligned)?;
    log::info!("wrote {} alignment columns to {}", aligned.len(), path.display());
    Ok(())
}
