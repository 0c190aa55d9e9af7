//! Transparent decompression of input files
//!
//! Sequence files are frequently shipped gzip-compressed. Compression is
//! detected from the file extension (`.gz`, `.bgz`); BGZF files are valid
//! multi-member gzip streams, so one decoder handles both.

use crate::error::Result;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Extensions treated as gzip-compressed
const GZIP_EXTENSIONS: [&str; 2] = ["gz", "bgz"];

/// Check whether `path` names a gzip-compressed file
pub fn is_compressed<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| GZIP_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Open `path` for buffered reading, decompressing if needed
pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead + Send>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if is_compressed(path) {
        log::debug!("reading {} through gzip decoder", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
