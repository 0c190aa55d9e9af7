//! FASTA reading and alignment output through real files

use std::fs;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use hirschberg::io::{read_sequence, write_alignment};
use hirschberg::{local_align, HirschbergError, ScoringScheme};
use tempfile::{Builder, NamedTempFile};

#[test]
fn test_read_multiline_fasta() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, ">seq1 first\nGATTACA\nGATT\n\n>note\nACA\n").unwrap();

    let sequence = read_sequence(temp_file.path()).unwrap();
    assert_eq!(sequence, b"GATTACAGATTACA");
}

#[test]
fn test_read_gzip_fasta() {
    let temp_file = Builder::new().suffix(".fa.gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(temp_file.reopen().unwrap(), Compression::default());
    encoder.write_all(b">compressed\nACGT\nTGCA\n").unwrap();
    encoder.finish().unwrap();

    let sequence = read_sequence(temp_file.path()).unwrap();
    assert_eq!(sequence, b"ACGTTGCA");
}

#[test]
fn test_gap_symbol_in_input_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, ">aligned already\nAC-GT\n").unwrap();

    let err = read_sequence(temp_file.path()).unwrap_err();
    assert!(matches!(err, HirschbergError::InvalidFastaFormat { line: 2, .. }));
}

#[test]
fn test_missing_file() {
    let err = read_sequence("/nonexistent/input.fa").unwrap_err();
    assert!(matches!(err, HirschbergError::Io(_)));
}

#[test]
fn test_align_files_and_write_result() {
    let mut first = NamedTempFile::new().unwrap();
    let mut second = NamedTempFile::new().unwrap();
    writeln!(first, ">first\nTTTTGATTACATTTT").unwrap();
    writeln!(second, ">second\nCCGATTACACC").unwrap();

    let a = read_sequence(first.path()).unwrap();
    let b = read_sequence(second.path()).unwrap();
    let result = local_align(&a, &b, &ScoringScheme::default());

    let output = NamedTempFile::new().unwrap();
    write_alignment(output.path(), &result.aligned).unwrap();

    let text = fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            ">Optimal local alignment of the first sequence:",
            "GATTACA",
            ">Optimal local alignment of the second sequence:",
            "GATTACA",
        ]
    );
}
