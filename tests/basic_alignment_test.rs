//! Concrete alignment scenarios with hand-checked results

use hirschberg::alignment::{align, local_align, needleman_wunsch, CigarOp, ScoringScheme};
use hirschberg::io::match_track;

#[test]
fn test_textbook_pair() {
    let scoring = ScoringScheme::default();
    let aligned = align(b"GCATGCU", b"GATTACA", &scoring);

    assert_eq!(aligned.first(), b"GCATG-CU");
    assert_eq!(aligned.second(), b"G-ATTACA");
    assert_eq!(aligned.score(&scoring), 4);
    assert_eq!(match_track(&aligned), b"| || x x");

    // Full matrix finds a different co-optimal alignment with the same score
    let full = needleman_wunsch(b"GCATGCU", b"GATTACA", &scoring);
    assert_eq!(full.first(), b"GCA-TGCU");
    assert_eq!(full.second(), b"G-ATTACA");
    assert_eq!(full.score(&scoring), 4);
}

#[test]
fn test_identical_sequences() {
    let scoring = ScoringScheme::default();
    let sequence = b"ACGTACGTTGCA";
    let aligned = align(sequence, sequence, &scoring);

    assert_eq!(aligned.first(), sequence);
    assert_eq!(aligned.second(), sequence);
    assert_eq!(aligned.cigar(), vec![CigarOp::Match(12)]);
    assert_eq!(aligned.identity(), 1.0);
}

#[test]
fn test_local_core_inside_noise() {
    let scoring = ScoringScheme::default();
    let result = local_align(b"TTTTGATTACATTTT", b"CCGATTACACC", &scoring);

    assert_eq!(result.region.first, 4..11);
    assert_eq!(result.region.second, 2..9);
    assert_eq!(result.aligned.first(), b"GATTACA");
    assert_eq!(result.aligned.second(), b"GATTACA");
    assert_eq!(result.score, 14);
}

#[test]
fn test_local_alignment_with_insertion() {
    let scoring = ScoringScheme::default();
    let result = local_align(b"XXACGTACGTYY", b"ACGTTACGT", &scoring);

    assert_eq!(result.aligned.first(), b"ACG-TACGT");
    assert_eq!(result.aligned.second(), b"ACGTTACGT");
    assert_eq!(result.aligned.cigar_string(), "3M1D5M");
    assert_eq!(result.score, 15);
}

#[test]
fn test_no_common_symbols() {
    let result = local_align(b"AAAA", b"TTTT", &ScoringScheme::default());
    assert!(result.region.is_empty());
    assert!(result.aligned.is_empty());
    assert_eq!(result.score, 0);
}

#[test]
fn test_harsh_gaps_prefer_mismatches() {
    let scoring = ScoringScheme::new(1, -1, -5);
    let aligned = align(b"ACGT", b"AGGT", &scoring);
    assert_eq!(aligned.first(), b"ACGT");
    assert_eq!(aligned.second(), b"AGGT");
    assert_eq!(aligned.score(&scoring), 2);
}

#[test]
fn test_long_sequences() {
    let scoring = ScoringScheme::default();
    let unit = b"GATTACACCGTAGGCT";
    let a: Vec<u8> = unit.iter().cycle().take(1600).copied().collect();
    let mut b = a.clone();
    b.remove(800);
    b[1200] = if b[1200] == b'A' { b'C' } else { b'A' };

    let aligned = align(&a, &b, &scoring);
    assert_eq!(aligned.ungapped_first(), a);
    assert_eq!(aligned.ungapped_second(), b);
    assert_eq!(aligned.gaps(), 1);
    assert_eq!(aligned.mismatches(), 1);
    // 1598 matches, one mismatch, one gap
    assert_eq!(aligned.score(&scoring), 1598 * 2 - 1 - 1);
}
