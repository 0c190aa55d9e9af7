//! hirschberg CLI - optimal pairwise alignment of two FASTA sequences
//!
//! # Usage
//!
//! ```bash
//! # Best local region, aligned globally in linear space
//! hirschberg first.fa second.fa
//!
//! # Whole sequences, custom scores, FASTA output
//! hirschberg first.fa second.fa.gz --global --match 1 --mismatch -1 --gap -2 -o aln.fa
//! ```
//!
//! Set `RUST_LOG=info` for timings, `RUST_LOG=debug` for the located region.

use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser;
use log::info;

use hirschberg::io::{read_sequence, write_alignment, write_report};
use hirschberg::{align, local_align, Result, ScoringScheme};

/// Align two sequences in linear space (Smith-Waterman trimming + Hirschberg)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// FASTA file holding the first sequence (.gz accepted)
    first: PathBuf,

    /// FASTA file holding the second sequence (.gz accepted)
    second: PathBuf,

    /// Write the alignment as two FASTA records to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Score for identical symbols
    #[arg(long = "match", default_value_t = 2, allow_negative_numbers = true)]
    match_score: i32,

    /// Score for differing symbols
    #[arg(long = "mismatch", default_value_t = -1, allow_negative_numbers = true)]
    mismatch_score: i32,

    /// Score for a symbol aligned against a gap
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    gap: i32,

    /// Align the whole sequences, skipping the local reduction
    #[arg(long)]
    global: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let scoring = ScoringScheme::try_new(args.match_score, args.mismatch_score, args.gap)?;
    let first = read_sequence(&args.first)?;
    let second = read_sequence(&args.second)?;

    let start = Instant::now();
    let (aligned, score) = if args.global {
        let aligned = align(&first, &second, &scoring);
        let score = aligned.score(&scoring);
        (aligned, score)
    } else {
        let result = local_align(&first, &second, &scoring);
        info!(
            "local region {:?} x {:?} (local score {})",
            result.region.first, result.region.second, result.region.score
        );
        (result.aligned, result.score)
    };
    info!(
        "aligned {} x {} symbols in {:.3?}: {} columns, score {}",
        first.len(),
        second.len(),
        start.elapsed(),
        aligned.len(),
        score
    );

    write_report(io::stdout().lock(), &aligned)?;
    println!("score: {}  identity: {:.1}%", score, aligned.identity() * 100.0);

    if let Some(output) = &args.output {
        write_alignment(output, &aligned)?;
    }
    Ok(())
}
