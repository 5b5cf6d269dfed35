//! swalign - Local alignment of two strings
//!
//! Aligns two strings with Smith-Waterman and prints the aligned region as
//! three lines: the first string, match markers, the second string.
//!
//! ## Usage
//!
//! ```bash
//! swalign ABCD ABXD
//! swalign --score --match 2 --mismatch -1 --gap -1 GATTACA GCATGCU
//! swalign --color always 漢字かな 漢字な
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};

use swalign::engine::smith_waterman;
use swalign::model::Sequence;
use swalign::output::{write_colored, write_plain, MatchColorScheme};
use swalign::render::{render, Rendered};
use swalign::scoring::LinearScore;
use swalign::width::UnicodeWidth;

/// Largest matrix (in cells) aligned unless --max-cells says otherwise.
const DEFAULT_MAX_CELLS: usize = 50_000_000;

/// When to color the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    /// Color only when writing to a terminal
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorArg {
    fn enabled(self) -> bool {
        match self {
            ColorArg::Auto => io::stdout().is_terminal(),
            ColorArg::Always => true,
            ColorArg::Never => false,
        }
    }
}

/// swalign - Smith-Waterman local alignment of two strings
///
/// Prints the best local alignment as three lines (first string, markers,
/// second string). Double-width characters are kept in column.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First string (top line)
    #[arg(allow_hyphen_values = true)]
    seq1: String,

    /// Second string (bottom line)
    #[arg(allow_hyphen_values = true)]
    seq2: String,

    /// Score for two equal characters
    #[arg(long = "match", default_value_t = 1.0, allow_negative_numbers = true)]
    match_score: f64,

    /// Score for two different characters
    #[arg(long = "mismatch", default_value_t = -0.5, allow_negative_numbers = true)]
    mismatch_score: f64,

    /// Score for skipping one character in either string
    #[arg(long = "gap", default_value_t = -0.5, allow_negative_numbers = true)]
    gap_score: f64,

    /// Print the alignment score after the three lines
    #[arg(short = 's', long = "score")]
    show_score: bool,

    /// Treat East Asian ambiguous-width characters as double width
    #[arg(long = "cjk")]
    cjk: bool,

    /// Color matches and mismatches
    #[arg(long = "color", value_enum, default_value = "auto")]
    color: ColorArg,

    /// Refuse to align when len(seq1) * len(seq2) exceeds this many cells
    #[arg(long = "max-cells", default_value_t = DEFAULT_MAX_CELLS)]
    max_cells: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

/// Level forced by `-v`; `None` leaves `RUST_LOG` (or the warn default) in charge.
fn verbosity_level(verbose: u8) -> Option<log::LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(log::LevelFilter::Info),
        2 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = verbosity_level(verbose) {
        builder.filter_level(level);
    }
    builder.init();
}

/// Fails when an `n x m` alignment would need more than `max_cells` cells.
fn check_matrix_size(n: usize, m: usize, max_cells: usize) -> Result<()> {
    let cells = n.saturating_mul(m);
    if cells > max_cells {
        anyhow::bail!(
            "Alignment matrix too large: {} x {} = {} cells (limit {}, see --max-cells)",
            n,
            m,
            cells,
            max_cells
        );
    }
    Ok(())
}

/// Writes the three alignment lines, then the score line if requested.
fn write_alignment<W: Write>(
    out: &mut W,
    rendered: &Rendered,
    colored: bool,
    score: Option<f64>,
) -> Result<()> {
    if colored {
        write_colored(out, rendered, &MatchColorScheme)?;
    } else {
        write_plain(out, rendered)?;
    }
    if let Some(score) = score {
        writeln!(out, "score: {}", score)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let model = LinearScore::new(args.match_score, args.mismatch_score, args.gap_score)?;
    let seq1 = Sequence::from(args.seq1.as_str());
    let seq2 = Sequence::from(args.seq2.as_str());

    check_matrix_size(seq1.len(), seq2.len(), args.max_cells)?;
    log::info!(
        "Aligning {} x {} code points (match {}, mismatch {}, gap {})",
        seq1.len(),
        seq2.len(),
        model.match_score(),
        model.mismatch_score(),
        model.gap_score()
    );

    let alignment = smith_waterman(&model, &seq1, &seq2);
    let width = if args.cjk {
        UnicodeWidth::cjk()
    } else {
        UnicodeWidth::new()
    };
    let rendered = render(&alignment, &width);
    log::info!(
        "Best score {} over {} columns",
        alignment.score(),
        rendered.columns().len()
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_alignment(
        &mut handle,
        &rendered,
        args.color.enabled(),
        args.show_score.then(|| alignment.score()),
    )?;

    Ok(())
}
