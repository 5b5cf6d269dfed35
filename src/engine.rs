//! Smith-Waterman local alignment engine.
//!
//! ```text
//! H(i,j) = max(
//!     0,                                         // local reset
//!     H(i-1, j-1) + substitution(s1[i], s2[j]),  // diag
//!     H(i-1, j)   + gap,                         // up: gap in sequence 2
//!     H(i, j-1)   + gap,                         // left: gap in sequence 1
//! )
//! ```
//!
//! Row 0 and column 0 stay at zero with no predecessors, which is what stops
//! the traceback.

use crate::model::{Alignment, Direction, Position, ScoreMatrix, Sequence};
use crate::scoring::ScoreModel;

/// Aligns two sequences and keeps the full traceback matrix.
///
/// Cells are filled in row-major order. Every direction whose candidate equals
/// the cell score is recorded, in the order diag, up, left. The best position
/// only moves on a strict improvement, so ties resolve to the first cell in
/// scan order.
///
/// # Examples
///
/// ```
/// use swalign::engine::smith_waterman;
/// use swalign::model::Sequence;
/// use swalign::scoring::DefaultScore;
///
/// let s1 = Sequence::from("ABCD");
/// let s2 = Sequence::from("ABXD");
/// let alignment = smith_waterman(&DefaultScore, &s1, &s2);
/// assert_eq!(alignment.score(), 2.5);
/// ```
pub fn smith_waterman<'a, M: ScoreModel>(
    model: &M,
    seq1: &'a Sequence,
    seq2: &'a Sequence,
) -> Alignment<'a> {
    let n = seq1.len();
    let m = seq2.len();
    log::debug!("Filling {}x{} score matrix", n + 1, m + 1);

    let mut matrix = ScoreMatrix::new(n, m);
    let mut best = Position::default();
    let mut best_score = 0.0;
    let gap = model.gap();

    for (i, &a) in seq1.as_chars().iter().enumerate() {
        for (j, &b) in seq2.as_chars().iter().enumerate() {
            let diag = matrix[Position::at(i, j)].score + model.substitution(a, b);
            let up = matrix[Position::at(i, j + 1)].score + gap;
            let left = matrix[Position::at(i + 1, j)].score + gap;
            let score = 0f64.max(diag).max(up).max(left);

            let pos = Position::at(i + 1, j + 1);
            let cell = matrix.cell_mut(pos);
            cell.score = score;

            if score == 0.0 {
                continue;
            }

            for (direction, candidate) in Direction::ORDER.into_iter().zip([diag, up, left]) {
                if candidate == score {
                    cell.predecessors.push(direction);
                }
            }

            if score > best_score {
                best_score = score;
                best = pos;
            }
        }
    }

    log::debug!(
        "Best local score {} at ({}, {})",
        best_score,
        best.x,
        best.y
    );

    Alignment {
        matrix,
        best,
        seq1,
        seq2,
    }
}

/// Computes only the best local score, keeping two rows instead of the matrix.
///
/// Always equal to `smith_waterman(model, seq1, seq2).score()`.
pub fn best_score<M: ScoreModel>(model: &M, seq1: &Sequence, seq2: &Sequence) -> f64 {
    let gap = model.gap();
    let mut prev = vec![0.0; seq2.len() + 1];
    let mut curr = vec![0.0; seq2.len() + 1];
    let mut best = 0.0;

    for &a in seq1.as_chars() {
        curr[0] = 0.0;
        for (j, &b) in seq2.as_chars().iter().enumerate() {
            let diag = prev[j] + model.substitution(a, b);
            let up = prev[j + 1] + gap;
            let left = curr[j] + gap;
            let score = 0f64.max(diag).max(up).max(left);
            curr[j + 1] = score;
            if score > best {
                best = score;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
