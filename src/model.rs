//! Data model for local alignment.
//!
//! This module contains all data structures shared by the engine and renderer:
//! - Sequences of code points
//! - Traceback directions and per-cell predecessor sets
//! - The dynamic-programming score matrix
//! - The alignment result handed to the renderer

use std::ops::Index;

/// An immutable sequence of Unicode code points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    chars: Vec<char>,
}

impl Sequence {
    /// Creates a new sequence from any iterator of code points.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Returns the number of code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the code points as a slice.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Self::new(text.chars())
    }
}

impl Index<usize> for Sequence {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

/// A step of the traceback, pointing from a cell to one of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Consumes one code point from both sequences (`(-1, -1)`).
    Diag,
    /// Consumes one code point from the first sequence only (`(-1, 0)`).
    Up,
    /// Consumes one code point from the second sequence only (`(0, -1)`).
    Left,
}

impl Direction {
    /// Evaluation order used when recording ties.
    pub const ORDER: [Direction; 3] = [Direction::Diag, Direction::Up, Direction::Left];

    /// Row and column offsets of the step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Diag => (-1, -1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Diag => 0b001,
            Direction::Up => 0b010,
            Direction::Left => 0b100,
        }
    }
}

/// Ordered set of directions that reach a cell's score.
///
/// Iteration always yields `Diag`, `Up`, `Left` in that order, so the first
/// entry is the one the evaluation order would have chosen. An empty set marks
/// a local-alignment boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Predecessors(u8);

impl Predecessors {
    /// Adds a direction to the set.
    pub fn push(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Returns true if the set contains the direction.
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Returns true if no direction reaches this cell.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The first recorded direction, the only one followed by traceback.
    pub fn first(&self) -> Option<Direction> {
        self.iter().next()
    }

    /// Iterates over recorded directions in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ORDER.into_iter().filter(|d| self.contains(*d))
    }
}

/// A single cell of the score matrix.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    /// Best local score ending at this cell (never negative)
    pub score: f64,
    /// Directions achieving `score`
    pub predecessors: Predecessors,
}

/// A matrix coordinate, `x` indexing the first sequence and `y` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Creates a position.
    pub fn at(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves one traceback step.
    ///
    /// Only called on cells with a predecessor, which are never in row or
    /// column 0, so the subtraction cannot underflow.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.wrapping_add_signed(dx),
            y: self.y.wrapping_add_signed(dy),
        }
    }
}

/// The `(n+1) × (m+1)` dynamic-programming matrix, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Allocates a zeroed matrix for sequences of length `n` and `m`.
    pub fn new(n: usize, m: usize) -> Self {
        let rows = n + 1;
        let cols = m + 1;
        Self {
            cells: vec![Cell::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows (`n + 1`).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`m + 1`).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets a cell, or `None` outside the matrix.
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.rows && y < self.cols {
            self.cells.get(x * self.cols + y)
        } else {
            None
        }
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.x * self.cols + pos.y]
    }
}

impl Index<Position> for ScoreMatrix {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.cells[pos.x * self.cols + pos.y]
    }
}

/// Result of a local alignment.
///
/// Owns the filled matrix and the best position; borrows the two inputs.
#[derive(Debug, Clone)]
pub struct Alignment<'a> {
    pub(crate) matrix: ScoreMatrix,
    pub(crate) best: Position,
    pub(crate) seq1: &'a Sequence,
    pub(crate) seq2: &'a Sequence,
}

impl<'a> Alignment<'a> {
    /// The best local score (0 when nothing aligns).
    pub fn score(&self) -> f64 {
        self.matrix[self.best].score
    }

    /// Coordinate of the best-scoring cell.
    pub fn best(&self) -> Position {
        self.best
    }

    /// The filled score matrix.
    pub fn matrix(&self) -> &ScoreMatrix {
        &self.matrix
    }

    /// The first (top) sequence.
    pub fn seq1(&self) -> &'a Sequence {
        self.seq1
    }

    /// The second (bottom) sequence.
    pub fn seq2(&self) -> &'a Sequence {
        self.seq2
    }
}
