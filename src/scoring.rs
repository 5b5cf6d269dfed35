//! Scoring models for local alignment.
//!
//! A model answers two questions: what aligning two code points is worth,
//! and what skipping one costs. Models are passed to the engine per call.

use thiserror::Error;

/// Errors that can occur when building a scoring model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("{name} score must be a finite number (got {value})")]
    NonFinite { name: &'static str, value: f64 },
}

/// Result type for scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Scoring strategy used by the alignment engine.
///
/// Implementations must be pure: the same inputs always give the same score.
pub trait ScoreModel {
    /// Score for aligning `a` against `b`.
    fn substitution(&self, a: char, b: char) -> f64;

    /// Score added for a gap in either sequence.
    fn gap(&self) -> f64;
}

impl<M: ScoreModel + ?Sized> ScoreModel for &M {
    fn substitution(&self, a: char, b: char) -> f64 {
        (**self).substitution(a, b)
    }

    fn gap(&self) -> f64 {
        (**self).gap()
    }
}

/// Default scoring: match +1.0, mismatch -0.5, gap -0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefaultScore;

impl ScoreModel for DefaultScore {
    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            1.0
        } else {
            -0.5
        }
    }

    fn gap(&self) -> f64 {
        -0.5
    }
}

/// Match/mismatch/gap scoring with configurable values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScore {
    match_score: f64,
    mismatch_score: f64,
    gap_score: f64,
}

impl LinearScore {
    /// Creates a model, rejecting NaN and infinite values.
    pub fn new(match_score: f64, mismatch_score: f64, gap_score: f64) -> ScoringResult<Self> {
        for (name, value) in [
            ("match", match_score),
            ("mismatch", mismatch_score),
            ("gap", gap_score),
        ] {
            if !value.is_finite() {
                return Err(ScoringError::NonFinite { name, value });
            }
        }

        Ok(Self {
            match_score,
            mismatch_score,
            gap_score,
        })
    }

    pub fn match_score(&self) -> f64 {
        self.match_score
    }

    pub fn mismatch_score(&self) -> f64 {
        self.mismatch_score
    }

    pub fn gap_score(&self) -> f64 {
        self.gap_score
    }
}

impl Default for LinearScore {
    fn default() -> Self {
        Self {
            match_score: 1.0,
            mismatch_score: -0.5,
            gap_score: -0.5,
        }
    }
}

impl ScoreModel for LinearScore {
    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn gap(&self) -> f64 {
        self.gap_score
    }
}
