//! # swalign - Local Alignment of Unicode Strings
//!
//! Smith-Waterman local alignment over code points, rendered as three lines
//! (top sequence, match markers, bottom sequence) that stay column-aligned in
//! a terminal even when double-width characters are involved.
//!
//! ## Architecture
//!
//! - `model`: Sequences, traceback directions, score matrix and result
//! - `scoring`: Pluggable match/mismatch/gap models
//! - `engine`: Matrix fill and best-cell search
//! - `width`: Display-width capability used by the renderer
//! - `render`: Traceback and three-line rendering
//! - `output`: Plain and colored terminal output
//!
//! ## Example
//!
//! ```
//! use swalign::engine::smith_waterman;
//! use swalign::model::Sequence;
//! use swalign::render::render;
//! use swalign::scoring::DefaultScore;
//! use swalign::width::UnicodeWidth;
//!
//! let s1 = Sequence::from("ABC");
//! let s2 = Sequence::from("ABC");
//! let alignment = smith_waterman(&DefaultScore, &s1, &s2);
//! assert_eq!(alignment.score(), 3.0);
//!
//! let rendered = render(&alignment, &UnicodeWidth::new());
//! assert_eq!(rendered.lines(), ["ABC", "|||", "ABC"]);
//! ```

pub mod engine;
pub mod model;
pub mod output;
pub mod render;
pub mod scoring;
pub mod width;
