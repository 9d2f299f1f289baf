//! Sudoku puzzle generation from a curated seed corpus.
//!
//! Puzzles are produced by drawing a solved seed board from a difficulty
//! band of a [`SeedCorpus`], scrambling it with a long sequence of
//! validity-preserving [`shuffle`] operations, blanking a
//! difficulty-dependent number of cells, and solving the result to pin
//! down the reference solution. A [`PuzzleSeed`] fully determines the
//! outcome, so puzzles can be reproduced, shared, and replayed.
//!
//! # Examples
//!
//! ```
//! use shufoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed, SeedCorpus};
//!
//! let corpus = SeedCorpus::bundled();
//! let generator = PuzzleGenerator::new(&corpus);
//! let puzzle =
//!     generator.generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("first game"))?;
//! assert_eq!(puzzle.problem.count_empty(), 36);
//! assert!(puzzle.problem.is_sub_assignment_of(&puzzle.solution));
//! # Ok::<(), shufoku_generator::GenerateError>(())
//! ```

pub use self::{
    corpus::{BandLayout, LoadCorpusError, ParseCorpusError, SeedBoard, SeedCorpus},
    difficulty::Difficulty,
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};

mod corpus;
mod difficulty;
mod generator;
mod seed;
pub mod shuffle;
