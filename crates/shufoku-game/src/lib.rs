//! Interactive Sudoku game sessions.
//!
//! A [`Game`] wraps a [`GeneratedPuzzle`](shufoku_generator::GeneratedPuzzle)
//! and tracks play: givens fixed by the puzzle, digits the player has
//! placed, and sketched pencil marks. Each placement is confirmed against
//! the stored solution the moment it is made, and the win check
//! re-validates the finished board independently.
//!
//! # Examples
//!
//! ```
//! use shufoku_core::Position;
//! use shufoku_game::{CellState, Game};
//! use shufoku_generator::{Difficulty, PuzzleGenerator, SeedCorpus};
//!
//! let corpus = SeedCorpus::bundled();
//! let generator = PuzzleGenerator::new(&corpus);
//! let puzzle = generator.generate(Difficulty::Easy)?;
//! let mut game = Game::new(puzzle);
//!
//! // Sketch a guess before committing it.
//! let pos = Position::ALL
//!     .into_iter()
//!     .find(|&pos| game.cell(pos).is_empty())
//!     .expect("a fresh puzzle has empty cells");
//! let digit = game.solution()[pos].expect("the solution is complete");
//! game.sketch(pos, digit)?;
//! assert_eq!(game.cell(pos), CellState::Sketch(digit));
//!
//! let placement = game.place(pos, digit)?;
//! assert!(placement.is_accepted());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{Game, Placement},
};

mod cell_state;
mod error;
mod game;
