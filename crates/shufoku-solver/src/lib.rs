//! Backtracking search and rule checks for Sudoku boards.
//!
//! The search targets the first empty cell in row-major order and tries
//! the smallest digit the placement rules allow, recursing until the
//! board is full or every candidate is exhausted. [`solve`] runs the
//! whole search in place; [`solve_trace`] yields it decision by decision.
//! [`placement_fits`] and [`is_complete_and_valid`] expose the underlying
//! rule checks.
//!
//! # Examples
//!
//! ```
//! use shufoku_core::Board;
//! use shufoku_solver::{is_complete_and_valid, solve};
//!
//! let mut board: Board =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()?;
//! assert!(solve(&mut board));
//! assert!(is_complete_and_valid(&board));
//! # Ok::<(), shufoku_core::ParseBoardError>(())
//! ```

pub use self::{
    backtrack::{SolveStep, SolveTrace, solve, solve_trace},
    rules::{is_complete_and_valid, placement_fits},
};

mod backtrack;
mod rules;
pub mod testing;
