//! Errors for game session edits.

use derive_more::{Display, Error};

/// Error returned when a cell cannot accept the requested edit.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The cell holds a digit fixed by the puzzle.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The cell already holds a digit the player placed.
    #[display("the cell is already filled")]
    CellAlreadyFilled,
}
