//! Per-cell state of a game in progress.

use derive_more::IsVariant;
use shufoku_core::Digit;

/// The state of a single cell in a [`Game`](crate::Game).
///
/// A cell is *decided* when it holds a digit that counts toward the
/// board: a given fixed by the puzzle or a digit the player placed. A
/// sketch is a pencil mark and never counts as a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// A digit fixed by the puzzle. Givens cannot be modified.
    Given(Digit),
    /// A digit placed by the player and confirmed against the solution.
    Filled(Digit),
    /// A pencil mark. A cell holds at most one; sketching again
    /// overwrites it.
    Sketch(Digit),
    /// No digit and no pencil mark.
    Empty,
}

impl CellState {
    /// Returns the decided digit, if any.
    ///
    /// Sketches are pencil marks, not placements, so they yield `None`.
    #[must_use]
    pub fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Sketch(_) | Self::Empty => None,
        }
    }

    /// Returns whether the cell holds a decided digit (given or filled).
    #[must_use]
    pub fn is_decided(self) -> bool {
        self.as_digit().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decided_states_carry_digits() {
        assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D7).as_digit(), Some(Digit::D7));
        assert_eq!(CellState::Sketch(Digit::D7).as_digit(), None);
        assert_eq!(CellState::Empty.as_digit(), None);

        assert!(CellState::Given(Digit::D3).is_decided());
        assert!(CellState::Filled(Digit::D7).is_decided());
        assert!(!CellState::Sketch(Digit::D7).is_decided());
        assert!(!CellState::Empty.is_decided());
    }

    #[test]
    fn test_variant_predicates() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(CellState::Sketch(Digit::D1).is_sketch());
        assert!(CellState::Empty.is_empty());
        assert!(!CellState::Empty.is_given());
        assert!(!CellState::Sketch(Digit::D1).is_filled());
    }
}
