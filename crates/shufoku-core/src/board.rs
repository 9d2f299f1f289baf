//! The 9×9 board.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 9×9 Sudoku board.
///
/// Cells hold `Option<Digit>`; `None` is an empty cell. The same type
/// represents puzzle boards (with empties) and solved boards (fully
/// populated); completeness is a property checked by callers, not a
/// separate type.
///
/// Boards parse from and display as 81-character row-major strings.
/// When parsing, `'.'`, `'_'`, and `'0'` all mean empty, and whitespace is
/// ignored so multi-line literals stay readable.
///
/// # Examples
///
/// ```
/// use shufoku_core::{Board, Digit, Position};
///
/// let board: Board = "\
///     53_ _7_ ___ \
///     6__ 195 ___ \
///     _98 ___ _6_ \
///     8__ _6_ __3 \
///     4__ 8_3 __1 \
///     7__ _2_ __6 \
///     _6_ ___ 28_ \
///     ___ 419 __5 \
///     ___ _8_ _79 \
/// "
/// .parse()?;
///
/// assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(board[Position::new(2, 0)], None);
/// assert_eq!(board.count_empty(), 51);
/// # Ok::<(), shufoku_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the cell at `pos`.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Swaps the contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.cells.swap(a.index(), b.index());
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns whether every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns whether every filled cell of `self` holds the same digit as
    /// the corresponding cell of `other`.
    ///
    /// Empty cells of `self` are unconstrained, so a puzzle is a
    /// sub-assignment of each of its completions.
    #[must_use]
    pub fn is_sub_assignment_of(&self, other: &Self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self[pos].is_none() || self[pos] == other[pos])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

/// Error returned when parsing a [`Board`] from text fails.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The input contained a character that is neither a digit, an empty
    /// marker (`.`, `_`, `0`), nor whitespace.
    #[display("invalid character {character:?} at cell {cell}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based index of the cell being read when it appeared.
        cell: usize,
    },
    /// The input did not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    BadLength {
        /// Number of cells actually found.
        found: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut cell = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                _ => Some(
                    Digit::from_char(c)
                        .ok_or(ParseBoardError::InvalidCharacter { character: c, cell })?,
                ),
            };
            if cell >= 81 {
                // Count the rest so the error reports the real size.
                cell += 1;
                continue;
            }
            board.cells[cell] = digit;
            cell += 1;
        }
        if cell != 81 {
            return Err(ParseBoardError::BadLength { found: cell });
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Formats the board as 81 characters in row-major order, `.` for
    /// empty cells. The output round-trips through [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_new_is_empty() {
        let board = Board::new();
        assert_eq!(board.count_empty(), 81);
        assert!(!board.is_full());
        for pos in Position::ALL {
            assert_eq!(board[pos], None);
        }
    }

    #[test]
    fn test_parse_solved_board() {
        let board: Board = SOLVED.parse().expect("valid board literal");
        assert!(board.is_full());
        assert_eq!(board.count_empty(), 0);
        assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(board[Position::new(8, 0)], Some(Digit::D2));
        assert_eq!(board[Position::new(0, 8)], Some(Digit::D3));
        assert_eq!(board[Position::new(8, 8)], Some(Digit::D9));
    }

    #[test]
    fn test_parse_empty_markers_and_whitespace() {
        let board: Board = "\
            53_ .7. 000\n\
            6__ 195 ___\n\
            _98 ___ _6_\n\
            8__ _6_ __3\n\
            4__ 8_3 __1\n\
            7__ _2_ __6\n\
            _6_ ___ 28_\n\
            ___ 419 __5\n\
            ___ _8_ _79\n"
            .parse()
            .expect("valid board literal");
        assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
        assert_eq!(board[Position::new(2, 0)], None);
        assert_eq!(board[Position::new(6, 0)], None);
        assert_eq!(board.count_empty(), 51);
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let input = format!("x{}", ".".repeat(80));
        assert_eq!(
            input.parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter {
                character: 'x',
                cell: 0
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            ".".repeat(80).parse::<Board>(),
            Err(ParseBoardError::BadLength { found: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Board>(),
            Err(ParseBoardError::BadLength { found: 82 })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let board: Board = SOLVED.parse().expect("valid board literal");
        assert_eq!(board.to_string(), SOLVED);
        let reparsed: Board = board.to_string().parse().expect("display output parses");
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_set_get_swap() {
        let mut board = Board::new();
        let a = Position::new(1, 2);
        let b = Position::new(7, 6);
        board.set(a, Some(Digit::D4));
        assert_eq!(board.get(a), Some(Digit::D4));
        board.swap(a, b);
        assert_eq!(board.get(a), None);
        assert_eq!(board.get(b), Some(Digit::D4));
    }

    #[test]
    fn test_sub_assignment() {
        let solution: Board = SOLVED.parse().expect("valid board literal");
        let mut puzzle = solution.clone();
        puzzle.set(Position::new(0, 0), None);
        puzzle.set(Position::new(4, 4), None);
        assert!(puzzle.is_sub_assignment_of(&solution));
        assert!(solution.is_sub_assignment_of(&solution));

        let mut contradicting = puzzle.clone();
        contradicting.set(Position::new(1, 0), Some(Digit::D1));
        assert!(!contradicting.is_sub_assignment_of(&solution));
    }

    fn cell_strategy() -> impl Strategy<Value = Option<Digit>> {
        prop::option::of(prop::sample::select(Digit::ALL.to_vec()))
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(
            cells in prop::collection::vec(cell_strategy(), 81)
        ) {
            let mut board = Board::new();
            for (pos, cell) in Position::ALL.into_iter().zip(cells) {
                board.set(pos, cell);
            }
            let reparsed: Board = board.to_string().parse().expect("display output parses");
            prop_assert_eq!(reparsed, board);
        }
    }
}
