//! Placement checking and full-board validation.
//!
//! Both functions here are total over well-formed boards: they never panic
//! and never error. [`placement_fits`] is the single constraint predicate
//! shared by solving and generation; [`is_complete_and_valid`] is the
//! independent global check used as the authoritative win gate.

use shufoku_core::{Board, Digit, DigitSet, House, Position};

/// Returns whether placing `digit` at `pos` respects the row, column, and
/// box uniqueness rules.
///
/// The target cell itself is excluded from comparison, so a digit already
/// placed at `pos` can be validated in place: the check asks whether the
/// digit occurs *elsewhere* in any of the three houses containing `pos`.
///
/// # Examples
///
/// ```
/// use shufoku_core::{Board, Digit, Position};
/// use shufoku_solver::placement_fits;
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), Some(Digit::D5));
///
/// // Same row
/// assert!(!placement_fits(&board, Position::new(8, 0), Digit::D5));
/// // Same column
/// assert!(!placement_fits(&board, Position::new(0, 8), Digit::D5));
/// // Same box
/// assert!(!placement_fits(&board, Position::new(1, 1), Digit::D5));
/// // Unrelated cell
/// assert!(placement_fits(&board, Position::new(4, 4), Digit::D5));
/// // The placed cell validates itself
/// assert!(placement_fits(&board, Position::new(0, 0), Digit::D5));
/// ```
#[must_use]
pub fn placement_fits(board: &Board, pos: Position, digit: Digit) -> bool {
    let houses = [House::row_of(pos), House::column_of(pos), House::box_of(pos)];
    houses.into_iter().all(|house| {
        house
            .positions()
            .into_iter()
            .all(|other| other == pos || board[other] != Some(digit))
    })
}

/// Returns whether `board` is a fully filled, rule-satisfying solution.
///
/// Each of the 27 houses must hold exactly one of each digit 1-9: no empty
/// cells, no duplicates. The check re-derives validity from the board alone
/// and never consults any history of incremental [`placement_fits`]
/// approvals. Pure and idempotent.
///
/// # Examples
///
/// ```
/// use shufoku_core::Board;
/// use shufoku_solver::is_complete_and_valid;
///
/// let solved: Board =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()?;
/// assert!(is_complete_and_valid(&solved));
/// assert!(!is_complete_and_valid(&Board::new()));
/// # Ok::<(), shufoku_core::ParseBoardError>(())
/// ```
#[must_use]
pub fn is_complete_and_valid(board: &Board) -> bool {
    House::ALL.into_iter().all(|house| {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            let Some(digit) = board[pos] else {
                return false;
            };
            if !seen.insert(digit) {
                return false;
            }
        }
        seen.is_full()
    })
}
