//! Backtracking search over partially filled boards.
//!
//! [`solve`] runs the search to completion and reports satisfiability.
//! [`solve_trace`] exposes the same search one decision at a time, for
//! callers that want to watch placements and retractions as they happen.

use derive_more::Display;
use shufoku_core::{Board, Digit, Position};
use tinyvec::ArrayVec;

use crate::rules::placement_fits;

/// Returns the first empty cell in row-major order, if any.
fn find_empty(board: &Board) -> Option<Position> {
    Position::ALL.into_iter().find(|&pos| board[pos].is_none())
}

/// Fills every empty cell of `board` in place, returning whether a
/// solution was found.
///
/// The search targets the first empty cell in row-major order and tries
/// candidates in ascending digit order, so the result is deterministic:
/// the same input always yields the same solution, the first one in that
/// ordering. Filled cells are treated as fixed givens.
///
/// On success the board holds the solution. On failure every cell the
/// search touched has been cleared again, leaving the board exactly as it
/// was passed in.
///
/// A board with no empty cells is reported solvable as-is; the givens
/// themselves are not audited. Use
/// [`is_complete_and_valid`](crate::is_complete_and_valid) to vet a full
/// board.
///
/// # Examples
///
/// ```
/// use shufoku_core::Board;
/// use shufoku_solver::solve;
///
/// let mut board: Board =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()?;
/// assert!(solve(&mut board));
/// assert_eq!(
///     board.to_string(),
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
/// );
/// # Ok::<(), shufoku_core::ParseBoardError>(())
/// ```
#[must_use]
pub fn solve(board: &mut Board) -> bool {
    let Some(pos) = find_empty(board) else {
        return true;
    };
    for digit in Digit::ALL {
        if placement_fits(board, pos, digit) {
            board.set(pos, Some(digit));
            if solve(board) {
                return true;
            }
            board.set(pos, None);
        }
    }
    false
}

/// Starts a step-by-step search over `board`.
///
/// The returned [`SolveTrace`] yields the same decisions [`solve`] makes,
/// in the order it makes them, and applies each one to the borrowed board
/// as it is yielded.
#[must_use]
pub fn solve_trace(board: &mut Board) -> SolveTrace<'_> {
    SolveTrace {
        board,
        stack: ArrayVec::new(),
        descending: true,
        outcome: None,
    }
}

/// A single decision made by the backtracking search.
///
/// An accepted step records a digit being placed; a rejected step records
/// that digit being retracted again after the search beneath it failed.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[display("{} {digit} at {position}", if *accepted { "place" } else { "retract" })]
pub struct SolveStep {
    /// The cell the decision applies to.
    pub position: Position,
    /// The digit placed or retracted.
    pub digit: Digit,
    /// `true` for a placement, `false` for a retraction.
    pub accepted: bool,
}

/// One cell of the search stack: a targeted empty cell and the value of
/// the candidate most recently placed there (0 before the first attempt).
#[derive(Clone, Copy, Debug)]
struct Frame {
    pos: Position,
    tried: u8,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            pos: Position::new(0, 0),
            tried: 0,
        }
    }
}

/// Iterator over the decisions of a backtracking search.
///
/// Each call to [`next`](Iterator::next) advances the search by exactly one
/// decision and mutates the borrowed board accordingly, so dropping the
/// trace mid-way leaves the board in the state the search had reached at
/// that point. Draining it runs the search to completion: the board then
/// holds a solution, or has been restored to its initial state if no
/// solution exists.
///
/// The trace is not restartable. Once [`outcome`](SolveTrace::outcome)
/// reports a result, further calls to `next` return `None`.
///
/// # Examples
///
/// ```
/// use shufoku_core::{Board, Digit, Position};
/// use shufoku_solver::solve_trace;
///
/// let mut board: Board =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()?;
/// board.set(Position::new(0, 0), None);
///
/// let mut trace = solve_trace(&mut board);
/// let step = trace.next().unwrap();
/// assert_eq!(step.position, Position::new(0, 0));
/// assert_eq!(step.digit, Digit::D5);
/// assert!(step.accepted);
/// assert!(trace.next().is_none());
/// assert_eq!(trace.outcome(), Some(true));
/// # Ok::<(), shufoku_core::ParseBoardError>(())
/// ```
#[derive(Debug)]
pub struct SolveTrace<'a> {
    board: &'a mut Board,
    stack: ArrayVec<[Frame; 81]>,
    descending: bool,
    outcome: Option<bool>,
}

impl SolveTrace<'_> {
    /// Returns the search result once the trace has been drained.
    ///
    /// `None` while the search is still in progress, then `Some(true)` if a
    /// solution was found and `Some(false)` if the board is unsatisfiable.
    #[must_use]
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }
}

impl Iterator for SolveTrace<'_> {
    type Item = SolveStep;

    fn next(&mut self) -> Option<SolveStep> {
        if self.outcome.is_some() {
            return None;
        }
        if self.descending {
            let Some(pos) = find_empty(self.board) else {
                self.outcome = Some(true);
                return None;
            };
            self.stack.push(Frame { pos, tried: 0 });
            self.descending = false;
        }
        if let Some(frame) = self.stack.last_mut() {
            let pos = frame.pos;
            for value in (frame.tried + 1)..=9 {
                let digit = Digit::from_value(value);
                if placement_fits(self.board, pos, digit) {
                    frame.tried = value;
                    self.board.set(pos, Some(digit));
                    self.descending = true;
                    return Some(SolveStep {
                        position: pos,
                        digit,
                        accepted: true,
                    });
                }
            }
            // Candidates exhausted. Unwind to the frame below, whose
            // placement is what the failed subtree hangs off of.
            self.stack.pop();
        }
        let Some(parent) = self.stack.last() else {
            self.outcome = Some(false);
            return None;
        };
        let pos = parent.pos;
        let digit = Digit::from_value(parent.tried);
        self.board.set(pos, None);
        Some(SolveStep {
            position: pos,
            digit,
            accepted: false,
        })
    }
}

impl std::iter::FusedIterator for SolveTrace<'_> {}
