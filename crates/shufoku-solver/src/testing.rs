//! Test utilities for exercising the backtracking search.
//!
//! This module provides [`SolveCheck`], a harness that runs a board through
//! both [`solve`] and a drained [`solve_trace`], cross-checks that the two
//! agree, and offers assertions on the combined result.
//!
//! # Example
//!
//! ```
//! use shufoku_solver::testing::SolveCheck;
//!
//! SolveCheck::from_str(
//!     "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//!     ",
//! )
//! .assert_solved()
//! .assert_solution(
//!     "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
//! );
//! ```

use shufoku_core::Board;

use crate::{SolveStep, is_complete_and_valid, solve, solve_trace};

/// Parses a board string, panicking on malformed input.
///
/// The format matches [`Board`]'s [`FromStr`](std::str::FromStr): digits
/// 1-9 are filled cells, `.`, `_`, or `0` are empty cells, whitespace is
/// ignored.
///
/// # Panics
///
/// Panics if the string cannot be parsed as a board.
#[track_caller]
#[must_use]
pub fn board(s: &str) -> Board {
    match s.parse() {
        Ok(board) => board,
        Err(err) => panic!("invalid board string: {err}"),
    }
}

/// A harness for verifying search behavior on a single board.
///
/// Construction runs both search entry points: [`solve`] on one copy of
/// the board and a fully drained [`solve_trace`] on another. The two must
/// agree on the outcome and on the final board state; any divergence
/// panics immediately. Assertions then inspect the shared result.
///
/// # Method Chaining
///
/// All assertion methods return `self`, enabling fluent chaining.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolveCheck {
    given: Board,
    result: Board,
    solved: bool,
    steps: Vec<SolveStep>,
}

impl SolveCheck {
    /// Runs the search on `given` and captures the result.
    ///
    /// # Panics
    ///
    /// Panics if [`solve`] and a drained [`solve_trace`] disagree on the
    /// outcome or on the final board state.
    #[track_caller]
    #[must_use]
    pub fn new(given: Board) -> Self {
        let mut result = given.clone();
        let solved = solve(&mut result);

        let mut traced = given.clone();
        let (steps, outcome) = {
            let mut trace = solve_trace(&mut traced);
            let steps = trace.by_ref().collect::<Vec<_>>();
            (steps, trace.outcome())
        };

        assert_eq!(
            outcome,
            Some(solved),
            "Expected the drained trace to report the same outcome as solve"
        );
        assert_eq!(
            traced, result,
            "Expected the drained trace to leave the board in the same state as solve"
        );

        Self {
            given,
            result,
            solved,
            steps,
        }
    }

    /// Runs the search on a board parsed from `s`.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a board, or if the two
    /// search entry points disagree.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self::new(board(s))
    }

    /// Returns the decisions the search made, in order.
    #[must_use]
    pub fn steps(&self) -> &[SolveStep] {
        &self.steps
    }

    /// Asserts that the board was solved.
    ///
    /// This verifies that the search succeeded, that the resulting board
    /// passes full validation, and that every given survived into the
    /// solution.
    ///
    /// # Panics
    ///
    /// Panics if the board was not solved as expected.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert!(
            self.solved,
            "Expected the board to be solvable:\n{}",
            self.given
        );
        assert!(
            is_complete_and_valid(&self.result),
            "Expected the solved board to pass validation:\n{}",
            self.result
        );
        assert!(
            self.given.is_sub_assignment_of(&self.result),
            "Expected every given to survive into the solution"
        );
        self
    }

    /// Asserts that no solution exists and that the board was restored.
    ///
    /// # Panics
    ///
    /// Panics if the search found a solution, or if the failed search left
    /// any residue behind.
    #[track_caller]
    pub fn assert_unsolvable(self) -> Self {
        assert!(
            !self.solved,
            "Expected the board to be unsolvable:\n{}",
            self.given
        );
        assert_eq!(
            self.result, self.given,
            "Expected a failed search to restore the board to its initial state"
        );
        self
    }

    /// Asserts that the search produced exactly the board in `expected`.
    ///
    /// # Panics
    ///
    /// Panics if `expected` cannot be parsed, or if the result differs.
    #[track_caller]
    pub fn assert_solution(self, expected: &str) -> Self {
        let expected = board(expected);
        assert_eq!(
            self.result, expected,
            "Expected the search to produce the given solution"
        );
        self
    }

    /// Asserts that the search made exactly `count` decisions.
    ///
    /// # Panics
    ///
    /// Panics if the decision count differs.
    #[track_caller]
    pub fn assert_step_count(self, count: usize) -> Self {
        assert_eq!(
            self.steps.len(),
            count,
            "Expected the search to make {count} decisions, but it made {}: {:?}",
            self.steps.len(),
            self.steps
        );
        self
    }

    /// Asserts that the search made exactly the decisions in `expected`,
    /// in order.
    ///
    /// # Panics
    ///
    /// Panics if the decision sequence differs.
    #[track_caller]
    pub fn assert_steps(self, expected: &[SolveStep]) -> Self {
        assert_eq!(
            self.steps, expected,
            "Expected the search to make exactly the given decisions"
        );
        self
    }
}
