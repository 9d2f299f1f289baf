use derive_more::IsVariant;
use rand::{Rng, seq::IndexedRandom as _};
use shufoku_core::{Board, Digit, Position};
use shufoku_generator::GeneratedPuzzle;
use shufoku_solver::is_complete_and_valid;

use crate::{CellState, GameError};

/// Outcome of [`Game::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Placement {
    /// The digit matches the solution; the cell is now filled.
    Accepted,
    /// The digit does not match the solution; the guess and any sketch at
    /// the cell are discarded.
    Rejected,
}

/// A Sudoku game session.
///
/// Tracks the given cells of a generated puzzle, the player's confirmed
/// placements, and sketched pencil marks. Placements are checked against
/// the stored solution as they are made; the win check re-validates the
/// finished board independently.
///
/// # Example
///
/// ```
/// use shufoku_game::Game;
/// use shufoku_generator::{Difficulty, PuzzleGenerator, SeedCorpus};
///
/// let corpus = SeedCorpus::bundled();
/// let generator = PuzzleGenerator::new(&corpus);
/// let puzzle = generator.generate(Difficulty::Medium)?;
/// let game = Game::new(puzzle);
///
/// assert!(!game.is_finished());
/// assert!(!game.is_solved());
/// # Ok::<(), shufoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: Board,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// Every filled cell of the puzzle's problem board becomes a given;
    /// the remaining cells start empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
            difficulty: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self { cells, solution }
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the stored solution board.
    #[must_use]
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the board of decided digits (givens and filled cells).
    ///
    /// Sketched cells are empty in the returned board.
    #[must_use]
    pub fn to_board(&self) -> Board {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, self.cell(pos).as_digit());
        }
        board
    }

    /// Returns whether `digit` is the solution digit at `pos`.
    ///
    /// A pure comparison against the stored solution; the game is not
    /// modified.
    #[must_use]
    pub fn check_placement(&self, pos: Position, digit: Digit) -> bool {
        self.solution[pos] == Some(digit)
    }

    /// Places `digit` at `pos`, checking it against the solution.
    ///
    /// A matching digit fills the cell ([`Placement::Accepted`]). On a
    /// mismatch the cell is left empty and any sketch there is discarded
    /// ([`Placement::Rejected`]): a wrong guess costs the pencil mark it
    /// was made from.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given
    /// and [`GameError::CellAlreadyFilled`] if it already holds a placed
    /// digit.
    ///
    /// # Example
    ///
    /// ```
    /// use shufoku_core::Position;
    /// use shufoku_game::{CellState, Game};
    /// use shufoku_generator::{Difficulty, PuzzleGenerator, SeedCorpus};
    ///
    /// let corpus = SeedCorpus::bundled();
    /// let generator = PuzzleGenerator::new(&corpus);
    /// let puzzle = generator.generate(Difficulty::Easy)?;
    /// let mut game = Game::new(puzzle);
    ///
    /// let pos = Position::ALL
    ///     .into_iter()
    ///     .find(|&pos| game.cell(pos).is_empty())
    ///     .expect("a fresh puzzle has empty cells");
    /// let digit = game.solution()[pos].expect("the solution is complete");
    ///
    /// let placement = game.place(pos, digit)?;
    /// assert!(placement.is_accepted());
    /// assert_eq!(game.cell(pos), CellState::Filled(digit));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn place(&mut self, pos: Position, digit: Digit) -> Result<Placement, GameError> {
        match self.cell(pos) {
            CellState::Given(_) => Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => Err(GameError::CellAlreadyFilled),
            CellState::Sketch(_) | CellState::Empty => {
                if self.check_placement(pos, digit) {
                    self.cells[pos.index()] = CellState::Filled(digit);
                    Ok(Placement::Accepted)
                } else {
                    self.cells[pos.index()] = CellState::Empty;
                    Ok(Placement::Rejected)
                }
            }
        }
    }

    /// Sketches `digit` at `pos` as a pencil mark.
    ///
    /// A cell holds at most one sketch; sketching again replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given
    /// and [`GameError::CellAlreadyFilled`] if it already holds a placed
    /// digit.
    pub fn sketch(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        match self.cell(pos) {
            CellState::Given(_) => Err(GameError::CannotModifyGivenCell),
            CellState::Filled(_) => Err(GameError::CellAlreadyFilled),
            CellState::Sketch(_) | CellState::Empty => {
                self.cells[pos.index()] = CellState::Sketch(digit);
                Ok(())
            }
        }
    }

    /// Removes the sketch at `pos`, if any.
    ///
    /// Decided and empty cells are left untouched, so this is always safe
    /// to call on the current selection.
    pub fn clear_sketch(&mut self, pos: Position) {
        if self.cell(pos).is_sketch() {
            self.cells[pos.index()] = CellState::Empty;
        }
    }

    /// Fills one undecided cell with its solution digit.
    ///
    /// The cell is chosen uniformly among cells that are empty or hold a
    /// sketch; any sketch there is replaced by the placed digit. Returns
    /// the filled position, or `None` when every cell is already decided.
    pub fn hint<R>(&mut self, rng: &mut R) -> Option<Position>
    where
        R: Rng + ?Sized,
    {
        let undecided = Position::ALL
            .into_iter()
            .filter(|&pos| !self.cell(pos).is_decided())
            .collect::<Vec<_>>();
        let pos = *undecided.choose(rng)?;
        let digit = self.solution[pos]?;
        self.cells[pos.index()] = CellState::Filled(digit);
        Some(pos)
    }

    /// Returns whether every cell is decided.
    ///
    /// This is a fill check only; [`is_solved`](Self::is_solved) is the
    /// win check.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.cell(pos).is_decided())
    }

    /// Returns whether the game is finished and the decided board is a
    /// valid Sudoku solution.
    ///
    /// The assembled board is re-checked with [`is_complete_and_valid`]
    /// rather than compared to the stored solution, so any valid
    /// completion wins.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_finished() && is_complete_and_valid(&self.to_board())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use shufoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed, SeedCorpus};

    use super::*;

    const PROBLEM: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn test_game() -> Game {
        let puzzle = GeneratedPuzzle {
            problem: PROBLEM.parse().expect("valid problem board"),
            solution: SOLUTION.parse().expect("valid solution board"),
            seed: PuzzleSeed::from_phrase("game tests"),
            difficulty: Difficulty::Medium,
        };
        Game::new(puzzle)
    }

    #[test]
    fn test_new_game_marks_givens() {
        let corpus = SeedCorpus::bundled();
        let generator = PuzzleGenerator::new(&corpus);
        let puzzle = generator
            .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("game structure"))
            .expect("bundled corpus has easy seed boards");
        let game = Game::new(puzzle.clone());

        for pos in Position::ALL {
            match puzzle.problem[pos] {
                Some(digit) => assert_eq!(game.cell(pos), CellState::Given(digit)),
                None => assert_eq!(game.cell(pos), CellState::Empty),
            }
        }
        assert_eq!(game.solution(), &puzzle.solution);
        assert_eq!(game.to_board(), puzzle.problem);
    }

    #[test]
    fn test_check_placement_compares_against_solution() {
        let game = test_game();
        let pos = Position::new(2, 0);
        assert_eq!(game.cell(pos), CellState::Empty);
        assert!(game.check_placement(pos, Digit::D4));
        assert!(!game.check_placement(pos, Digit::D5));

        // Givens compare like any other cell.
        assert!(game.check_placement(Position::new(0, 0), Digit::D5));
        assert!(!game.check_placement(Position::new(0, 0), Digit::D6));
    }

    #[test]
    fn test_place_accepts_matching_digit() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        assert_eq!(game.place(pos, Digit::D4), Ok(Placement::Accepted));
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D4));
    }

    #[test]
    fn test_place_rejects_mismatch_and_discards_sketch() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        game.sketch(pos, Digit::D9).unwrap();

        let placement = game.place(pos, Digit::D9).unwrap();
        assert!(placement.is_rejected());
        assert_eq!(game.cell(pos), CellState::Empty);
    }

    #[test]
    fn test_place_on_decided_cells_fails() {
        let mut game = test_game();
        assert_eq!(
            game.place(Position::new(0, 0), Digit::D5),
            Err(GameError::CannotModifyGivenCell)
        );

        let pos = Position::new(2, 0);
        game.place(pos, Digit::D4).unwrap();
        assert_eq!(
            game.place(pos, Digit::D4),
            Err(GameError::CellAlreadyFilled)
        );
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D4));
    }

    #[test]
    fn test_place_commits_a_sketched_guess() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        game.sketch(pos, Digit::D4).unwrap();
        assert_eq!(game.place(pos, Digit::D4), Ok(Placement::Accepted));
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D4));
    }

    #[test]
    fn test_sketch_overwrites_and_respects_decided_cells() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        game.sketch(pos, Digit::D1).unwrap();
        assert_eq!(game.cell(pos), CellState::Sketch(Digit::D1));
        game.sketch(pos, Digit::D2).unwrap();
        assert_eq!(game.cell(pos), CellState::Sketch(Digit::D2));

        assert_eq!(
            game.sketch(Position::new(0, 0), Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );

        game.place(pos, Digit::D4).unwrap();
        assert_eq!(
            game.sketch(pos, Digit::D1),
            Err(GameError::CellAlreadyFilled)
        );
    }

    #[test]
    fn test_clear_sketch_is_noop_on_decided_cells() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        game.sketch(pos, Digit::D7).unwrap();
        game.clear_sketch(pos);
        assert_eq!(game.cell(pos), CellState::Empty);

        // Clearing an empty cell changes nothing.
        game.clear_sketch(pos);
        assert_eq!(game.cell(pos), CellState::Empty);

        // Givens and filled cells keep their digits.
        game.clear_sketch(Position::new(0, 0));
        assert_eq!(game.cell(Position::new(0, 0)), CellState::Given(Digit::D5));
        game.place(pos, Digit::D4).unwrap();
        game.clear_sketch(pos);
        assert_eq!(game.cell(pos), CellState::Filled(Digit::D4));
    }

    #[test]
    fn test_sketches_stay_off_the_board() {
        let mut game = test_game();
        let pos = Position::new(2, 0);
        game.sketch(pos, Digit::D4).unwrap();
        assert_eq!(game.to_board()[pos], None);
        assert!(!game.cell(pos).is_decided());
        assert!(!game.is_finished());
    }

    #[test]
    fn test_hint_fills_an_undecided_cell() {
        let mut game = test_game();
        let before = game.clone();
        let mut rng = Pcg64::seed_from_u64(7);

        let pos = game.hint(&mut rng).expect("the game has undecided cells");
        assert!(!before.cell(pos).is_decided());
        let digit = game.solution()[pos].expect("the solution is complete");
        assert_eq!(game.cell(pos), CellState::Filled(digit));
    }

    #[test]
    fn test_hint_takes_the_last_undecided_cell() {
        let mut game = test_game();
        let target = Position::new(2, 0);
        for pos in Position::ALL {
            if pos == target || game.cell(pos).is_decided() {
                continue;
            }
            let digit = game.solution()[pos].expect("the solution is complete");
            assert_eq!(game.place(pos, digit), Ok(Placement::Accepted));
        }
        game.sketch(target, Digit::D9).unwrap();

        let mut rng = Pcg64::seed_from_u64(0);
        assert_eq!(game.hint(&mut rng), Some(target));
        assert_eq!(game.cell(target), CellState::Filled(Digit::D4));
        assert!(game.is_solved());

        // Every cell is decided now, so there is nothing left to hint.
        assert_eq!(game.hint(&mut rng), None);
    }

    #[test]
    fn test_finishing_with_the_solution_wins() {
        let mut game = test_game();
        assert!(!game.is_finished());
        assert!(!game.is_solved());

        for pos in Position::ALL {
            if game.cell(pos).is_decided() {
                continue;
            }
            let digit = game.solution()[pos].expect("the solution is complete");
            assert_eq!(game.place(pos, digit), Ok(Placement::Accepted));
        }

        assert!(game.is_finished());
        assert!(game.is_solved());
        assert_eq!(
            game.to_board(),
            SOLUTION.parse().expect("valid solution board")
        );
    }

    #[test]
    fn test_is_solved_rechecks_the_board() {
        // A full board of givens that breaks the row rule is finished but
        // not won.
        let mut tampered: Board = SOLUTION.parse().expect("valid solution board");
        tampered.set(Position::new(1, 0), Some(Digit::D5));
        let puzzle = GeneratedPuzzle {
            problem: tampered.clone(),
            solution: tampered,
            seed: PuzzleSeed::from_phrase("tampered"),
            difficulty: Difficulty::Easy,
        };
        let game = Game::new(puzzle);

        assert!(game.is_finished());
        assert!(!game.is_solved());
    }
}
