//! Puzzle generation pipeline.

use derive_more::{Display, Error};
use log::debug;
use rand::{
    Rng,
    seq::{IndexedRandom as _, index},
};
use shufoku_core::{Board, Position};
use shufoku_solver::{is_complete_and_valid, solve};

use crate::{Difficulty, PuzzleSeed, SeedCorpus, shuffle};

/// A generated puzzle together with its reference solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable board, with blanked cells left empty.
    pub problem: Board,
    /// The solver's answer to `problem`.
    pub solution: Board,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
}

/// Errors produced by puzzle generation.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The corpus band for the requested difficulty holds no boards.
    #[display("no seed boards available for {difficulty} puzzles")]
    SeedUnavailable {
        /// The difficulty whose band was empty.
        difficulty: Difficulty,
    },
}

/// Generates puzzles by shuffling seed boards from a corpus.
///
/// The pipeline draws a solved board from the corpus band for the
/// requested difficulty, scrambles it with a long sequence of
/// validity-preserving shuffle operations, blanks a difficulty-dependent
/// set of cells, and solves the blanked board to pin down the reference
/// solution. Every step after the seed draw is driven by a deterministic
/// random number generator, so puzzles are reproducible from their seed.
///
/// # Examples
///
/// ```
/// use shufoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed, SeedCorpus};
///
/// let corpus = SeedCorpus::bundled();
/// let generator = PuzzleGenerator::new(&corpus);
/// let puzzle =
///     generator.generate_with_seed(Difficulty::Medium, PuzzleSeed::from_phrase("docs"))?;
/// assert_eq!(puzzle.problem.count_empty(), 46);
/// # Ok::<(), shufoku_generator::GenerateError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PuzzleGenerator<'a> {
    corpus: &'a SeedCorpus,
    shuffle_ops: usize,
}

impl<'a> PuzzleGenerator<'a> {
    /// Number of shuffle operations applied to a seed board by default.
    pub const DEFAULT_SHUFFLE_OPS: usize = 10_000;

    /// Creates a generator drawing seed boards from `corpus`.
    #[must_use]
    pub fn new(corpus: &'a SeedCorpus) -> Self {
        Self {
            corpus,
            shuffle_ops: Self::DEFAULT_SHUFFLE_OPS,
        }
    }

    /// Sets the number of shuffle operations applied to a seed board.
    ///
    /// With zero operations the problem is cut directly from the seed
    /// board, which is useful in tests that need to see through the
    /// shuffle.
    #[must_use]
    pub fn with_shuffle_ops(mut self, count: usize) -> Self {
        self.shuffle_ops = count;
        self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus band for `difficulty` is empty.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus band for `difficulty` is empty.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        let mut rng = seed.rng();
        let (problem, solution) = self.build(difficulty, &mut rng)?;
        Ok(GeneratedPuzzle {
            problem,
            solution,
            seed,
            difficulty,
        })
    }

    fn build<R>(&self, difficulty: Difficulty, rng: &mut R) -> Result<(Board, Board), GenerateError>
    where
        R: Rng + ?Sized,
    {
        let band = self.corpus.band(difficulty);
        let Some(entry) = band.choose(rng) else {
            return Err(GenerateError::SeedUnavailable { difficulty });
        };
        debug!(
            "generating a {difficulty} puzzle from the seed board on corpus line {}",
            entry.line
        );

        let mut shuffled = entry.board.clone();
        shuffle::shuffle(&mut shuffled, self.shuffle_ops, rng);
        debug_assert!(is_complete_and_valid(&shuffled));

        let mut problem = shuffled.clone();
        for cell in index::sample(rng, 81, difficulty.blank_cells()) {
            problem.set(Position::ALL[cell], None);
        }
        debug!("blanked {} cells", difficulty.blank_cells());

        // The problem is cut from a valid solution, so the search cannot
        // fail. The reference solution is the solver's answer, which may
        // differ from the shuffled board when the problem admits more
        // than one completion.
        let mut solution = problem.clone();
        let solved = solve(&mut solution);
        assert!(solved, "a board cut from a valid solution is solvable");
        assert!(
            is_complete_and_valid(&solution),
            "the search must yield a valid solution"
        );

        Ok((problem, solution))
    }
}
