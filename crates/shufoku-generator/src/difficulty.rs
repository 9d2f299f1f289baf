//! Puzzle difficulty bands.

use derive_more::Display;

/// The difficulty band a puzzle is drawn from.
///
/// Difficulty selects both the corpus band the seed board comes from and
/// how many cells the generator blanks out of the shuffled solution.
///
/// # Examples
///
/// ```
/// use shufoku_generator::Difficulty;
///
/// assert_eq!(Difficulty::Medium.to_string(), "medium");
/// assert_eq!(Difficulty::Medium.blank_cells(), 46);
/// ```
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// A gentle puzzle with most of the board given.
    #[display("easy")]
    Easy,
    /// A mid-range puzzle.
    #[display("medium")]
    Medium,
    /// A sparse puzzle that leaves little more than a third of the board.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns how many cells the generator blanks for this difficulty.
    ///
    /// The counts are fixed per band: easy blanks 36 cells (45 givens),
    /// medium 46 cells (35 givens), and hard 52 cells (29 givens).
    #[must_use]
    pub const fn blank_cells(self) -> usize {
        match self {
            Self::Easy => 36,
            Self::Medium => 46,
            Self::Hard => 52,
        }
    }
}
