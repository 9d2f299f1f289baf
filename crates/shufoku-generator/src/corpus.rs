//! Seed board corpus loading.

use std::{fs, io, ops::RangeInclusive, path::Path};

use derive_more::{Display, Error, From};
use shufoku_core::{Board, ParseBoardError};
use shufoku_solver::is_complete_and_valid;

use crate::Difficulty;

const BUNDLED: &str = include_str!("../seeds/boards.txt");

/// Line ranges assigning corpus lines to difficulty bands.
///
/// Line numbers are zero-based and refer to the corpus text before any
/// filtering; blank separator lines count toward the numbering. Lines
/// outside every band are ignored.
///
/// The default layout matches the bundled corpus: easy on lines 0-19,
/// medium on lines 21-40, hard on lines 42-51, with blank separators on
/// lines 20 and 41.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandLayout {
    /// Lines holding easy seed boards.
    pub easy: RangeInclusive<usize>,
    /// Lines holding medium seed boards.
    pub medium: RangeInclusive<usize>,
    /// Lines holding hard seed boards.
    pub hard: RangeInclusive<usize>,
}

impl Default for BandLayout {
    fn default() -> Self {
        Self {
            easy: 0..=19,
            medium: 21..=40,
            hard: 42..=51,
        }
    }
}

impl BandLayout {
    fn band_of(&self, line: usize) -> Option<Difficulty> {
        if self.easy.contains(&line) {
            Some(Difficulty::Easy)
        } else if self.medium.contains(&line) {
            Some(Difficulty::Medium)
        } else if self.hard.contains(&line) {
            Some(Difficulty::Hard)
        } else {
            None
        }
    }
}

/// A seed board and the corpus line it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedBoard {
    /// Zero-based line number in the corpus text.
    pub line: usize,
    /// The solved board on that line.
    pub board: Board,
}

/// A curated set of solved boards, banded by difficulty.
///
/// A corpus is plain text with one 81-character solved board per line;
/// blank lines separate the bands. Every board is checked on load, so a
/// constructed corpus only ever hands out valid solutions.
///
/// # Examples
///
/// ```
/// use shufoku_generator::{Difficulty, SeedCorpus};
///
/// let corpus = SeedCorpus::bundled();
/// assert_eq!(corpus.band(Difficulty::Easy).len(), 20);
/// assert_eq!(corpus.band(Difficulty::Medium).len(), 20);
/// assert_eq!(corpus.band(Difficulty::Hard).len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct SeedCorpus {
    easy: Vec<SeedBoard>,
    medium: Vec<SeedBoard>,
    hard: Vec<SeedBoard>,
}

impl SeedCorpus {
    /// Returns the corpus bundled with the crate: fifty hand-checked
    /// solved boards split into easy, medium, and hard bands.
    #[expect(clippy::missing_panics_doc)]
    #[must_use]
    pub fn bundled() -> Self {
        Self::parse(BUNDLED).expect("bundled seed corpus is valid")
    }

    /// Parses a corpus using the default [`BandLayout`].
    ///
    /// # Errors
    ///
    /// Returns an error if any non-blank line is not a valid solved board.
    pub fn parse(text: &str) -> Result<Self, ParseCorpusError> {
        Self::parse_with_layout(text, &BandLayout::default())
    }

    /// Parses a corpus, assigning lines to bands according to `layout`.
    ///
    /// Blank lines are treated as band separators and skipped. Every other
    /// line must hold a full, rule-satisfying board, including lines that
    /// fall outside the layout's bands.
    ///
    /// # Errors
    ///
    /// Returns an error if any non-blank line is not a valid solved board.
    pub fn parse_with_layout(text: &str, layout: &BandLayout) -> Result<Self, ParseCorpusError> {
        let mut easy = Vec::new();
        let mut medium = Vec::new();
        let mut hard = Vec::new();
        for (line, raw) in text.lines().enumerate() {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let board: Board = raw
                .parse()
                .map_err(|source| ParseCorpusError::Board { line, source })?;
            if !is_complete_and_valid(&board) {
                return Err(ParseCorpusError::NotSolved { line });
            }
            let entry = SeedBoard { line, board };
            match layout.band_of(line) {
                Some(Difficulty::Easy) => easy.push(entry),
                Some(Difficulty::Medium) => medium.push(entry),
                Some(Difficulty::Hard) => hard.push(entry),
                None => {}
            }
        }
        Ok(Self { easy, medium, hard })
    }

    /// Reads and parses a corpus file using the default [`BandLayout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are not
    /// a valid corpus.
    pub fn from_file<P>(path: P) -> Result<Self, LoadCorpusError>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    /// Returns the seed boards in the band for `difficulty`.
    #[must_use]
    pub fn band(&self, difficulty: Difficulty) -> &[SeedBoard] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Errors that occur when parsing corpus text.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseCorpusError {
    /// A line could not be parsed as a board at all.
    #[display("line {line}: {source}")]
    Board {
        /// Zero-based line number of the offending line.
        line: usize,
        /// The underlying board parse failure.
        source: ParseBoardError,
    },
    /// A line parsed as a board but is not a valid solution.
    #[display("line {line}: board is not a valid solved board")]
    NotSolved {
        /// Zero-based line number of the offending line.
        line: usize,
    },
}

/// Errors that occur when loading a corpus from a file.
#[derive(Debug, Display, Error, From)]
pub enum LoadCorpusError {
    /// The file could not be read.
    #[display("failed to read corpus file: {_0}")]
    Io(io::Error),
    /// The file contents are not a valid corpus.
    #[display("{_0}")]
    Parse(ParseCorpusError),
}
