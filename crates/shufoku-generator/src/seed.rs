//! Reproducible generation seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngCore as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated puzzle.
///
/// The seed is the unit of reproducibility: feeding the same seed to the
/// same generator configuration yields the same puzzle. Seeds render as
/// 64 lowercase hex characters and parse back from the same form.
///
/// # Examples
///
/// ```
/// use shufoku_generator::PuzzleSeed;
///
/// let hex = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
/// let seed: PuzzleSeed = hex.parse()?;
/// assert_eq!(seed.to_string(), hex);
/// # Ok::<(), shufoku_generator::ParsePuzzleSeedError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread-local random number generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a full
    /// 256-bit seed and equal phrases always map to the same seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use shufoku_generator::PuzzleSeed;
    ///
    /// assert_eq!(
    ///     PuzzleSeed::from_phrase("rainy sunday"),
    ///     PuzzleSeed::from_phrase("rainy sunday"),
    /// );
    /// assert_ne!(
    ///     PuzzleSeed::from_phrase("rainy sunday"),
    ///     PuzzleSeed::from_phrase("sunny monday"),
    /// );
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates the deterministic random number generator this seed denotes.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that occur when parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParsePuzzleSeedError {
    /// A character outside `0-9a-fA-F` appeared.
    #[display("invalid character {character:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based offset of the character in the input.
        offset: usize,
    },
    /// The input is not exactly 64 characters long.
    #[display("expected 64 hex characters, found {found}")]
    BadLength {
        /// The number of characters in the input.
        found: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParsePuzzleSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParsePuzzleSeedError::BadLength { found: len });
        }
        let mut bytes = [0; 32];
        for (offset, c) in s.chars().enumerate() {
            let value = c
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(ParsePuzzleSeedError::InvalidCharacter {
                    character: c,
                    offset,
                })?;
            let byte = &mut bytes[offset / 2];
            *byte = (*byte << 4) | value;
        }
        Ok(Self(bytes))
    }
}
