//! A set of digits 1-9, stored as a 9-bit mask.

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of [`Digit`]s backed by a `u16` where bit `d - 1` represents
/// digit `d`.
///
/// The full-board validator uses this to check that a house holds exactly
/// one of each digit; generation code uses it for occupancy counting.
///
/// # Examples
///
/// ```
/// use shufoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D1);
/// set.insert(Digit::D5);
/// set.insert(Digit::D9);
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.contains(Digit::D2));
///
/// let digits: Vec<_> = set.into_iter().collect();
/// assert_eq!(digits, vec![Digit::D1, Digit::D5, Digit::D9]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const FULL_BITS: u16 = 0b1_1111_1111;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: FULL_BITS };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a digit. Returns `true` if the digit was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = 1 << digit.index();
        let was_absent = self.bits & bit == 0;
        self.bits |= bit;
        was_absent
    }

    /// Removes a digit. Returns `true` if the digit was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let bit = 1 << digit.index();
        let was_present = self.bits & bit != 0;
        self.bits &= !bit;
        was_present
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & (1 << digit.index()) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns whether the set contains all nine digits.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.bits == FULL_BITS
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        DigitSetIter { bits: self.bits }
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter {
    bits: u16,
}

impl Iterator for DigitSetIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Digit::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}
impl FusedIterator for DigitSetIter {}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}
