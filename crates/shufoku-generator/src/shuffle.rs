//! Validity-preserving board shuffling.
//!
//! A solved board stays solved under a small family of rearrangements:
//! swapping rows or columns within a band, swapping whole bands, and
//! relabeling a pair of digits. Composing long random sequences of these
//! operations turns one seed solution into a large space of solutions
//! while never leaving the valid set.

use rand::Rng;
use shufoku_core::{Board, Digit, Position};

/// A single validity-preserving rearrangement of a solved board.
///
/// Applied to a valid solution, every operation yields another valid
/// solution. The band constraints on the swap variants are what make
/// this hold; [`ShuffleOp::random`] always respects them.
///
/// # Examples
///
/// ```
/// use shufoku_core::Board;
/// use shufoku_generator::shuffle::ShuffleOp;
/// use shufoku_solver::is_complete_and_valid;
///
/// let mut board: Board =
///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
///         .parse()?;
/// ShuffleOp::SwapRows { a: 0, b: 2 }.apply(&mut board);
/// assert!(is_complete_and_valid(&board));
/// # Ok::<(), shufoku_core::ParseBoardError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShuffleOp {
    /// Swap rows `a` and `b`, which must lie in the same row band.
    SwapRows {
        /// First row (0-8).
        a: u8,
        /// Second row (0-8), in the same band as `a`.
        b: u8,
    },
    /// Swap columns `a` and `b`, which must lie in the same column band.
    SwapColumns {
        /// First column (0-8).
        a: u8,
        /// Second column (0-8), in the same band as `a`.
        b: u8,
    },
    /// Swap row bands `a` and `b`, three rows at a time.
    SwapRowBands {
        /// First row band (0-2).
        a: u8,
        /// Second row band (0-2).
        b: u8,
    },
    /// Swap column bands `a` and `b`, three columns at a time.
    SwapColumnBands {
        /// First column band (0-2).
        a: u8,
        /// Second column band (0-2).
        b: u8,
    },
    /// Exchange every occurrence of two distinct digits.
    RelabelDigits {
        /// First digit.
        a: Digit,
        /// Second digit, distinct from `a`.
        b: Digit,
    },
}

impl ShuffleOp {
    /// Draws a random operation, choosing uniformly among the five kinds.
    ///
    /// Swap partners are drawn uniformly and may coincide, in which case
    /// the operation is a no-op; relabeled digit pairs are always
    /// distinct.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        match rng.random_range(0..5) {
            0 => {
                let band = rng.random_range(0..3u8);
                Self::SwapRows {
                    a: band * 3 + rng.random_range(0..3),
                    b: band * 3 + rng.random_range(0..3),
                }
            }
            1 => {
                let band = rng.random_range(0..3u8);
                Self::SwapColumns {
                    a: band * 3 + rng.random_range(0..3),
                    b: band * 3 + rng.random_range(0..3),
                }
            }
            2 => Self::SwapRowBands {
                a: rng.random_range(0..3),
                b: rng.random_range(0..3),
            },
            3 => Self::SwapColumnBands {
                a: rng.random_range(0..3),
                b: rng.random_range(0..3),
            },
            _ => {
                let a = rng.random_range(0..9);
                let b = (a + rng.random_range(1..9)) % 9;
                Self::RelabelDigits {
                    a: Digit::ALL[a],
                    b: Digit::ALL[b],
                }
            }
        }
    }

    /// Applies this operation to `board` in place.
    ///
    /// # Panics
    ///
    /// Panics if the operation violates its constraints: swapped rows or
    /// columns in different bands, band indices outside 0-2, or a relabel
    /// of a digit with itself.
    pub fn apply(self, board: &mut Board) {
        match self {
            Self::SwapRows { a, b } => {
                assert!(a < 9 && b < 9 && a / 3 == b / 3, "rows must share a band");
                for x in 0..9 {
                    board.swap(Position::new(x, a), Position::new(x, b));
                }
            }
            Self::SwapColumns { a, b } => {
                assert!(
                    a < 9 && b < 9 && a / 3 == b / 3,
                    "columns must share a band"
                );
                for y in 0..9 {
                    board.swap(Position::new(a, y), Position::new(b, y));
                }
            }
            Self::SwapRowBands { a, b } => {
                assert!(a < 3 && b < 3, "row band index out of range");
                for offset in 0..3 {
                    for x in 0..9 {
                        board.swap(
                            Position::new(x, a * 3 + offset),
                            Position::new(x, b * 3 + offset),
                        );
                    }
                }
            }
            Self::SwapColumnBands { a, b } => {
                assert!(a < 3 && b < 3, "column band index out of range");
                for offset in 0..3 {
                    for y in 0..9 {
                        board.swap(
                            Position::new(a * 3 + offset, y),
                            Position::new(b * 3 + offset, y),
                        );
                    }
                }
            }
            Self::RelabelDigits { a, b } => {
                assert_ne!(a, b, "relabeled digits must be distinct");
                for pos in Position::ALL {
                    match board.get(pos) {
                        Some(digit) if digit == a => board.set(pos, Some(b)),
                        Some(digit) if digit == b => board.set(pos, Some(a)),
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Applies `count` randomly drawn operations to `board` in place.
///
/// With `count` of zero the board is left untouched. The sequence of
/// operations is fully determined by the generator state, so a seeded
/// generator reproduces the same shuffle.
pub fn shuffle<R>(board: &mut Board, count: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    for _ in 0..count {
        ShuffleOp::random(rng).apply(board);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use shufoku_solver::{is_complete_and_valid, testing::board};

    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn rng(seed: u64) -> Pcg64 {
        Pcg64::seed_from_u64(seed)
    }

    #[test]
    fn test_zero_operations_leave_board_untouched() {
        let mut shuffled = board(SOLVED);
        shuffle(&mut shuffled, 0, &mut rng(0));
        assert_eq!(shuffled, board(SOLVED));
    }

    #[test]
    fn test_swap_rows() {
        let mut swapped = board(SOLVED);
        ShuffleOp::SwapRows { a: 0, b: 2 }.apply(&mut swapped);
        for x in 0..9 {
            assert_eq!(
                swapped.get(Position::new(x, 0)),
                board(SOLVED).get(Position::new(x, 2))
            );
            assert_eq!(
                swapped.get(Position::new(x, 2)),
                board(SOLVED).get(Position::new(x, 0))
            );
            assert_eq!(
                swapped.get(Position::new(x, 1)),
                board(SOLVED).get(Position::new(x, 1))
            );
        }
        assert!(is_complete_and_valid(&swapped));
    }

    #[test]
    fn test_swap_columns() {
        let mut swapped = board(SOLVED);
        ShuffleOp::SwapColumns { a: 3, b: 5 }.apply(&mut swapped);
        for y in 0..9 {
            assert_eq!(
                swapped.get(Position::new(3, y)),
                board(SOLVED).get(Position::new(5, y))
            );
            assert_eq!(
                swapped.get(Position::new(5, y)),
                board(SOLVED).get(Position::new(3, y))
            );
        }
        assert!(is_complete_and_valid(&swapped));
    }

    #[test]
    fn test_swap_row_bands() {
        let mut swapped = board(SOLVED);
        ShuffleOp::SwapRowBands { a: 0, b: 2 }.apply(&mut swapped);
        for x in 0..9 {
            for offset in 0..3 {
                assert_eq!(
                    swapped.get(Position::new(x, offset)),
                    board(SOLVED).get(Position::new(x, offset + 6))
                );
                assert_eq!(
                    swapped.get(Position::new(x, offset + 3)),
                    board(SOLVED).get(Position::new(x, offset + 3))
                );
            }
        }
        assert!(is_complete_and_valid(&swapped));
    }

    #[test]
    fn test_swap_column_bands() {
        let mut swapped = board(SOLVED);
        ShuffleOp::SwapColumnBands { a: 1, b: 2 }.apply(&mut swapped);
        for y in 0..9 {
            for offset in 0..3 {
                assert_eq!(
                    swapped.get(Position::new(offset + 3, y)),
                    board(SOLVED).get(Position::new(offset + 6, y))
                );
                assert_eq!(
                    swapped.get(Position::new(offset, y)),
                    board(SOLVED).get(Position::new(offset, y))
                );
            }
        }
        assert!(is_complete_and_valid(&swapped));
    }

    #[test]
    fn test_relabel_digits() {
        let mut relabeled = board(SOLVED);
        ShuffleOp::RelabelDigits {
            a: Digit::D5,
            b: Digit::D9,
        }
        .apply(&mut relabeled);
        for pos in Position::ALL {
            let expected = match board(SOLVED).get(pos) {
                Some(Digit::D5) => Some(Digit::D9),
                Some(Digit::D9) => Some(Digit::D5),
                other => other,
            };
            assert_eq!(relabeled.get(pos), expected);
        }
        assert!(is_complete_and_valid(&relabeled));
    }

    #[test]
    fn test_identity_swap_is_a_no_op() {
        let mut swapped = board(SOLVED);
        ShuffleOp::SwapRows { a: 4, b: 4 }.apply(&mut swapped);
        ShuffleOp::SwapRowBands { a: 1, b: 1 }.apply(&mut swapped);
        assert_eq!(swapped, board(SOLVED));
    }

    #[test]
    #[should_panic(expected = "rows must share a band")]
    fn test_cross_band_row_swap_panics() {
        ShuffleOp::SwapRows { a: 0, b: 3 }.apply(&mut board(SOLVED));
    }

    #[test]
    #[should_panic(expected = "columns must share a band")]
    fn test_cross_band_column_swap_panics() {
        ShuffleOp::SwapColumns { a: 2, b: 6 }.apply(&mut board(SOLVED));
    }

    #[test]
    #[should_panic(expected = "relabeled digits must be distinct")]
    fn test_relabel_same_digit_panics() {
        ShuffleOp::RelabelDigits {
            a: Digit::D1,
            b: Digit::D1,
        }
        .apply(&mut board(SOLVED));
    }

    #[test]
    fn test_random_operations_respect_constraints() {
        let mut rng = rng(7);
        for _ in 0..1_000 {
            match ShuffleOp::random(&mut rng) {
                ShuffleOp::SwapRows { a, b } | ShuffleOp::SwapColumns { a, b } => {
                    assert!(a < 9 && b < 9);
                    assert_eq!(a / 3, b / 3);
                }
                ShuffleOp::SwapRowBands { a, b } | ShuffleOp::SwapColumnBands { a, b } => {
                    assert!(a < 3 && b < 3);
                }
                ShuffleOp::RelabelDigits { a, b } => assert_ne!(a, b),
            }
        }
    }

    #[test]
    fn test_random_produces_every_kind() {
        let mut rng = rng(11);
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            let kind = match ShuffleOp::random(&mut rng) {
                ShuffleOp::SwapRows { .. } => 0,
                ShuffleOp::SwapColumns { .. } => 1,
                ShuffleOp::SwapRowBands { .. } => 2,
                ShuffleOp::SwapColumnBands { .. } => 3,
                ShuffleOp::RelabelDigits { .. } => 4,
            };
            seen[kind] = true;
        }
        assert_eq!(seen, [true; 5]);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let mut a = board(SOLVED);
        let mut b = board(SOLVED);
        shuffle(&mut a, 500, &mut rng(42));
        shuffle(&mut b, 500, &mut rng(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_long_shuffle_stays_valid() {
        let mut shuffled = board(SOLVED);
        shuffle(&mut shuffled, 10_000, &mut rng(3));
        assert!(is_complete_and_valid(&shuffled));
        assert_ne!(shuffled, board(SOLVED));
    }

    proptest! {
        #[test]
        fn prop_shuffled_boards_stay_valid(seed in any::<u64>(), count in 0usize..500) {
            let mut shuffled = board(SOLVED);
            shuffle(&mut shuffled, count, &mut rng(seed));
            prop_assert!(is_complete_and_valid(&shuffled));
        }
    }
}
