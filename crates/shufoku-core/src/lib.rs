//! Core data structures for Sudoku generation and solving.
//!
//! This crate provides the fundamental types shared by the solver,
//! generator, and game crates:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`Position`]: board coordinates (x = column, y = row)
//! - [`House`]: the 27 uniqueness regions (rows, columns, boxes)
//! - [`DigitSet`]: a 9-bit set of digits
//! - [`Board`]: the 9×9 grid of `Option<Digit>` cells, with text parsing
//!   and formatting
//!
//! # Examples
//!
//! ```
//! use shufoku_core::{Board, Digit, House, Position};
//!
//! let board: Board =
//!     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
//!         .parse()?;
//!
//! // Every house of a solved board holds nine distinct digits.
//! for house in House::ALL {
//!     let digits: shufoku_core::DigitSet =
//!         house.positions().into_iter().filter_map(|pos| board[pos]).collect();
//!     assert!(digits.is_full());
//! }
//!
//! assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
//! # Ok::<(), shufoku_core::ParseBoardError>(())
//! ```

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::{DigitSet, DigitSetIter},
    house::House,
    position::Position,
};

mod board;
mod digit;
mod digit_set;
mod house;
mod position;
