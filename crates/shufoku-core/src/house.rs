//! Houses: the rows, columns, and 3×3 boxes of the board.

use std::fmt::{self, Display};

use crate::Position;

/// A Sudoku house (row, column, or 3×3 box).
///
/// Every Sudoku constraint is a uniqueness constraint over one house, so
/// both the placement checker and the full-board validator are written as
/// scans over house positions.
///
/// # Examples
///
/// ```
/// use shufoku_core::House;
///
/// // 9 rows + 9 columns + 9 boxes
/// assert_eq!(House::ALL.len(), 27);
///
/// for house in House::ALL {
///     assert_eq!(house.positions().len(), 9);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the row containing `pos`.
    #[must_use]
    pub const fn row_of(pos: Position) -> Self {
        Self::Row { y: pos.y() }
    }

    /// Returns the column containing `pos`.
    #[must_use]
    pub const fn column_of(pos: Position) -> Self {
        Self::Column { x: pos.x() }
    }

    /// Returns the 3×3 box containing `pos`.
    #[must_use]
    pub const fn box_of(pos: Position) -> Self {
        Self::Box {
            index: pos.box_index(),
        }
    }

    /// Returns all nine positions contained in this house, in scan order
    /// (left to right for rows, top to bottom for columns, row-major within
    /// a box).
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *slot = match self {
                Self::Row { y } => Position::new(i, y),
                Self::Column { x } => Position::new(x, i),
                Self::Box { index } => {
                    Position::new((index % 3) * 3 + i % 3, (index / 3) * 3 + i / 3)
                }
            };
        }
        positions
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}
