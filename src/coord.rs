//! Grid coordinates.

use core::fmt;

/// A `(row, col)` position on a square grid, 0-indexed.
///
/// Components are signed so that shots outside the grid (e.g. `(-1, 0)`) can
/// be represented and rejected by the board rather than by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from unsigned grid indices.
    ///
    /// Indices past `i32::MAX` saturate, which keeps them outside every grid
    /// a [`Board`](crate::Board) can hold.
    pub fn from_grid(row: usize, col: usize) -> Self {
        Self {
            row: i32::try_from(row).unwrap_or(i32::MAX),
            col: i32::try_from(col).unwrap_or(i32::MAX),
        }
    }

    /// Row-major cell index on a `grid_size`×`grid_size` grid, or `None` when
    /// the coordinate lies outside it.
    pub fn index(&self, grid_size: usize) -> Option<usize> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        if row < grid_size && col < grid_size {
            Some(row * grid_size + col)
        } else {
            None
        }
    }

    /// Returns `true` if the coordinate lies within `[0, grid_size)` on both axes.
    pub fn in_bounds(&self, grid_size: usize) -> bool {
        self.index(grid_size).is_some()
    }

    /// Shift by `(d_row, d_col)`, or `None` on overflow.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(d_row)?,
            col: self.col.checked_add(d_col)?,
        })
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
