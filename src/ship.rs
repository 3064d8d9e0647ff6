//! Ship definitions: a straight run of cells that sinks once every cell is hit.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship occupying a contiguous horizontal or vertical run of cells.
///
/// The shape is fixed at construction; only the set of intact cells changes.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Coordinate>,
    intact: BTreeSet<Coordinate>,
}

impl Ship {
    /// Build a ship spanning `start` to `end` inclusive.
    ///
    /// The endpoints must share a row or a column; they may be given in
    /// either order. Identical endpoints give a single-cell ship.
    pub fn new(start: Coordinate, end: Coordinate) -> Result<Self, BoardError> {
        let (orientation, from, to) = if start.row == end.row {
            (Orientation::Horizontal, start.col, end.col)
        } else if start.col == end.col {
            (Orientation::Vertical, start.row, end.row)
        } else {
            return Err(BoardError::InvalidShape { start, end });
        };
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        let cells: Vec<Coordinate> = (lo..=hi)
            .map(|i| match orientation {
                Orientation::Horizontal => Coordinate::new(start.row, i),
                Orientation::Vertical => Coordinate::new(i, start.col),
            })
            .collect();
        Ok(Self::from_cells(orientation, cells))
    }

    /// Build a ship of `length` cells extending right or down from `origin`.
    pub fn from_origin(
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, BoardError> {
        let span = length
            .checked_sub(1)
            .and_then(|n| i32::try_from(n).ok());
        let end = span.and_then(|n| match orientation {
            Orientation::Horizontal => origin.offset(0, n),
            Orientation::Vertical => origin.offset(n, 0),
        });
        match end {
            Some(end) => Self::new(origin, end),
            None => Err(BoardError::InvalidShape {
                start: origin,
                end: origin,
            }),
        }
    }

    fn from_cells(orientation: Orientation, cells: Vec<Coordinate>) -> Self {
        // A single cell has no direction; report it as horizontal.
        let orientation = if cells.len() == 1 {
            Orientation::Horizontal
        } else {
            orientation
        };
        let intact = cells.iter().copied().collect();
        Self {
            orientation,
            cells,
            intact,
        }
    }

    /// Returns `true` if the ship covers `coord`, hit or not.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Returns `true` if any of `coords` is covered by this ship.
    pub fn overlaps<'c, I>(&self, coords: I) -> bool
    where
        I: IntoIterator<Item = &'c Coordinate>,
    {
        coords.into_iter().any(|c| self.occupies(*c))
    }

    /// Register a shot at `coord`.
    ///
    /// Returns `true` and marks the cell hit if it was an intact segment;
    /// returns `false` for water and for segments already hit.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> bool {
        self.intact.remove(&coord)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.intact.is_empty()
    }

    /// Cells covered by the ship, ordered from the top-left end.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Cells not yet hit.
    pub fn intact_cells(&self) -> impl Iterator<Item = &Coordinate> + '_ {
        self.intact.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn hits_taken(&self) -> usize {
        self.cells.len() - self.intact.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left end of the ship.
    pub fn origin(&self) -> Coordinate {
        self.cells[0]
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, orientation: {:?}, length: {}, hits: {} }}",
            self.origin(),
            self.orientation,
            self.len(),
            self.hits_taken(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_endpoints_are_normalised() {
        let ship = Ship::new(Coordinate::new(4, 1), Coordinate::new(2, 1)).unwrap();
        assert_eq!(ship.orientation(), Orientation::Vertical);
        assert_eq!(
            ship.cells(),
            &[
                Coordinate::new(2, 1),
                Coordinate::new(3, 1),
                Coordinate::new(4, 1)
            ]
        );
    }

    #[test]
    fn zero_length_is_invalid() {
        let err = Ship::from_origin(Coordinate::new(0, 0), Orientation::Vertical, 0).unwrap_err();
        assert!(matches!(err, BoardError::InvalidShape { .. }));
    }
}
