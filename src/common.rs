//! Common types for the engine: shot results and error enums.

use alloc::string::String;

use crate::coord::Coordinate;
use crate::game::Side;

/// Raw result of [`Board::fire_at`](crate::Board::fire_at).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShotResult {
    pub hit: bool,
    pub sunk: bool,
}

impl ShotResult {
    pub const MISS: Self = Self {
        hit: false,
        sunk: false,
    };
    pub const HIT: Self = Self {
        hit: true,
        sunk: false,
    };
    pub const SUNK: Self = Self {
        hit: true,
        sunk: true,
    };
}

/// Fully resolved outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck an intact ship segment.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
    /// Shot landed in open water; the miss is recorded.
    Miss,
    /// Shot landed outside the grid.
    OutOfBounds,
    /// Shot landed on a cell already marked hit or miss.
    AlreadyTargeted,
}

impl ShotOutcome {
    /// Returns `true` for outcomes that damaged a ship.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by ship construction, placement and board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Ship endpoints are diagonal to each other or describe zero length.
    InvalidShape { start: Coordinate, end: Coordinate },
    /// Ship extends outside the grid.
    ShipOutOfBounds,
    /// Ship shares a cell with an already placed ship.
    ShipOverlaps,
    /// Ship length can never fit on the grid.
    ShipDoesNotFit { length: usize, grid_size: usize },
    /// Random placement gave up after the configured number of attempts.
    PlacementFailed { length: usize, attempts: usize },
    /// Cell was already marked hit or miss.
    AlreadyTargeted(Coordinate),
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// No ship lengths were supplied.
    EmptyFleet,
    /// Grid size is zero or above the supported maximum.
    InvalidGridSize(usize),
    /// Ships would need more cells than the grid has.
    FleetTooLarge { cells: usize, capacity: usize },
    /// A deploy engine returned a different number of ships than requested.
    FleetMismatch { expected: usize, placed: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidShape { start, end } => {
                write!(f, "Ship from {} to {} is not a straight line", start, end)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipDoesNotFit { length, grid_size } => write!(
                f,
                "Ship of length {} does not fit on a {}x{} grid",
                length, grid_size, grid_size
            ),
            BoardError::PlacementFailed { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::AlreadyTargeted(coord) => {
                write!(f, "Cell {} has already been targeted", coord)
            }
            BoardError::OutOfBounds(coord) => write!(f, "Cell {} is out of bounds", coord),
            BoardError::EmptyFleet => write!(f, "At least one ship length is required"),
            BoardError::InvalidGridSize(n) => write!(f, "Invalid grid size {}", n),
            BoardError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the grid only has {}",
                cells, capacity
            ),
            BoardError::FleetMismatch { expected, placed } => write!(
                f,
                "Expected {} ships but {} were deployed",
                expected, placed
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors raised by a [`TargetSelector`](crate::TargetSelector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// No further targets can be produced (input closed, script ran out).
    Exhausted,
    /// The underlying input source failed.
    Input(String),
}

impl core::fmt::Display for SelectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SelectorError::Exhausted => write!(f, "No more targets available"),
            SelectorError::Input(msg) => write!(f, "Target input failed: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SelectorError {}

/// Errors returned while driving a [`Match`](crate::Match).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A side entered the match without any ships.
    NoShips(Side),
    /// A turn was requested after the match ended.
    GameOver,
    /// The acting side's selector could not produce a target.
    Selector { side: Side, source: SelectorError },
}

impl core::fmt::Display for MatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchError::NoShips(side) => write!(f, "{} has no ships deployed", side),
            MatchError::GameOver => write!(f, "Match is already over"),
            MatchError::Selector { side, source } => {
                write!(f, "{} could not select a target: {}", side, source)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Selector { source, .. } => Some(source),
            _ => None,
        }
    }
}
