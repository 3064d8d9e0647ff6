//! One side's grid: ships, shot history, and shot resolution.

use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, ShotOutcome, ShotResult};
use crate::coord::Coordinate;
use crate::placement::DeployEngine;
use crate::ship::Ship;

/// Stable identifier of a ship on its board, assigned in placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// What the shot history says about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unknown,
    Miss,
    Hit,
}

/// A cell as an observer should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Unknown,
    Miss,
    Hit,
    /// Untargeted ship segment, only visible once the board is revealed.
    Ship(ShipId),
}

/// Grid of cell states plus the ships still afloat.
#[derive(Clone)]
pub struct Board {
    grid_size: usize,
    cells: Vec<CellState>,
    ships: BTreeMap<ShipId, Ship>,
    next_id: usize,
    revealed: bool,
    shots_received: usize,
}

impl Board {
    /// Create an empty `grid_size`×`grid_size` board with every cell unknown.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            cells: vec![CellState::Unknown; grid_size * grid_size],
            ships: BTreeMap::new(),
            next_id: 0,
            revealed: false,
            shots_received: 0,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Remove all ships and forget the shot history.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Unknown);
        self.ships.clear();
        self.next_id = 0;
        self.revealed = false;
        self.shots_received = 0;
    }

    /// Place a single ship, rejecting it if it leaves the grid or overlaps
    /// a ship already afloat.
    pub fn place_ship(&mut self, ship: Ship) -> Result<ShipId, BoardError> {
        if !ship.cells().iter().all(|c| c.in_bounds(self.grid_size)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if self.ships.values().any(|s| s.overlaps(ship.cells())) {
            return Err(BoardError::ShipOverlaps);
        }
        let id = ShipId(self.next_id);
        self.next_id += 1;
        self.ships.insert(id, ship);
        Ok(id)
    }

    /// Replace the fleet with ships produced by `engine`.
    ///
    /// The board is cleared first. On error it is left empty.
    pub fn deploy_ships<E: DeployEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        lengths: &[usize],
    ) -> Result<(), BoardError> {
        self.clear();
        let ships = engine.deploy(lengths, self.grid_size)?;
        if ships.len() != lengths.len() {
            return Err(BoardError::FleetMismatch {
                expected: lengths.len(),
                placed: ships.len(),
            });
        }
        for ship in ships {
            if let Err(e) = self.place_ship(ship) {
                self.clear();
                return Err(e);
            }
        }
        log::debug!("board deployed with {} ships", self.ships.len());
        Ok(())
    }

    /// Make untargeted ship cells visible through [`Board::view`].
    pub fn reveal_all(&mut self) {
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Fire at `coord` against the ships afloat.
    ///
    /// The first ship reporting a hit marks the cell `Hit`; if that sinks
    /// it, the ship leaves the active fleet. Misses are not recorded here.
    pub fn fire_at(&mut self, coord: Coordinate) -> ShotResult {
        let struck = self
            .ships
            .iter_mut()
            .find_map(|(id, ship)| ship.resolve_shot(coord).then_some((*id, ship.is_sunk())));
        match struck {
            Some((id, sunk)) => {
                self.mark(coord, CellState::Hit);
                if sunk {
                    self.ships.remove(&id);
                    log::debug!("ship {:?} sunk at {}", id, coord);
                    ShotResult::SUNK
                } else {
                    ShotResult::HIT
                }
            }
            None => ShotResult::MISS,
        }
    }

    /// Resolve a shot completely: hit, then out-of-bounds, then already
    /// targeted, otherwise a recorded miss.
    ///
    /// Out-of-bounds and already-targeted shots leave the board untouched.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> ShotOutcome {
        let result = self.fire_at(coord);
        let outcome = if result.sunk {
            ShotOutcome::Sunk
        } else if result.hit {
            ShotOutcome::Hit
        } else if self.is_out_of_bounds(coord) {
            return ShotOutcome::OutOfBounds;
        } else if self.is_previously_targeted(coord) {
            return ShotOutcome::AlreadyTargeted;
        } else {
            self.mark(coord, CellState::Miss);
            ShotOutcome::Miss
        };
        self.shots_received += 1;
        outcome
    }

    /// Mark `coord` as a miss. Rejects, without mutating, cells that are out
    /// of bounds or already hit or missed.
    pub fn record_miss(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        match self.cell(coord) {
            None => Err(BoardError::OutOfBounds(coord)),
            Some(CellState::Unknown) => {
                self.mark(coord, CellState::Miss);
                Ok(())
            }
            Some(_) => Err(BoardError::AlreadyTargeted(coord)),
        }
    }

    pub fn is_out_of_bounds(&self, coord: Coordinate) -> bool {
        !coord.in_bounds(self.grid_size)
    }

    /// Returns `true` if the cell is marked hit or miss. Out-of-bounds
    /// coordinates were never targeted.
    pub fn is_previously_targeted(&self, coord: Coordinate) -> bool {
        matches!(
            self.cell(coord),
            Some(CellState::Hit) | Some(CellState::Miss)
        )
    }

    /// Number of ships still afloat; zero means this side has lost.
    pub fn ships_remaining(&self) -> usize {
        self.ships.len()
    }

    /// Ships still afloat, in placement order.
    pub fn ships(&self) -> impl Iterator<Item = (ShipId, &Ship)> + '_ {
        self.ships.iter().map(|(id, ship)| (*id, ship))
    }

    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        coord.index(self.grid_size).map(|i| self.cells[i])
    }

    /// Cell as it should be displayed, honouring [`Board::reveal_all`].
    pub fn view(&self, coord: Coordinate) -> Option<CellView> {
        let state = self.cell(coord)?;
        Some(match state {
            CellState::Hit => CellView::Hit,
            CellState::Miss => CellView::Miss,
            CellState::Unknown if self.revealed => self
                .ships
                .iter()
                .find(|(_, ship)| ship.occupies(coord))
                .map_or(CellView::Unknown, |(id, _)| CellView::Ship(*id)),
            CellState::Unknown => CellView::Unknown,
        })
    }

    /// Number of shots that hit, sank or missed on this board.
    pub fn shots_received(&self) -> usize {
        self.shots_received
    }

    fn mark(&mut self, coord: Coordinate, state: CellState) {
        if let Some(i) = coord.index(self.grid_size) {
            self.cells[i] = state;
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  grid_size: {},\n  ships: {:?},\n  revealed: {},\n  shots_received: {}\n}}",
            self.grid_size,
            self.ships,
            self.revealed,
            self.shots_received
        )
    }
}
