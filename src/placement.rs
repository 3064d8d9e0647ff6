//! Fleet deployment: turning a list of ship lengths into non-overlapping ships.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{DEFAULT_MAX_DEPLOY_RESTARTS, DEFAULT_MAX_PLACEMENT_ATTEMPTS};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

/// Produces a fleet for a board.
pub trait DeployEngine {
    /// Return one ship per entry of `lengths`, all inside a
    /// `grid_size`×`grid_size` grid and pairwise non-overlapping.
    fn deploy(&mut self, lengths: &[usize], grid_size: usize) -> Result<Vec<Ship>, BoardError>;
}

impl<E: DeployEngine + ?Sized> DeployEngine for &mut E {
    fn deploy(&mut self, lengths: &[usize], grid_size: usize) -> Result<Vec<Ship>, BoardError> {
        (**self).deploy(lengths, grid_size)
    }
}

/// Rejection-sampling deployment with a per-ship attempt cap.
///
/// Ships are placed largest first. Each candidate gets a fair-coin
/// orientation and a start drawn so the run fits inside the grid; candidates
/// overlapping an accepted ship are discarded and resampled. When a ship
/// exhausts its attempts the partial fleet is dropped and placement restarts
/// from the largest ship, up to `max_restarts` times.
pub struct RandomDeployEngine<R: Rng> {
    rng: R,
    max_attempts: usize,
    max_restarts: usize,
}

impl<R: Rng> RandomDeployEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            max_restarts: DEFAULT_MAX_DEPLOY_RESTARTS,
        }
    }

    /// Override the number of candidates tried per ship.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Override how many times a dead-ended fleet is discarded and redrawn.
    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn max_restarts(&self) -> usize {
        self.max_restarts
    }

    /// Returns a random (origin, orientation) whose run of `length` fits the grid.
    fn random_candidate(&mut self, length: usize, grid_size: usize) -> (Coordinate, Orientation) {
        let orientation = if self.rng.random::<bool>() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let max_offset = grid_size - length;
        let (row, col) = match orientation {
            Orientation::Vertical => (
                self.rng.random_range(0..=max_offset),
                self.rng.random_range(0..grid_size),
            ),
            Orientation::Horizontal => (
                self.rng.random_range(0..grid_size),
                self.rng.random_range(0..=max_offset),
            ),
        };
        (Coordinate::from_grid(row, col), orientation)
    }

    fn place_one(
        &mut self,
        length: usize,
        grid_size: usize,
        placed: &[Ship],
    ) -> Result<Ship, BoardError> {
        for attempt in 1..=self.max_attempts {
            let (origin, orientation) = self.random_candidate(length, grid_size);
            let candidate = Ship::from_origin(origin, orientation, length)?;
            if placed.iter().all(|ship| !ship.overlaps(candidate.cells())) {
                log::trace!(
                    "placed length {} at {} {:?} after {} attempt(s)",
                    length,
                    origin,
                    orientation,
                    attempt
                );
                return Ok(candidate);
            }
            log::trace!("rejected length {} at {}: overlap", length, origin);
        }
        Err(BoardError::PlacementFailed {
            length,
            attempts: self.max_attempts,
        })
    }

    fn place_fleet(&mut self, ordered: &[usize], grid_size: usize) -> Result<Vec<Ship>, BoardError> {
        let mut ships: Vec<Ship> = Vec::with_capacity(ordered.len());
        for &length in ordered {
            let ship = self.place_one(length, grid_size, &ships)?;
            ships.push(ship);
        }
        Ok(ships)
    }
}

impl<R: Rng> DeployEngine for RandomDeployEngine<R> {
    fn deploy(&mut self, lengths: &[usize], grid_size: usize) -> Result<Vec<Ship>, BoardError> {
        if lengths.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        if let Some(&length) = lengths.iter().find(|&&l| l == 0 || l > grid_size) {
            return Err(BoardError::ShipDoesNotFit { length, grid_size });
        }

        let mut ordered = lengths.to_vec();
        ordered.sort_unstable_by(|a, b| b.cmp(a));

        let mut restarts = 0;
        loop {
            match self.place_fleet(&ordered, grid_size) {
                Ok(ships) => {
                    log::debug!(
                        "deployed {} ships on a {}x{} grid after {} restart(s)",
                        ships.len(),
                        grid_size,
                        grid_size,
                        restarts
                    );
                    return Ok(ships);
                }
                Err(BoardError::PlacementFailed { length, .. }) if restarts < self.max_restarts => {
                    restarts += 1;
                    log::debug!("length {} found no room, restarting fleet ({})", length, restarts);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
