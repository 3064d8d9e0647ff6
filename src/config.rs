use alloc::vec::Vec;

use crate::common::BoardError;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_SHIP_LENGTHS: [usize; 5] = [5, 4, 3, 3, 2];
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1_000;
/// Times a fleet that dead-ends is discarded and redrawn from scratch.
pub const DEFAULT_MAX_DEPLOY_RESTARTS: usize = 100;

/// Largest supported grid edge.
pub const MAX_GRID_SIZE: usize = 26;

/// Parameters supplied from outside the engine: grid size and fleet layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub grid_size: usize,
    pub ship_lengths: Vec<usize>,
    /// Random placement attempts allowed per ship before giving up.
    pub max_placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            ship_lengths: DEFAULT_SHIP_LENGTHS.to_vec(),
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn new(grid_size: usize, ship_lengths: Vec<usize>) -> Self {
        Self {
            grid_size,
            ship_lengths,
            ..Self::default()
        }
    }

    /// Total number of cells occupied by the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.ship_lengths.iter().sum()
    }

    /// Check the configuration can produce a legal board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(BoardError::InvalidGridSize(self.grid_size));
        }
        if self.ship_lengths.is_empty() {
            return Err(BoardError::EmptyFleet);
        }
        if let Some(&length) = self
            .ship_lengths
            .iter()
            .find(|&&len| len == 0 || len > self.grid_size)
        {
            return Err(BoardError::ShipDoesNotFit {
                length,
                grid_size: self.grid_size,
            });
        }
        let capacity = self.grid_size * self.grid_size;
        let cells = self.total_ship_cells();
        if cells > capacity {
            return Err(BoardError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_is_classic_fleet() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.ship_lengths, DEFAULT_SHIP_LENGTHS.to_vec());
        assert_eq!(config.total_ship_cells(), 17);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_unfit_configs() {
        assert_eq!(
            GameConfig::new(0, vec![1]).validate(),
            Err(BoardError::InvalidGridSize(0))
        );
        assert_eq!(
            GameConfig::new(5, vec![]).validate(),
            Err(BoardError::EmptyFleet)
        );
        assert_eq!(
            GameConfig::new(5, vec![3, 6]).validate(),
            Err(BoardError::ShipDoesNotFit {
                length: 6,
                grid_size: 5
            })
        );
        assert_eq!(
            GameConfig::new(2, vec![2, 2, 2]).validate(),
            Err(BoardError::FleetTooLarge {
                cells: 6,
                capacity: 4
            })
        );
    }
}
