use std::collections::HashSet;

use broadside::{Board, DeployEngine, RandomDeployEngine};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn deployed_fleet_is_legal(
        seed in any::<u64>(),
        grid_size in 5usize..=12,
        lengths in prop::collection::vec(1usize..=5, 1..=5),
    ) {
        let mut engine = RandomDeployEngine::new(SmallRng::seed_from_u64(seed));
        let ships = engine.deploy(&lengths, grid_size).unwrap();

        prop_assert_eq!(ships.len(), lengths.len());
        let mut seen = HashSet::new();
        for ship in &ships {
            for cell in ship.cells() {
                prop_assert!(cell.in_bounds(grid_size), "{} outside {}x{}", cell, grid_size, grid_size);
                prop_assert!(seen.insert(*cell), "{} shared by two ships", cell);
            }
        }

        let mut placed: Vec<usize> = ships.iter().map(|s| s.len()).collect();
        let mut requested = lengths.clone();
        placed.sort_unstable();
        requested.sort_unstable();
        prop_assert_eq!(placed, requested);
    }

    #[test]
    fn same_seed_same_fleet(seed in any::<u64>()) {
        let mut a = RandomDeployEngine::new(SmallRng::seed_from_u64(seed));
        let mut b = RandomDeployEngine::new(SmallRng::seed_from_u64(seed));
        let fleet_a = a.deploy(&[5, 4, 3, 3, 2], 10).unwrap();
        let fleet_b = b.deploy(&[5, 4, 3, 3, 2], 10).unwrap();
        prop_assert_eq!(fleet_a, fleet_b);
    }

    #[test]
    fn board_accepts_every_deployment(seed in any::<u64>()) {
        let mut board = Board::new(10);
        let mut engine = RandomDeployEngine::new(SmallRng::seed_from_u64(seed));
        board.deploy_ships(&mut engine, &[5, 4, 3, 3, 2]).unwrap();
        prop_assert_eq!(board.ships_remaining(), 5);
    }
}
