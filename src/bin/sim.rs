use broadside::{
    init_logging, Board, Combatant, GameConfig, Match, RandomDeployEngine, RandomSelector, Side,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut b1 = Board::new(config.grid_size);
    let mut b2 = Board::new(config.grid_size);
    b1.deploy_ships(&mut RandomDeployEngine::new(&mut rng1), &config.ship_lengths)?;
    b2.deploy_ships(&mut RandomDeployEngine::new(&mut rng2), &config.ship_lengths)?;

    let p1 = Combatant::new(&mut b1, RandomSelector::new(config.grid_size, &mut rng1));
    let p2 = Combatant::new(&mut b2, RandomSelector::new(config.grid_size, &mut rng2));
    let summary = Match::new(p1, p2)?.play()?;

    let winner = match summary.winner {
        Side::Challenger => "player1",
        Side::Defender => "player2",
    };
    let result = json!({
        "config": config,
        "winner": winner,
        "summary": summary,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
