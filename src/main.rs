use broadside::{
    init_logging, Board, Combatant, GameConfig, InteractiveSelector, LogSink, Match,
    RandomDeployEngine, RandomSelector, Side, TerminalView, DEFAULT_GRID_SIZE,
    DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_SHIP_LENGTHS,
};

use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct SetupArgs {
    /// Edge length of the square grid.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: usize,
    /// Ship lengths, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SHIP_LENGTHS)]
    ships: Vec<usize>,
    /// Random placement attempts per ship before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
    max_attempts: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Show the enemy fleet on the board display.
    #[arg(long)]
    reveal: bool,
}

impl SetupArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            grid_size: self.grid_size,
            ship_lengths: self.ships.clone(),
            max_placement_attempts: self.max_attempts,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a computer that fires at random.
    Play {
        #[command(flatten)]
        setup: SetupArgs,
    },
    /// Watch two random-firing computers play each other.
    Watch {
        #[command(flatten)]
        setup: SetupArgs,
    },
}

fn rng_for(seed: Option<u64>, stream: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(stream)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn setup_board(config: &GameConfig, rng: SmallRng) -> anyhow::Result<Board> {
    let mut engine = RandomDeployEngine::new(rng).with_max_attempts(config.max_placement_attempts);
    let mut board = Board::new(config.grid_size);
    board.deploy_ships(&mut engine, &config.ship_lengths)?;
    Ok(board)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (setup, human) = match cli.command {
        Commands::Play { setup } => (setup, true),
        Commands::Watch { setup } => (setup, false),
    };
    let config = setup.config();
    config.validate()?;
    if let Some(s) = setup.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let mut player_board = setup_board(&config, rng_for(setup.seed, 0))?;
    let mut enemy_board = setup_board(&config, rng_for(setup.seed, 1))?;
    player_board.reveal_all();
    if setup.reveal {
        enemy_board.reveal_all();
    }

    let enemy_selector = RandomSelector::new(config.grid_size, rng_for(setup.seed, 2));
    let player = if human {
        Combatant::new(&mut player_board, InteractiveSelector::stdio())
    } else {
        Combatant::new(
            &mut player_board,
            RandomSelector::new(config.grid_size, rng_for(setup.seed, 3)),
        )
    };
    let enemy = Combatant::new(&mut enemy_board, enemy_selector);

    let mut view = TerminalView::stdout(Side::Challenger);
    view.display_title()?;
    let mut game = Match::new(player, enemy)?
        .with_observer(LogSink)
        .with_observer(view);
    let summary = game.play()?;
    println!(
        "Game over after {} rounds ({} shots).",
        summary.rounds, summary.turns
    );
    Ok(())
}
