#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, GameConfig, GameSession, GameStatus, Player, PlayerKind, Targeting,
    DEFAULT_BOARD_SIZE, FLEET, MAX_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::builder::RangedU64ValueParser;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a full human vs. computer session with an autopilot at the helm
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = board_size_parser())]
        size: usize,
    },
    /// Computer vs. computer from two seeds, printing a JSON summary
    Sim {
        seed1: u64,
        seed2: u64,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = board_size_parser())]
        size: usize,
    },
}

/// Board edge between 1 and `MAX_BOARD_SIZE`.
#[cfg(feature = "std")]
fn board_size_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..=MAX_BOARD_SIZE as u64)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, size } => run_local(seed, size),
        Commands::Sim { seed1, seed2, size } => run_sim(seed1, seed2, size),
    }
}

#[cfg(feature = "std")]
fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_local(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = rng_from(seed);
    let mut session = GameSession::new(GameConfig::new(size, FLEET.to_vec()));
    session.randomize_fleet(&mut rng)?;
    session.start(&mut rng)?;

    let mut autopilot = Targeting::new();
    let mut turns = 0usize;
    while !session.status().is_over() {
        let target = autopilot.select(&mut rng, session.computer().gameboard())?;
        let report = session.attack(&mut rng, target.x, target.y)?;
        autopilot.record(report.player.coord, report.player.outcome);
        turns += 1;
        match report.reply {
            Some(reply) => println!(
                "turn {:3}: fired at {} -> {:?}, enemy fired at {} -> {:?}",
                turns, report.player.coord, report.player.outcome, reply.coord, reply.outcome
            ),
            None => println!(
                "turn {:3}: fired at {} -> {:?}",
                turns, report.player.coord, report.player.outcome
            ),
        }
    }

    println!("\nFriendly waters:\n{}", session.human().gameboard());
    println!("Enemy waters:\n{}", session.computer().gameboard());
    match session.status() {
        GameStatus::Won => println!("VICTORY! Enemy fleet annihilated in {} turns.", turns),
        GameStatus::Lost => println!("DEFEAT. Friendly fleet lost after {} turns.", turns),
        _ => {}
    }
    Ok(())
}

#[cfg(feature = "std")]
fn run_sim(seed1: u64, seed2: u64, size: usize) -> anyhow::Result<()> {
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut p1 = Player::with_board_size(PlayerKind::Computer, size);
    let mut p2 = Player::with_board_size(PlayerKind::Computer, size);
    p1.place_fleet_randomly(&mut rng1, &FLEET)?;
    p2.place_fleet_randomly(&mut rng2, &FLEET)?;

    let mut shots = [0usize; 2];
    let winner = loop {
        p1.random_attack(&mut rng1, p2.gameboard_mut())?;
        shots[0] += 1;
        if p2.gameboard().all_ships_sunk() {
            break "player1";
        }
        p2.random_attack(&mut rng2, p1.gameboard_mut())?;
        shots[1] += 1;
        if p1.gameboard().all_ships_sunk() {
            break "player2";
        }
    };

    let result = json!({
        "player1": {"shots": shots[0], "ships_remaining": p1.gameboard().ships_remaining()},
        "player2": {"shots": shots[1], "ships_remaining": p2.gameboard().ships_remaining()},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
