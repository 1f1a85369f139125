use battleship_solo::{init_logging, BoardSize, Driver, DriverConfig, StdConsole};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship on a 4x4 to 6x6 grid", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, value_parser = parse_size, help = "Play on this board size (4, 5 or 6) instead of asking")]
    size: Option<BoardSize>,
    #[arg(long, help = "Reveal all ships while playing")]
    debug: bool,
    #[arg(long, help = "Give up placing a ship after this many random samples")]
    max_attempts: Option<usize>,
    #[arg(long, help = "Exit after winning this many games")]
    sessions: Option<usize>,
}

fn parse_size(s: &str) -> Result<BoardSize, String> {
    let side: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    BoardSize::try_from(side).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let config = DriverConfig {
        board_size: cli.size,
        debug: cli.debug,
        max_attempts: cli.max_attempts,
        max_sessions: cli.sessions,
    };
    let mut driver = Driver::new(StdConsole::new(), rng, config);
    let summary = driver.run()?;
    log::info!(
        "exiting after {} won games and {} guesses",
        summary.sessions_won,
        summary.guesses
    );
    Ok(())
}
