//! Plays one session by guessing every cell in random order and prints a
//! JSON summary.

use anyhow::Context;
use battleship_solo::{init_logging, BoardSize, GameSession, GuessOutcome};
use clap::Parser;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

#[derive(Parser)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 6)]
    size: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let size = BoardSize::try_from(args.size)?;
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut session =
        GameSession::new(size, &mut rng, Some(10_000)).context("placing the fleet")?;

    let side = size.side();
    let mut targets: Vec<(usize, usize)> = (0..side)
        .flat_map(|r| (0..side).map(move |c| (r, c)))
        .collect();
    targets.shuffle(&mut rng);

    let (mut hits, mut misses) = (0usize, 0usize);
    let mut last = None;
    for (r, c) in targets {
        let outcome = session.resolve_guess(r, c)?;
        match outcome {
            GuessOutcome::Miss => misses += 1,
            GuessOutcome::Hit(_) | GuessOutcome::HitAndAllSunk(_) => hits += 1,
            GuessOutcome::AlreadyGuessed => {}
        }
        last = Some(outcome);
        if matches!(outcome, GuessOutcome::HitAndAllSunk(_)) {
            break;
        }
    }

    let result = json!({
        "size": size,
        "seed": args.seed,
        "guesses": session.guesses(),
        "hits": hits,
        "misses": misses,
        "last": last,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
