//! Play batches of AI-vs-AI games and report how each seat fared.
//!
//! ```text
//! simulate --games 500 --first medium --second hard --rounds 3 --seed 42
//! ```

use clap::Parser;
use log::{error, info};

use dont_shut_the_box::{
    Difficulty, GameBuilder, LogPresenter, NoHumanInput, NullPresenter, Presenter,
};

#[derive(Parser)]
#[command(author, version, about = "Simulate AI-vs-AI games of don't shut the box", long_about = None)]
struct Args {
    /// Number of games to play.
    #[arg(short, long, default_value_t = 100)]
    games: u64,

    /// Rounds per game (1-10).
    #[arg(short, long, default_value_t = 3)]
    rounds: u32,

    /// Seed of the first game; game i uses seed + i.
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Difficulty of the first seat.
    #[arg(long, default_value = "medium")]
    first: Difficulty,

    /// Difficulty of the second seat.
    #[arg(long, default_value = "hard")]
    second: Difficulty,

    /// Log every game event.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> dont_shut_the_box::Result<()> {
    let mut wins = [0u64; 2];
    let mut totals = [0u64; 2];
    let mut presenter: Box<dyn Presenter> = if args.verbose {
        Box::new(LogPresenter)
    } else {
        Box::new(NullPresenter)
    };

    for game in 0..args.games {
        let mut engine = GameBuilder::new()
            .ai(format!("AI-1 ({})", args.first), args.first)
            .ai(format!("AI-2 ({})", args.second), args.second)
            .rounds(args.rounds)
            .build(args.seed.wrapping_add(game))?;

        let outcome = engine.play(&mut NoHumanInput, presenter.as_mut())?;
        wins[outcome.winner.index()] += 1;
        for (total, score) in totals.iter_mut().zip(&outcome.scores) {
            *total += u64::from(*score);
        }
    }

    let games = args.games.max(1) as f64;
    info!("{} games, {} rounds each", args.games, args.rounds);
    for (seat, difficulty) in [args.first, args.second].iter().enumerate() {
        info!(
            "seat {} ({difficulty}): {} wins, mean score {:.2}",
            seat + 1,
            wins[seat],
            totals[seat] as f64 / games
        );
    }
    Ok(())
}
