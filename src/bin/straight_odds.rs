//! Estimates how often a five-card hand falls into a category.
//!
//! Deals hands from freshly shuffled decks until the target number of
//! matching hands is seen, then prints the observed probability.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use deckhand::{Category, Simulation, SimulationOptions};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hand category to count (pair, two-pair, trips, straight, flush, full-house, quads).
    #[arg(long, default_value = "straight")]
    category: Category,
    /// Matching hands to observe before stopping.
    #[arg(long, default_value_t = 10_000)]
    target: u64,
    /// Stop as soon as the first matching hand is found.
    #[arg(long)]
    stop_after_first: bool,
    /// Upper bound on hands dealt.
    #[arg(long)]
    max_trials: Option<u64>,
    /// RNG seed. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let options = SimulationOptions::default()
        .with_category(args.category)
        .with_target_matches(args.target)
        .with_stop_after_first(args.stop_after_first)
        .with_max_trials(args.max_trials);
    let report = match Simulation::new(options, seed).run() {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Simulation error: {err}");
            std::process::exit(1);
        }
    };

    if let Some(hand) = &report.first_match {
        println!("{hand}");
    }
    println!(
        "The probability of a {} is: {}%",
        args.category,
        report.probability_percent()
    );
}
