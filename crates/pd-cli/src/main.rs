//! Command-line front-end for Paydice.
//!
//! Rolls three d20s against the every-die-at-or-above-15 win condition
//! and, on a win, pays out a slice of the supplied paycheque according
//! to the reward tier table.

mod input;
mod output;

use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pd_mechanics::{DEFAULT_WIN_THRESHOLD, DicePool, evaluate_reward};

#[derive(Parser)]
#[command(
    name = "paydice",
    about = "Roll three d20s for a slice of your paycheque",
    version
)]
struct Cli {
    /// Biweekly paycheque amount, e.g. 2500 or 2500.00 (prompts if omitted)
    amount: Option<String>,

    /// RNG seed for a deterministic roll
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the reward tier table and exit
    #[arg(long)]
    tiers: bool,

    /// Print the roll and outcome as JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.tiers {
        output::print_tiers();
        return;
    }

    // In JSON mode stdout must stay machine-readable, so a missing
    // amount takes the default instead of prompting.
    let base = input::acquire_amount(cli.amount.as_deref(), !cli.json);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let pool = DicePool::default();
    let rolls = pool.roll(&mut rng);
    let outcome = evaluate_reward(&rolls, DEFAULT_WIN_THRESHOLD, base);

    let result = if cli.json {
        output::print_json(&rolls, base, &outcome)
    } else {
        output::print_report(&pool, &rolls, base, &outcome);
        Ok(())
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
