//! Report rendering: the human-readable roll report, the tier table,
//! and the machine-readable JSON variant.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use pd_mechanics::{
    DEFAULT_WIN_THRESHOLD, DicePool, Money, Multiplier, RewardOutcome, RollSet, tiers,
};

/// Print the full human-readable report for one roll.
pub fn print_report(pool: &DicePool, rolls: &RollSet, base: Money, outcome: &RewardOutcome) {
    println!(
        "  {} {}",
        "Paydice".bold(),
        format!(
            "({}d{}, win: every die >= {})",
            pool.num_dice(),
            pool.sides(),
            DEFAULT_WIN_THRESHOLD
        )
        .dimmed()
    );
    println!("  Paycheque: {base}");
    println!();

    for (i, value) in rolls.values().iter().enumerate() {
        println!("  Die {}: {}", i + 1, value.to_string().bold());
    }
    println!();

    match outcome {
        RewardOutcome::Lost => {
            println!(
                "  {} Not every die reached {DEFAULT_WIN_THRESHOLD}.",
                "You lost.".red().bold()
            );
        }
        RewardOutcome::Won {
            sum,
            multiplier,
            reward,
        } => {
            println!(
                "  {} Every die reached {DEFAULT_WIN_THRESHOLD}.",
                "You won!".green().bold()
            );
            println!();
            println!("  Sum:        {sum}");
            println!("  Multiplier: {multiplier}");
            println!("  Reward:     {}", reward.to_string().green().bold());
        }
    }
}

/// Print the reward tier table.
pub fn print_tiers() {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Dice sum", "Multiplier"]);
    for tier in tiers() {
        table.add_row(vec![
            format!("{}-{}", tier.low, tier.high),
            tier.multiplier.to_string(),
        ]);
    }
    table.add_row(vec!["any other sum".to_string(), Multiplier::ZERO.to_string()]);
    println!("{table}");
}

#[derive(Serialize)]
struct RollReport<'a> {
    rolls: &'a [u32],
    paycheque_cents: u64,
    #[serde(flatten)]
    outcome: &'a RewardOutcome,
}

/// Print the roll and outcome as pretty JSON.
///
/// Monetary fields are integer cents and the multiplier is integer
/// thousandths, so the output carries no floating-point values.
pub fn print_json(rolls: &RollSet, base: Money, outcome: &RewardOutcome) -> Result<(), String> {
    let report = RollReport {
        rolls: rolls.values(),
        paycheque_cents: base.cents(),
        outcome,
    };
    let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
