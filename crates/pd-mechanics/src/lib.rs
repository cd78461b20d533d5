//! Dice and reward mechanics for Paydice.
//!
//! Provides the full reward-calculation pipeline: rolling a pool of
//! dice, checking the all-dice-at-or-above-threshold win condition, and
//! mapping a winning sum to a payout through the tiered multiplier
//! table. Currency and multipliers are exact integer quantities, so the
//! same rolls and paycheque always produce the same reward to the cent.
//!
//! The front-ends (`pd-cli`, `pd-gui`) only ever call
//! [`DicePool::roll`] followed by [`evaluate_reward`]; everything else
//! here supports those two operations.

pub mod dice;
pub mod error;
pub mod money;
pub mod reward;

pub use dice::{DEFAULT_NUM_DICE, DEFAULT_SIDES, DicePool, RollSet};
pub use error::{DiceError, DiceResult};
pub use money::{DEFAULT_BASE_AMOUNT, Money};
pub use reward::{
    DEFAULT_WIN_THRESHOLD, Multiplier, RewardOutcome, Tier, evaluate_reward, is_win, tiers,
};
