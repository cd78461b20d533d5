//! Dice pool configuration and rolling.
//!
//! A [`DicePool`] describes how many dice to roll and how many sides
//! each die has. Rolling consumes entropy from a caller-supplied RNG,
//! so a seeded generator reproduces the exact same [`RollSet`].

pub mod roll;

pub use roll::RollSet;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{DiceError, DiceResult};

/// Number of dice rolled per evaluation unless configured otherwise.
pub const DEFAULT_NUM_DICE: u32 = 3;

/// Sides per die unless configured otherwise.
pub const DEFAULT_SIDES: u32 = 20;

/// A fixed configuration of identical dice rolled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePool {
    num_dice: u32,
    sides: u32,
}

impl Default for DicePool {
    fn default() -> Self {
        Self {
            num_dice: DEFAULT_NUM_DICE,
            sides: DEFAULT_SIDES,
        }
    }
}

impl DicePool {
    /// Create a pool of `num_dice` dice with `sides` sides each.
    ///
    /// Both counts must be at least 1.
    pub fn new(num_dice: u32, sides: u32) -> DiceResult<Self> {
        if num_dice == 0 {
            return Err(DiceError::InvalidDiceCount(num_dice));
        }
        if sides == 0 {
            return Err(DiceError::InvalidSides(sides));
        }
        Ok(Self { num_dice, sides })
    }

    /// Number of dice in the pool.
    pub fn num_dice(&self) -> u32 {
        self.num_dice
    }

    /// Sides on each die in the pool.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll every die in the pool using the given RNG.
    ///
    /// Each value is drawn independently and uniformly from
    /// `[1, sides]`.
    pub fn roll(&self, rng: &mut StdRng) -> RollSet {
        let values = (0..self.num_dice)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        RollSet::from_values(values)
    }
}
