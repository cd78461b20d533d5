//! Roll results and aggregation.

use serde::{Deserialize, Serialize};

/// The values produced by rolling a dice pool once.
///
/// A roll set is immutable once produced; the evaluator and the
/// front-ends only ever read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollSet {
    values: Vec<u32>,
}

impl RollSet {
    /// Build a roll set from raw die values.
    ///
    /// [`DicePool::roll`](crate::DicePool::roll) is the usual producer;
    /// this constructor exists for evaluating a known set of dice.
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// The individual die values, in roll order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of dice in the roll.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// The lowest single die value, or 0 if the roll is empty.
    pub fn lowest(&self) -> u32 {
        self.values.iter().copied().min().unwrap_or(0)
    }

    /// The highest single die value, or 0 if the roll is empty.
    pub fn highest(&self) -> u32 {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

impl std::fmt::Display for RollSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
