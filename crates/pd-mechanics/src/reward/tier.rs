//! The reward tier table.
//!
//! Maps a winning dice sum to a payout multiplier through fixed,
//! inclusive, non-overlapping ranges. The table is design-time data and
//! covers 45–60, the full range of sums reachable under a win with the
//! default 3d20 pool and threshold 15. Sums outside the table map to a
//! zero multiplier rather than an error.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A payout fraction in thousandths (0.001 is stored as 1).
///
/// Storing thousandths keeps tier multipliers exact; the table only
/// uses values in `(0, 1]` plus the zero fallback.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The fallback multiplier for sums outside the tier table.
    pub const ZERO: Multiplier = Multiplier(0);

    /// A multiplier from a thousandths count (250 is 0.25).
    pub const fn from_thousandths(thousandths: u32) -> Self {
        Self(thousandths)
    }

    /// The multiplier in thousandths.
    pub const fn thousandths(self) -> u32 {
        self.0
    }

    /// Apply this multiplier to an amount, rounding half up to the cent.
    pub fn apply(self, base: Money) -> Money {
        // Table multipliers never exceed 1.000, so the quotient fits u64.
        let scaled = u128::from(base.cents()) * u128::from(self.0) + 500;
        Money::from_cents((scaled / 1000) as u64)
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:03}", self.0 / 1000, self.0 % 1000)
    }
}

/// One row of the tier table: an inclusive sum range and its multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Lowest sum in the tier (inclusive).
    pub low: u32,
    /// Highest sum in the tier (inclusive).
    pub high: u32,
    /// Payout multiplier for sums in this tier.
    pub multiplier: Multiplier,
}

static TIERS: [Tier; 8] = [
    tier(45, 46, 1),
    tier(47, 48, 10),
    tier(49, 50, 50),
    tier(51, 52, 100),
    tier(53, 54, 250),
    tier(55, 56, 500),
    tier(57, 58, 750),
    tier(59, 60, 900),
];

const fn tier(low: u32, high: u32, thousandths: u32) -> Tier {
    Tier {
        low,
        high,
        multiplier: Multiplier::from_thousandths(thousandths),
    }
}

/// The tier table rows, in ascending sum order.
pub fn tiers() -> &'static [Tier] {
    &TIERS
}

/// Look up the multiplier for a dice sum.
///
/// Sums outside every tier (unreachable under the default pool and
/// threshold) get [`Multiplier::ZERO`].
pub fn multiplier_for_sum(sum: u32) -> Multiplier {
    TIERS
        .iter()
        .find(|t| (t.low..=t.high).contains(&sum))
        .map(|t| t.multiplier)
        .unwrap_or(Multiplier::ZERO)
}
